//! Resolvers that turn a drag position into a board mutation.
//!
//! All of them are pure functions over the current store plus the event
//! payload. Index math clamps; only unresolvable ids produce errors.

mod container;
pub mod cross_list;
pub mod same_list;

pub use container::locate;
pub use cross_list::CrossListMove;
pub use same_list::Reorder;
