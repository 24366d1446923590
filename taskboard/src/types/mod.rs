//! Core types for the task board engine

mod board;
mod event;
mod geometry;
mod ids;
mod snapshot;

// Re-export all types
pub use board::{ColorTag, Item, List};
pub use event::{DragOutcome, GestureEvent};
pub use geometry::{DragGeometry, Rect};
pub use ids::{ItemId, ListId};
pub use snapshot::{BoardSnapshot, ItemSnapshot, ListSnapshot};
