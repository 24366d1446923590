//! Task board engine with drag-reordering reconciliation
//!
//! This crate holds the state of a single-page task board (named lists of
//! cards) and turns a stream of drag gestures into the right placement of the
//! dragged card, including moves between lists.
//!
//! ## Overview
//!
//! - **BoardStore** - owns lists and items; order in a list is display order
//! - **Resolvers** - find a card's list and compute insertion indices
//! - **DragController** - start/over/end/cancel state machine
//! - **TaskBoard** - the store and controller together, behind one API
//!
//! Rendering, gesture capture and persistence live outside this crate. The
//! gesture layer reports ids plus a small [`DragGeometry`] record; the
//! renderer reads [`BoardSnapshot`]s.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{DragGeometry, TaskBoard};
//!
//! # fn example() -> taskboard::Result<()> {
//! let mut board = TaskBoard::demo()?;
//!
//! board.on_drag_start("task-1");
//! board.on_drag_over("task-1", Some("done"), &DragGeometry::default());
//! board.on_drag_end("task-1", Some("done"));
//!
//! assert_eq!(board.snapshot().item_ids("done"), ["task-7", "task-8", "task-1"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod auto_color;
mod board;
pub mod defaults;
mod error;
pub mod resolve;
mod session;
mod store;
pub mod types;

pub use board::TaskBoard;
pub use error::{BoardError, Result};
pub use session::{DragController, DragSession};
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{
    BoardSnapshot, ColorTag, DragGeometry, DragOutcome, GestureEvent, Item, ItemId, ItemSnapshot,
    List, ListId, ListSnapshot, Rect,
};
