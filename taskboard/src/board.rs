//! TaskBoard - the surface the rendering and gesture layers talk to.

use crate::defaults::demo_board;
use crate::error::Result;
use crate::session::{DragController, DragSession};
use crate::store::BoardStore;
use crate::types::{BoardSnapshot, ColorTag, DragGeometry, DragOutcome, GestureEvent, Item, List};
use tokio::sync::watch;

/// A board store paired with the drag controller that mutates it.
///
/// Between drags the renderer calls the add/remove commands directly; during a
/// drag the gesture layer feeds events in and the controller decides what
/// changes. Either way the renderer re-reads `snapshot()` or listens on
/// `subscribe()`.
#[derive(Debug, Default)]
pub struct TaskBoard {
    store: BoardStore,
    drag: DragController,
}

impl TaskBoard {
    /// Wrap an existing store
    pub fn new(store: BoardStore) -> Self {
        Self {
            store,
            drag: DragController::new(),
        }
    }

    /// The three-list demo board
    pub fn demo() -> Result<Self> {
        Ok(Self::new(demo_board()?))
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current board, lists in creation order
    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    /// Snapshot stream, updated after every mutation
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.store.subscribe()
    }

    /// The session in progress, if any
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// The card being dragged, for the overlay
    pub fn active_item(&self) -> Option<&Item> {
        self.drag.active_item(&self.store)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    pub fn add_list(
        &mut self,
        id: &str,
        title: &str,
        color: Option<ColorTag>,
    ) -> Result<&List> {
        self.store.add_list(id, title, color)
    }

    pub fn add_item(&mut self, list: &str, title: &str) -> Result<Item> {
        self.store.add_item(list, title)
    }

    pub fn remove_item(&mut self, list: &str, item: &str) -> Result<Option<Item>> {
        self.store.remove_item(list, item)
    }

    // =========================================================================
    // Gesture events
    // =========================================================================

    pub fn on_drag_start(&mut self, item: &str) -> DragOutcome {
        self.drag.on_drag_start(&self.store, item)
    }

    pub fn on_drag_over(
        &mut self,
        active: &str,
        over: Option<&str>,
        geometry: &DragGeometry,
    ) -> DragOutcome {
        self.drag
            .on_drag_over(&mut self.store, active, over, geometry)
    }

    pub fn on_drag_end(&mut self, active: &str, over: Option<&str>) -> DragOutcome {
        self.drag.on_drag_end(&mut self.store, active, over)
    }

    pub fn on_drag_cancel(&mut self) -> DragOutcome {
        self.drag.cancel()
    }

    /// Feed a gesture event given as data
    pub fn dispatch(&mut self, event: &GestureEvent) -> DragOutcome {
        self.drag.dispatch(&mut self.store, event)
    }
}
