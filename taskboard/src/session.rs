//! Drag session state machine.
//!
//! ```text
//! Idle --start--> Dragging --over--> Dragging
//!                 Dragging --end/cancel--> Idle
//! ```
//!
//! Cross-list hovers move the card immediately so the board previews the drop.
//! Those moves are never rolled back: ending or cancelling a drag keeps
//! whatever the last preview left behind. Same-list reordering waits for the
//! drop.

use crate::error::BoardError;
use crate::resolve::{cross_list, locate, same_list};
use crate::store::BoardStore;
use crate::types::{DragGeometry, DragOutcome, GestureEvent, Item, ItemId, ListId};
use tracing::{debug, warn};

/// The ephemeral record of one drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Card being dragged
    pub item: ItemId,
    /// List the card was in when the drag started
    pub source: ListId,
    /// List the card is in now, after any previews
    pub current: ListId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Orchestrates the resolvers across the lifetime of a drag gesture.
///
/// Events are expected strictly in order for one gesture. The controller never
/// holds on to the store; each event borrows it for the duration of the call.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// The card under the pointer, for drawing a drag overlay
    pub fn active_item<'a>(&self, store: &'a BoardStore) -> Option<&'a Item> {
        self.session()
            .and_then(|session| store.item(session.item.as_str()))
    }

    /// Feed one gesture event through the state machine
    pub fn dispatch(&mut self, store: &mut BoardStore, event: &GestureEvent) -> DragOutcome {
        match event {
            GestureEvent::Start { active } => self.on_drag_start(store, active.as_str()),
            GestureEvent::Over {
                active,
                over,
                geometry,
            } => self.on_drag_over(store, active.as_str(), over.as_deref(), geometry),
            GestureEvent::End { active, over } => {
                self.on_drag_end(store, active.as_str(), over.as_deref())
            }
            GestureEvent::Cancel => self.cancel(),
        }
    }

    /// Begin dragging `item`.
    ///
    /// A start that arrives mid-drag replaces the old session.
    pub fn on_drag_start(&mut self, store: &BoardStore, item: &str) -> DragOutcome {
        if let Some(previous) = self.session() {
            warn!(previous = %previous.item, item, "drag started while another was active");
        }

        let source = match locate(store, item) {
            Ok(list) if !store.has_list(item) => list,
            Ok(_) => return self.abandon(BoardError::item_not_found(item)),
            Err(error) => return self.abandon(error),
        };

        debug!(item, %source, "drag started");
        self.state = DragState::Dragging(DragSession {
            item: ItemId::from(item),
            source: source.clone(),
            current: source.clone(),
        });
        DragOutcome::Started {
            item: ItemId::from(item),
            list: source,
        }
    }

    /// The pointer moved over `over` (an item id, a list id, or nothing).
    pub fn on_drag_over(
        &mut self,
        store: &mut BoardStore,
        active: &str,
        over: Option<&str>,
        geometry: &DragGeometry,
    ) -> DragOutcome {
        if !self.owns(active) {
            return DragOutcome::Ignored;
        }
        let Some(over) = over else {
            return DragOutcome::Held;
        };

        let plan = match cross_list::resolve(store, active, over, geometry) {
            Ok(Some(plan)) => plan,
            Ok(None) => return DragOutcome::Held,
            Err(error) => return self.abandon(error),
        };

        if let Err(error) = cross_list::apply(store, &plan) {
            return self.abandon(error);
        }

        debug!(active, from = %plan.from, to = %plan.to, index = plan.index, "previewed cross-list move");
        if let DragState::Dragging(session) = &mut self.state {
            session.current = plan.to.clone();
        }
        DragOutcome::Previewed {
            item: plan.item,
            from: plan.from,
            to: plan.to,
            index: plan.index,
        }
    }

    /// The card was released over `over`, or outside every drop zone.
    pub fn on_drag_end(
        &mut self,
        store: &mut BoardStore,
        active: &str,
        over: Option<&str>,
    ) -> DragOutcome {
        if !self.owns(active) {
            return DragOutcome::Ignored;
        }
        self.state = DragState::Idle;

        let Some(over) = over else {
            debug!(active, "drag ended outside any drop zone");
            return DragOutcome::Dropped;
        };

        let outcome = match same_list::resolve(store, active, over) {
            Ok(Some(plan)) => match same_list::apply(store, &plan) {
                Ok(()) => DragOutcome::Reordered {
                    list: plan.list,
                    from: plan.from,
                    to: plan.to,
                },
                Err(error) => return self.abandon(error),
            },
            Ok(None) => DragOutcome::Dropped,
            Err(error) => return self.abandon(error),
        };

        debug!(active, over, ?outcome, "drag ended");
        outcome
    }

    /// Abort the gesture. Previews already applied stay on the board.
    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                debug!(item = %session.item, "drag cancelled");
                DragOutcome::Cancelled
            }
            DragState::Idle => DragOutcome::Ignored,
        }
    }

    fn owns(&self, active: &str) -> bool {
        match &self.state {
            DragState::Dragging(session) if session.item == active => true,
            DragState::Dragging(session) => {
                warn!(expected = %session.item, got = active, "event for a different item");
                false
            }
            DragState::Idle => {
                warn!(item = active, "drag event without an active session");
                false
            }
        }
    }

    fn abandon(&mut self, error: BoardError) -> DragOutcome {
        if error.is_not_found() {
            debug!(%error, "abandoning drag");
        } else {
            warn!(%error, "abandoning drag after unexpected error");
        }
        self.state = DragState::Idle;
        DragOutcome::Abandoned {
            reason: error.to_string(),
        }
    }
}
