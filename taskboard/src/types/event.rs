//! Gesture events consumed by the drag controller and the outcomes it reports.

use super::geometry::DragGeometry;
use super::ids::{ItemId, ListId};
use serde::{Deserialize, Serialize};

/// An event produced by the gesture-detection layer.
///
/// `over` names either an item or a list; `None` means the pointer is outside
/// every drop zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    Start {
        active: ItemId,
    },
    Over {
        active: ItemId,
        #[serde(default)]
        over: Option<String>,
        #[serde(default)]
        geometry: DragGeometry,
    },
    End {
        active: ItemId,
        #[serde(default)]
        over: Option<String>,
    },
    Cancel,
}

/// What the controller did with one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    /// A session began for `item`, sourced from `list`
    Started { item: ItemId, list: ListId },
    /// The item was provisionally moved to another list
    Previewed {
        item: ItemId,
        from: ListId,
        to: ListId,
        index: usize,
    },
    /// Over-event that needs no board change (same list, or no target)
    Held,
    /// Drop inside one list changed the item's position
    Reordered {
        list: ListId,
        from: usize,
        to: usize,
    },
    /// Drop that left the board as it was
    Dropped,
    /// Session discarded by an explicit cancel
    Cancelled,
    /// Session discarded because an id stopped resolving
    Abandoned { reason: String },
    /// Event did not belong to the current session
    Ignored,
}

impl DragOutcome {
    /// True if the board changed and the renderer should re-read it
    pub fn mutated_board(&self) -> bool {
        matches!(self, Self::Previewed { .. } | Self::Reordered { .. })
    }

    /// True if the controller is idle after this outcome
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            Self::Reordered { .. } | Self::Dropped | Self::Cancelled | Self::Abandoned { .. }
        )
    }
}
