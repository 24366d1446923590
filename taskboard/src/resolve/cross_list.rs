//! Insertion index for a card hovering over a different list.

use super::container::locate;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{DragGeometry, ItemId, ListId};
use tracing::trace;

/// A provisional move of the dragged card into another list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossListMove {
    pub item: ItemId,
    pub from: ListId,
    pub to: ListId,
    pub index: usize,
}

/// Work out where `active` lands when hovering `over`.
///
/// Returns `None` when both ids resolve to the same list; that case belongs to
/// the same-list resolver and is settled on drop.
///
/// - Hovering a list body appends to that list.
/// - Hovering a card inserts before it, or after it once the dragged card's
///   translated top edge is past the hovered card's bottom edge.
pub fn resolve(
    store: &BoardStore,
    active: &str,
    over: &str,
    geometry: &DragGeometry,
) -> Result<Option<CrossListMove>> {
    let from = locate(store, active)?;
    let to = locate(store, over)?;
    if from == to {
        return Ok(None);
    }

    let target = store
        .list(to.as_str())
        .ok_or_else(|| BoardError::list_not_found(to.as_str()))?;

    let index = if store.has_list(over) {
        target.len()
    } else {
        match target.position_of(over) {
            Some(over_index) => {
                let modifier = usize::from(geometry.is_below_over());
                (over_index + modifier).min(target.len())
            }
            None => target.len(),
        }
    };

    trace!(active, over, %from, %to, index, "resolved cross-list insertion");
    Ok(Some(CrossListMove {
        item: ItemId::from(active),
        from,
        to,
        index,
    }))
}

/// Apply a resolved move to the store. Returns the index the card landed at.
pub fn apply(store: &mut BoardStore, plan: &CrossListMove) -> Result<usize> {
    store.move_item(
        plan.item.as_str(),
        plan.from.as_str(),
        plan.to.as_str(),
        plan.index,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn store() -> BoardStore {
        let mut store = BoardStore::new();
        store.add_list("a", "A", None).unwrap();
        store.add_list("b", "B", None).unwrap();
        store.add_item_with_id("a", "a1", "a1").unwrap();
        store.add_item_with_id("a", "a2", "a2").unwrap();
        store.add_item_with_id("b", "b1", "b1").unwrap();
        store.add_item_with_id("b", "b2", "b2").unwrap();
        store
    }

    #[test]
    fn test_same_list_defers() {
        let store = store();
        let plan = resolve(&store, "a1", "a2", &DragGeometry::default()).unwrap();
        assert_eq!(plan, None);
        let plan = resolve(&store, "a1", "a", &DragGeometry::default()).unwrap();
        assert_eq!(plan, None);
    }

    #[test]
    fn test_over_list_body_appends() {
        let store = store();
        let plan = resolve(&store, "a1", "b", &DragGeometry::default())
            .unwrap()
            .unwrap();
        assert_eq!(plan.index, 2);
        assert_eq!(plan.from, "a");
        assert_eq!(plan.to, "b");
    }

    #[test]
    fn test_over_item_above_and_below() {
        let store = store();
        let rect = Rect::new(100.0, 50.0);

        let above = resolve(&store, "a1", "b2", &DragGeometry::new(rect, 120.0))
            .unwrap()
            .unwrap();
        assert_eq!(above.index, 1);

        let below = resolve(&store, "a1", "b2", &DragGeometry::new(rect, 151.0))
            .unwrap()
            .unwrap();
        assert_eq!(below.index, 2);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let store = store();
        assert!(resolve(&store, "ghost", "b", &DragGeometry::default())
            .unwrap_err()
            .is_not_found());
        assert!(resolve(&store, "a1", "ghost", &DragGeometry::default())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_apply_moves_and_rewrites_owner() {
        let mut store = store();
        let plan = resolve(&store, "a2", "b1", &DragGeometry::default())
            .unwrap()
            .unwrap();
        assert_eq!(apply(&mut store, &plan).unwrap(), 0);

        let b: Vec<_> = store.list("b").unwrap().items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(b, ["a2", "b1", "b2"]);
        assert_eq!(store.item("a2").unwrap().list, "b");
        store.verify().unwrap();
    }
}
