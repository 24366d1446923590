//! Final ordering for a card dropped inside the list it is already in.

use super::container::locate;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ListId;

/// A stable move inside one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub list: ListId,
    pub from: usize,
    pub to: usize,
}

/// Work out the reorder for dropping `active` onto `over`.
///
/// The card takes the hovered card's index. Dropping onto the list's own body
/// sends it to the end. Returns `None` when the ids live in different lists or
/// the card would not move.
pub fn resolve(store: &BoardStore, active: &str, over: &str) -> Result<Option<Reorder>> {
    let from_list = locate(store, active)?;
    let over_list = locate(store, over)?;
    if from_list != over_list {
        return Ok(None);
    }

    let list = store
        .list(from_list.as_str())
        .ok_or_else(|| BoardError::list_not_found(from_list.as_str()))?;
    let from = list
        .position_of(active)
        .ok_or_else(|| BoardError::item_not_found(active))?;
    let to = if store.has_list(over) {
        list.len().saturating_sub(1)
    } else {
        list.position_of(over)
            .ok_or_else(|| BoardError::item_not_found(over))?
    };

    if from == to {
        return Ok(None);
    }
    Ok(Some(Reorder {
        list: from_list,
        from,
        to,
    }))
}

/// Apply a resolved reorder to the store
pub fn apply(store: &mut BoardStore, plan: &Reorder) -> Result<()> {
    store.reorder_within_list(plan.list.as_str(), plan.from, plan.to)
}
