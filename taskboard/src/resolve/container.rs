//! Container lookup: which list owns a given id.

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ListId;

/// Resolve an item id or a list id to the list that owns it.
///
/// A list id resolves to itself, which is what lets a card be dropped onto an
/// empty list's body.
pub fn locate(store: &BoardStore, id: &str) -> Result<ListId> {
    if let Some(list) = store.list(id) {
        return Ok(list.id.clone());
    }

    store
        .lists()
        .find(|list| list.contains(id))
        .map(|list| list.id.clone())
        .ok_or_else(|| BoardError::NotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> BoardStore {
        let mut store = BoardStore::new();
        store.add_list("todo", "Todo", None).unwrap();
        store.add_list("done", "Done", None).unwrap();
        store.add_item_with_id("done", "task-1", "Ship").unwrap();
        store
    }

    #[test]
    fn test_locate_list_id_returns_itself() {
        let store = store();
        assert_eq!(locate(&store, "todo").unwrap(), "todo");
    }

    #[test]
    fn test_locate_item_returns_owner() {
        let store = store();
        assert_eq!(locate(&store, "task-1").unwrap(), "done");
    }

    #[test]
    fn test_locate_unknown_id() {
        let store = store();
        let err = locate(&store, "ghost").unwrap_err();
        assert!(err.is_not_found());
    }
}
