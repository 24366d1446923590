//! Built-in demo board.

use crate::error::Result;
use crate::store::BoardStore;
use crate::types::ColorTag;

/// Seed lists: id, title, color tag
const DEMO_LISTS: &[(&str, &str, &str)] = &[
    ("todo", "Todo", "#2196F3"),
    ("inProgress", "In Progress", "#FF9800"),
    ("done", "Done", "#4CAF50"),
];

/// Seed cards: list, id, title
const DEMO_ITEMS: &[(&str, &str, &str)] = &[
    ("todo", "task-1", "Create initial project plan"),
    ("todo", "task-2", "Design landing page"),
    ("todo", "task-3", "Review codebase structure"),
    ("inProgress", "task-4", "Implement authentication"),
    ("inProgress", "task-5", "Set up database schema"),
    ("inProgress", "task-6", "Fix navbar bugs"),
    ("done", "task-7", "Organize project repository"),
    ("done", "task-8", "Write API documentation"),
];

/// A board with three lists and eight cards, as shown on first launch
pub fn demo_board() -> Result<BoardStore> {
    let mut store = BoardStore::new();
    for (id, title, color) in DEMO_LISTS {
        store.add_list(*id, *title, Some(ColorTag::from(*color)))?;
    }
    for (list, id, title) in DEMO_ITEMS {
        store.add_item_with_id(list, *id, title)?;
    }
    Ok(store)
}
