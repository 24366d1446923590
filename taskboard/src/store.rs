//! BoardStore - the canonical ordered collection of lists and items
//!
//! The store is a plain state container. It knows nothing about drag
//! gestures; the resolvers compute *where* things go and call the mutation
//! primitives here to put them there.

use crate::error::{BoardError, Result};
use crate::types::{BoardSnapshot, ColorTag, Item, ItemId, List, ListId, ListSnapshot};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;
use tokio::sync::watch;
use tracing::{debug, trace, warn};
use ulid::Generator;

/// Owner of all lists and items on one board.
///
/// Lists keep their creation order. Every mutation bumps `revision` and
/// publishes a fresh snapshot to subscribers.
pub struct BoardStore {
    lists: IndexMap<ListId, List>,
    ids: Generator,
    revision: u64,
    published: watch::Sender<BoardSnapshot>,
}

impl BoardStore {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            lists: IndexMap::new(),
            ids: Generator::new(),
            revision: 0,
            published: watch::Sender::new(BoardSnapshot::default()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Lists in creation order
    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.lists.values()
    }

    /// Get a list by id
    pub fn list(&self, id: &str) -> Option<&List> {
        self.lists.get(id)
    }

    /// Check whether `id` names a list
    pub fn has_list(&self, id: &str) -> bool {
        self.lists.contains_key(id)
    }

    /// Find an item anywhere on the board
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.lists
            .values()
            .flat_map(|list| list.items.iter())
            .find(|item| item.id == id)
    }

    /// Total number of items across all lists
    pub fn item_count(&self) -> usize {
        self.lists.values().map(List::len).sum()
    }

    /// Number of mutations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Build a read-only view for the rendering layer
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            revision: self.revision,
            lists: self.lists.values().map(ListSnapshot::from).collect(),
        }
    }

    /// Receive a new snapshot after every mutation.
    ///
    /// The receiver starts out holding the current state.
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        // Mutations made while nobody listened were never published
        if self.published.receiver_count() == 0 {
            self.published.send_replace(self.snapshot());
        }
        self.published.subscribe()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create an empty list at the end of the board.
    ///
    /// A missing color tag is derived from the list id. List ids and item ids
    /// share one namespace, so an id already used by a card is rejected.
    pub fn add_list(
        &mut self,
        id: impl Into<ListId>,
        title: impl Into<String>,
        color: Option<ColorTag>,
    ) -> Result<&List> {
        let id = id.into();
        if self.lists.contains_key(&id) || self.item(id.as_str()).is_some() {
            warn!(list = %id, "refusing to add list with colliding id");
            return Err(BoardError::duplicate_id("list", id.as_str()));
        }

        let color = color.unwrap_or_else(|| ColorTag::auto(id.as_str()));
        let list = List::new(id.clone(), title, color);
        debug!(list = %id, "adding list");
        self.lists.insert(id.clone(), list);
        self.touch();

        Ok(&self.lists[&id])
    }

    /// Append a new card with a generated id to the end of `list`.
    ///
    /// The title is trimmed; a blank title is rejected.
    pub fn add_item(&mut self, list: &str, title: &str) -> Result<Item> {
        let title = normalize_title(title)?;
        if !self.has_list(list) {
            return Err(BoardError::list_not_found(list));
        }

        let ulid = self.ids.generate().map_err(|_| BoardError::IdExhausted)?;
        self.push_item(list, ItemId::from_ulid(ulid), title)
    }

    /// Append a card with a caller-chosen id (seed data, imports).
    pub fn add_item_with_id(
        &mut self,
        list: &str,
        id: impl Into<ItemId>,
        title: &str,
    ) -> Result<Item> {
        let title = normalize_title(title)?;
        if !self.has_list(list) {
            return Err(BoardError::list_not_found(list));
        }
        self.push_item(list, id.into(), title)
    }

    fn push_item(&mut self, list: &str, id: ItemId, title: String) -> Result<Item> {
        if self.item(id.as_str()).is_some() || self.has_list(id.as_str()) {
            warn!(item = %id, "refusing to add item with colliding id");
            return Err(BoardError::duplicate_id("item", id.as_str()));
        }

        let target = self
            .lists
            .get_mut(list)
            .ok_or_else(|| BoardError::list_not_found(list))?;
        let item = Item::new(id, title, target.id.clone());
        debug!(list, item = %item.id, position = target.items.len(), "adding item");
        target.items.push(item.clone());
        self.touch();

        Ok(item)
    }

    /// Remove a card from `list`.
    ///
    /// An absent list is an error; an absent item is a no-op returning `None`.
    pub fn remove_item(&mut self, list: &str, item: &str) -> Result<Option<Item>> {
        let target = self
            .lists
            .get_mut(list)
            .ok_or_else(|| BoardError::list_not_found(list))?;

        let Some(index) = target.position_of(item) else {
            trace!(list, item, "remove_item: item not in list");
            return Ok(None);
        };

        let removed = target.items.remove(index);
        debug!(list, item, index, "removed item");
        self.touch();
        Ok(Some(removed))
    }

    /// Move a card to `to` at `index` (clamped to the valid range).
    ///
    /// Everything is validated before anything changes, so the item ends up in
    /// exactly one place even when `from == to`. Returns the index the item
    /// actually landed at.
    pub fn move_item(&mut self, item: &str, from: &str, to: &str, index: usize) -> Result<usize> {
        let source = self
            .lists
            .get(from)
            .ok_or_else(|| BoardError::list_not_found(from))?;
        if !self.has_list(to) {
            return Err(BoardError::list_not_found(to));
        }
        let source_index = source
            .position_of(item)
            .ok_or_else(|| BoardError::item_not_found(item))?;

        let mut moved = self.lists[from].items.remove(source_index);
        let target = &mut self.lists[to];
        let landed = index.min(target.items.len());
        moved.list = target.id.clone();
        target.items.insert(landed, moved);

        debug!(item, from, to, source_index, landed, "moved item");
        self.touch();
        Ok(landed)
    }

    /// Move the element at `source` to `destination` within one list.
    ///
    /// `destination` is an index into the list *after* the element has been
    /// taken out, and is clamped to it. Equal indices leave the list alone.
    pub fn reorder_within_list(&mut self, list: &str, source: usize, destination: usize) -> Result<()> {
        let target = self
            .lists
            .get_mut(list)
            .ok_or_else(|| BoardError::list_not_found(list))?;

        let len = target.items.len();
        if source >= len {
            return Err(BoardError::InvalidIndex {
                list: list.to_string(),
                index: source,
                len,
            });
        }

        let destination = destination.min(len - 1);
        if source == destination {
            trace!(list, source, "reorder_within_list: no-op");
            return Ok(());
        }

        let moved = target.items.remove(source);
        target.items.insert(destination, moved);
        debug!(list, source, destination, "reordered list");
        self.touch();
        Ok(())
    }

    // =========================================================================
    // Invariants
    // =========================================================================

    /// Check that every item sits in exactly one list, ids are unique, and
    /// each item's owner field matches the list holding it.
    pub fn verify(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (key, list) in &self.lists {
            if key != &list.id {
                return Err(BoardError::corrupt(format!(
                    "list '{}' is stored under key '{}'",
                    list.id, key
                )));
            }
            for item in &list.items {
                if !seen.insert(item.id.as_str()) || self.has_list(item.id.as_str()) {
                    return Err(BoardError::duplicate_id("item", item.id.as_str()));
                }
                if item.list != list.id {
                    return Err(BoardError::corrupt(format!(
                        "item '{}' claims list '{}' but is held by '{}'",
                        item.id, item.list, list.id
                    )));
                }
            }
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
        if self.published.receiver_count() > 0 {
            self.published.send_replace(self.snapshot());
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("lists", &self.lists)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

fn normalize_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::invalid_value("title", "must not be blank"));
    }
    Ok(title.to_string())
}
