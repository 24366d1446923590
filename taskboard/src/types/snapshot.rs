//! Read-only board snapshots handed to the rendering layer.

use super::board::{ColorTag, List};
use super::ids::{ItemId, ListId};
use serde::{Deserialize, Serialize};

/// A card as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub title: String,
}

/// A column as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    #[serde(rename = "listId")]
    pub id: ListId,
    pub title: String,
    #[serde(rename = "colorTag")]
    pub color: ColorTag,
    #[serde(rename = "itemCount")]
    pub item_count: usize,
    pub items: Vec<ItemSnapshot>,
}

impl From<&List> for ListSnapshot {
    fn from(list: &List) -> Self {
        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            color: list.color.clone(),
            item_count: list.items.len(),
            items: list
                .items
                .iter()
                .map(|item| ItemSnapshot {
                    id: item.id.clone(),
                    title: item.title.clone(),
                })
                .collect(),
        }
    }
}

/// The whole board, lists in creation order.
///
/// `revision` increases by one for every mutation of the store, so observers
/// can skip redundant re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub revision: u64,
    pub lists: Vec<ListSnapshot>,
}

impl BoardSnapshot {
    /// Find a list by id
    pub fn list(&self, id: &str) -> Option<&ListSnapshot> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Item ids of one list, in display order. Empty if the list is absent.
    pub fn item_ids(&self, list: &str) -> Vec<&str> {
        self.list(list)
            .map(|l| l.items.iter().map(|item| item.id.as_str()).collect())
            .unwrap_or_default()
    }

    /// Same content, ignoring the revision counter.
    ///
    /// Renderers compare against the last snapshot they drew to skip redraws
    /// for mutations that left the layout as it was (a re-added card, a
    /// reorder undone by the next one).
    pub fn same_layout(&self, other: &BoardSnapshot) -> bool {
        self.lists == other.lists
    }
}
