//! Board-level types: List, Item, ColorTag

use super::ids::{ItemId, ListId};
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// `list` always names the list whose `items` currently hold this card; the
/// store rewrites it on every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "containerId")]
    pub list: ListId,
}

impl Item {
    /// Create a new item owned by `list`
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, list: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            list: list.into(),
        }
    }
}

/// Opaque display attribute of a list. The engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTag(String);

impl ColorTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Deterministic palette color for a list that was created without one
    pub fn auto(seed: &str) -> Self {
        Self(format!("#{}", crate::auto_color::auto_color(seed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A column: a named, ordered sequence of items.
///
/// Position in `items` is the only ordering; there is no rank field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(rename = "colorTag")]
    pub color: ColorTag,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl List {
    /// Create an empty list
    pub fn new(id: impl Into<ListId>, title: impl Into<String>, color: ColorTag) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color,
            items: Vec::new(),
        }
    }

    /// Position of an item in this list
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Check whether this list holds the item
    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
