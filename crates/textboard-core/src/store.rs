//! Live item store and immutable snapshots.

use crate::error::{BoardError, BoardResult};
use crate::item::{FontStyle, ItemId, TextColor, TextItem};
use kurbo::Point;
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// An immutable copy of every placed item at one instant, in z-order.
///
/// Cloning a snapshot shares the underlying items.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot(Arc<[TextItem]>);

impl Snapshot {
    pub fn items(&self) -> &[TextItem] {
        &self.0
    }

    /// Serialize the snapshot to JSON (for handing to a renderer).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items().serialize(serializer)
    }
}

impl Deref for Snapshot {
    type Target = [TextItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The live, ordered collection of placed text items.
///
/// Insertion order is z-order: later items are drawn on top.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<TextItem>,
    next_id: u64,
    default_position: Point,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create an empty store placing new items at the default position.
    pub fn new() -> Self {
        Self::with_default_position(crate::BoardConfig::DEFAULT_POSITION)
    }

    pub fn with_default_position(default_position: Point) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            default_position,
        }
    }

    /// Create a new item and append it on top of the others.
    pub fn add(
        &mut self,
        content: &str,
        font_size: f64,
        font_style: FontStyle,
        color: TextColor,
    ) -> BoardResult<TextItem> {
        if content.is_empty() {
            return Err(BoardError::InvalidInput("text content is empty".to_string()));
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(BoardError::InvalidInput(format!(
                "font size must be positive, got {font_size}"
            )));
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        let item = TextItem::new(
            id,
            content.to_string(),
            self.default_position,
            font_size,
            font_style,
            color,
        );
        self.items.push(item.clone());
        Ok(item)
    }

    /// Move an item. Unknown ids and non-finite coordinates are ignored.
    /// Returns true if the item was moved.
    pub fn move_item(&mut self, id: ItemId, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        match self.get_mut(id) {
            Some(item) => {
                item.set_position(Point::new(x, y));
                true
            }
            None => false,
        }
    }

    /// Remove an item. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) -> Option<TextItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Take an immutable copy of the current items.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Arc::from(self.items.as_slice()))
    }

    /// Replace every item with the contents of a snapshot.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.items = snapshot.items().to_vec();
    }

    /// Items in z-order (back to front).
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&TextItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut TextItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
