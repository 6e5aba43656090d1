use crate::model::{ItemId, ShoppingItem};

/// In-memory shopping list, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: ItemId,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item under a fresh id and return it
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> ShoppingItem {
        self.next_id += 1;
        let item = ShoppingItem {
            id: self.next_id,
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item.clone());
        item
    }

    /// Remove the item with `id`; unknown ids are ignored
    pub fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    pub fn update_count(&mut self, id: ItemId, count: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = Some(count);
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
