use std::fmt;

use indexmap::IndexMap;

use super::quantity::format_count;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = format_count(Some(self.count));
        let parts: Vec<&str> = [count.as_str(), self.unit.as_str(), self.ingredient.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Ordered shopping list, independent of any recipe
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: IndexMap<String, ShoppingListItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, defaulting the count to 1 and the unit to empty
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: Option<&str>,
        ingredient: &str,
    ) -> &ShoppingListItem {
        self.next_id += 1;
        let id = format!("item-{}", self.next_id);
        let item = ShoppingListItem {
            id: id.clone(),
            count: count.unwrap_or(1.0),
            unit: unit.unwrap_or_default().to_string(),
            ingredient: ingredient.to_string(),
        };
        self.items.entry(id).or_insert(item)
    }

    /// Remove an item; unknown ids are ignored
    pub fn delete_item(&mut self, id: &str) -> Option<ShoppingListItem> {
        self.items.shift_remove(id)
    }

    /// Set the count of an item; unknown ids are ignored
    pub fn update_count(&mut self, id: &str, count: f64) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.count = count;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
