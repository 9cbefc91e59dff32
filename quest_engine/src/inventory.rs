//! Inventory module
//!
//! The hero carries at most [`CAPACITY`] items. New arrivals push out the oldest item,
//! but a potion can be pulled from anywhere in the pack when it is drunk.

use std::collections::VecDeque;

use log::info;
use quest_data::HEALTH_POTION;

use crate::hero::Hero;

/// Maximum number of items carried.
pub const CAPACITY: usize = 5;
/// Health restored by drinking a potion.
pub const POTION_HEAL: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: VecDeque<String>,
}
impl Inventory {
    pub fn new() -> Inventory {
        Inventory::default()
    }

    /// Build an inventory by adding each item in order.
    pub fn with_items<I, S>(items: I) -> Inventory
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inventory = Inventory::new();
        for item in items {
            inventory.add_item(item);
        }
        inventory
    }

    /// Add an item at the back. When full, the oldest item is evicted and returned.
    pub fn add_item(&mut self, item: impl Into<String>) -> Option<String> {
        let evicted = if self.items.len() >= CAPACITY {
            self.items.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            info!("inventory full: '{old}' dropped");
        }
        self.items.push_back(item.into());
        evicted
    }

    /// Remove the first item with exactly this name, wherever it sits.
    pub fn remove_item(&mut self, name: &str) -> Option<String> {
        let idx = self.items.iter().position(|item| item == name)?;
        self.items.remove(idx)
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Drink the first Health Potion found and heal the hero by [`POTION_HEAL`].
    /// Returns `false` and changes nothing when no potion is carried.
    pub fn use_health_potion(&mut self, hero: &mut Hero) -> bool {
        if self.remove_item(HEALTH_POTION).is_none() {
            return false;
        }
        hero.heal(POTION_HEAL);
        info!("health potion consumed, hero at {} hp", hero.health());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names, oldest first.
    pub fn to_vec(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }
}
