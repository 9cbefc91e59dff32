//! Health Module
//!
//! Hit point bookkeeping for the hero.
use std::cmp;

/// Current and maximum hit points. Current health never leaves `0..=max_hp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Get the current HP
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether the owner is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal. Saturates at max health.
    pub fn heal(&mut self, amount: u32) {
        self.current_hp = cmp::min(self.max_hp, self.current_hp.saturating_add(amount));
    }

    /// Change the maximum and refill current health to it.
    pub fn reset_max(&mut self, max_hp: u32) {
        self.max_hp = max_hp;
        self.current_hp = max_hp;
    }
}

/// Possible life states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}
