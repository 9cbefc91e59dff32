//! Hero -- the player's stat record
use crate::health::{HealthState, LifeState};

use log::info;
use quest_data::{HeroDef, StatKind};

/// Health at level 1.
pub const BASE_MAX_HEALTH: u32 = 20;
/// Extra maximum health per level gained.
pub const HEALTH_PER_LEVEL: u32 = 5;
/// Stat points added to each attribute on level-up.
pub const LEVEL_UP_STAT_BONUS: u32 = 2;

/// Maximum health for a given level.
pub fn max_health_for(level: u32) -> u32 {
    BASE_MAX_HEALTH + level.saturating_sub(1) * HEALTH_PER_LEVEL
}

/// Reported when accumulated experience pushes the hero to a new level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    health: HealthState,
    level: u32,
    experience: u32,
    leveling: bool,
}
impl Hero {
    /// A level 1 hero at full health. With `leveling` off the hero never advances past level 1.
    pub fn new(strength: u32, agility: u32, intelligence: u32, leveling: bool) -> Hero {
        Hero {
            strength,
            agility,
            intelligence,
            health: HealthState::new_at_max(BASE_MAX_HEALTH),
            level: 1,
            experience: 0,
            leveling,
        }
    }

    pub fn from_def(def: &HeroDef, leveling: bool) -> Hero {
        Hero::new(def.strength, def.agility, def.intelligence, leveling)
    }

    pub fn health(&self) -> u32 {
        self.health.current_hp()
    }

    pub fn max_health(&self) -> u32 {
        self.health.max_hp()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn life_state(&self) -> LifeState {
        self.health.life_state()
    }

    pub fn is_alive(&self) -> bool {
        self.life_state() == LifeState::Alive
    }

    /// Integer mean of the three attributes, rounded down.
    pub fn average_score(&self) -> u32 {
        (self.strength + self.agility + self.intelligence) / 3
    }

    pub fn stat(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Strength => self.strength,
            StatKind::Agility => self.agility,
            StatKind::Intelligence => self.intelligence,
        }
    }

    /// Raise a single attribute.
    pub fn boost(&mut self, stat: StatKind, amount: u32) {
        let target = match stat {
            StatKind::Strength => &mut self.strength,
            StatKind::Agility => &mut self.agility,
            StatKind::Intelligence => &mut self.intelligence,
        };
        *target = target.saturating_add(amount);
    }

    /// Lose health, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }

    /// Regain health, stopping at the current maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health.heal(amount);
    }

    /// Add experience. Reaching `level * 10` resets experience, raises the level, adds
    /// [`LEVEL_UP_STAT_BONUS`] to every attribute and refills health to the new maximum.
    pub fn gain_experience(&mut self, xp: u32) -> Option<LevelUp> {
        self.experience = self.experience.saturating_add(xp);
        if !self.leveling || self.experience < self.level * 10 {
            return None;
        }
        self.experience = 0;
        self.level += 1;
        self.strength += LEVEL_UP_STAT_BONUS;
        self.agility += LEVEL_UP_STAT_BONUS;
        self.intelligence += LEVEL_UP_STAT_BONUS;
        let max_health = max_health_for(self.level);
        self.health.reset_max(max_health);
        info!("hero reached level {} (max health {max_health})", self.level);
        Some(LevelUp {
            level: self.level,
            max_health,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hero_is_level_one_at_full_health() {
        let hero = Hero::new(5, 7, 8, true);
        assert_eq!(hero.health(), 20);
        assert_eq!(hero.max_health(), 20);
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.experience(), 0);
        assert_eq!(hero.average_score(), 6);
    }

    #[test]
    fn damage_never_goes_below_zero() {
        let mut hero = Hero::new(5, 7, 8, true);
        hero.take_damage(15);
        hero.take_damage(15);
        assert_eq!(hero.health(), 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut hero = Hero::new(5, 7, 8, true);
        hero.take_damage(3);
        hero.heal(10);
        assert_eq!(hero.health(), 20);
    }

    #[test]
    fn level_up_after_two_successes() {
        let mut hero = Hero::new(5, 7, 8, true);
        assert_eq!(hero.gain_experience(5), None);
        hero.take_damage(6);
        let level_up = hero.gain_experience(5).expect("should level up at 10 xp");
        assert_eq!(level_up, LevelUp { level: 2, max_health: 25 });
        assert_eq!((hero.strength, hero.agility, hero.intelligence), (7, 9, 10));
        assert_eq!(hero.experience(), 0);
        assert_eq!(hero.health(), 25);

        hero.take_damage(1);
        hero.heal(100);
        assert_eq!(hero.health(), 25);
    }

    #[test]
    fn second_level_needs_twenty_xp() {
        let mut hero = Hero::new(1, 1, 1, true);
        hero.gain_experience(10);
        assert_eq!(hero.gain_experience(15), None);
        assert!(hero.gain_experience(5).is_some());
        assert_eq!(hero.level(), 3);
        assert_eq!(hero.max_health(), 30);
    }

    #[test]
    fn leveling_disabled_keeps_level_one() {
        let mut hero = Hero::new(5, 7, 8, false);
        assert_eq!(hero.gain_experience(50), None);
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.max_health(), 20);
    }

    #[test]
    fn boost_raises_single_stat() {
        let mut hero = Hero::new(5, 7, 8, true);
        hero.boost(StatKind::Agility, 5);
        assert_eq!(hero.stat(StatKind::Agility), 12);
        assert_eq!(hero.stat(StatKind::Strength), 5);
    }
}
