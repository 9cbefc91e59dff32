//! Challenges and the index that finds them.
//!
//! Challenges are stored in an unbalanced binary search tree keyed by difficulty.
//! The game probes the tree with the current room number, so a challenge of difficulty
//! `n` is the one waiting in room `n`. Ties route right, which means the first challenge
//! inserted with a given difficulty is the one a lookup finds.

use log::info;
use quest_data::{ChallengeDef, ChallengeKind};

use crate::hero::{Hero, LevelUp};
use crate::rules::RulesConfig;

/// Experience granted for overcoming any challenge.
pub const EXPERIENCE_PER_SUCCESS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub difficulty: u32,
    pub kind: ChallengeKind,
}
impl Challenge {
    pub fn new(difficulty: u32, kind: ChallengeKind) -> Challenge {
        Challenge { difficulty, kind }
    }

    /// The score this challenge is tested against for the given hero.
    pub fn tested_score(&self, hero: &Hero) -> u32 {
        match self.kind {
            ChallengeKind::Combat => hero.strength,
            ChallengeKind::Trap => hero.agility,
            ChallengeKind::Puzzle => hero.intelligence,
            ChallengeKind::Boss => hero.average_score(),
        }
    }

    pub fn is_overcome_by(&self, hero: &Hero) -> bool {
        self.tested_score(hero) >= self.difficulty
    }

    /// Damage for failing: `difficulty - average score`, raised to at least `floor`.
    pub fn failure_damage(&self, hero: &Hero, floor: u32) -> u32 {
        self.difficulty.saturating_sub(hero.average_score()).max(floor)
    }
}
impl From<&ChallengeDef> for Challenge {
    fn from(def: &ChallengeDef) -> Self {
        Challenge::new(def.difficulty, def.kind)
    }
}

/// What happened when the hero faced a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Overcome { experience: u32, level_up: Option<LevelUp> },
    Failed { damage: u32 },
}

/// Test the hero against a challenge and apply the consequences.
pub fn resolve_challenge(hero: &mut Hero, challenge: &Challenge, rules: &RulesConfig) -> ChallengeOutcome {
    if challenge.is_overcome_by(hero) {
        let experience = if rules.awards_experience {
            EXPERIENCE_PER_SUCCESS
        } else {
            0
        };
        let level_up = if experience > 0 {
            hero.gain_experience(experience)
        } else {
            None
        };
        info!(
            "{} challenge (difficulty {}) overcome, +{experience} xp",
            challenge.kind.as_str(),
            challenge.difficulty
        );
        ChallengeOutcome::Overcome { experience, level_up }
    } else {
        let damage = challenge.failure_damage(hero, rules.damage_floor);
        hero.take_damage(damage);
        info!(
            "{} challenge (difficulty {}) failed, {damage} damage taken, {} hp left",
            challenge.kind.as_str(),
            challenge.difficulty,
            hero.health()
        );
        ChallengeOutcome::Failed { damage }
    }
}

#[derive(Debug, Clone)]
struct Node {
    challenge: Challenge,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}
impl Node {
    fn new(challenge: Challenge) -> Node {
        Node {
            challenge,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of challenges keyed by difficulty. Never rebalanced.
#[derive(Debug, Clone, Default)]
pub struct ChallengeIndex {
    root: Option<Box<Node>>,
    len: usize,
}
impl ChallengeIndex {
    pub fn new() -> ChallengeIndex {
        ChallengeIndex::default()
    }

    /// Insert a challenge. Smaller difficulties go left, equal or larger go right.
    pub fn insert(&mut self, challenge: Challenge) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if challenge.difficulty < node.challenge.difficulty {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(challenge)));
        self.len += 1;
    }

    /// Find the challenge whose difficulty equals `key` (the current room number).
    pub fn lookup(&self, key: u32) -> Option<&Challenge> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if key == node.challenge.difficulty {
                return Some(&node.challenge);
            }
            cursor = if key < node.challenge.difficulty {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}
impl FromIterator<Challenge> for ChallengeIndex {
    fn from_iter<T: IntoIterator<Item = Challenge>>(iter: T) -> Self {
        let mut index = ChallengeIndex::new();
        for challenge in iter {
            index.insert(challenge);
        }
        index
    }
}
