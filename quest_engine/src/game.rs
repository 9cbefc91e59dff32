//! The turn loop.
//!
//! Each turn: show the scene, resolve the room's challenge, roll for treasure, maybe
//! drink a potion, pick the next room, record it on the path, and check whether the
//! game is over. All randomness comes from the single generator owned by [`GameLoop`].

use anyhow::{Context, Result};
use log::{info, warn};
use quest_data::RoomId;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::challenge::{ChallengeOutcome, resolve_challenge};
use crate::command::{MoveChoice, parse_move_choice};
use crate::input::InputSource;
use crate::inventory::POTION_HEAL;
use crate::rules::{MovementMode, RulesConfig};
use crate::style::GameStyle;
use crate::treasure::roll_treasure;
use crate::view::{MessageKind, Presenter};
use crate::world::QuestWorld;

/// Health at or below which the hero drinks a potion if one is carried.
pub const AUTO_HEAL_THRESHOLD: u32 = 5;

const MOVE_PROMPT: &str = "Choose your next room (or 0 to backtrack): ";

/// Where the game stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Dead,
    ReachedExit,
    /// The input channel closed before the game ended.
    Abandoned,
}
impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Dead,
    Victory,
    Abandoned,
}

/// How the hero left a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Took an exit that was asked for.
    Chosen(RoomId),
    /// Bad or missing choice; an exit was picked at random.
    Random(RoomId),
    /// Rolled by automatic movement.
    Rolled(RoomId),
    /// Stepped back along the path to this room.
    Backtracked(RoomId),
    /// Nowhere to go.
    Stayed(RoomId),
}
impl Movement {
    pub fn destination(self) -> RoomId {
        match self {
            Movement::Chosen(room)
            | Movement::Random(room)
            | Movement::Rolled(room)
            | Movement::Backtracked(room)
            | Movement::Stayed(room) => room,
        }
    }
}

/// Seed a generator from the rules, or from the OS if no seed is configured.
pub fn rng_for(rules: &RulesConfig) -> StdRng {
    match rules.seed {
        Some(seed) => {
            info!("using seeded generator ({seed})");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_os_rng(),
    }
}

/// Owns the world and the random source for one game.
pub struct GameLoop<R: Rng> {
    world: QuestWorld,
    rng: R,
    state: GameState,
    turn: u32,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(world: QuestWorld, rng: R) -> Self {
        Self {
            world,
            rng,
            state: GameState::Playing,
            turn: 0,
        }
    }

    pub fn world(&self) -> &QuestWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut QuestWorld {
        &mut self.world
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of turns started so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Play turns until the game ends, then announce the ending.
    ///
    /// # Errors
    /// - a room lookup fails (broken content), or reading input fails
    pub fn run(&mut self, presenter: &mut dyn Presenter, input: &mut dyn InputSource) -> Result<GameOutcome> {
        while !self.state.is_over() {
            self.take_turn(presenter, input)
                .with_context(|| format!("during turn {}", self.turn))?;
        }
        let outcome = match self.state {
            GameState::Dead => {
                presenter.show_message(MessageKind::Death, "Game Over! You perished on your journey.");
                GameOutcome::Dead
            },
            GameState::ReachedExit => {
                presenter.show_message(MessageKind::Victory, "You have reached the final room!");
                presenter.show_message(
                    MessageKind::Victory,
                    &format!("Victory! You survived {}!", self.world.title),
                );
                GameOutcome::Victory
            },
            GameState::Abandoned | GameState::Playing => {
                presenter.show_message(MessageKind::Info, "You abandon the quest.");
                GameOutcome::Abandoned
            },
        };
        presenter.flush();
        info!("game ended after {} turns: {outcome:?}", self.turn);
        Ok(outcome)
    }

    /// Play a single turn and return the resulting state. A hero killed this turn still
    /// moves before the game ends.
    ///
    /// # Errors
    /// - the current room or a movement target is not on the map
    /// - reading input fails
    pub fn take_turn(&mut self, presenter: &mut dyn Presenter, input: &mut dyn InputSource) -> Result<GameState> {
        if self.state.is_over() {
            return Ok(self.state);
        }
        self.turn += 1;
        info!("================> BEGIN TURN {} <================", self.turn);

        self.render(presenter)?;
        self.face_challenge(presenter);
        self.look_for_treasure(presenter);

        if self.world.hero.health() <= AUTO_HEAL_THRESHOLD
            && self.world.inventory.use_health_potion(&mut self.world.hero)
        {
            presenter.show_message(
                MessageKind::Healed,
                &format!("You used a Health Potion and regained {POTION_HEAL} Health!"),
            );
            presenter.flush();
            return Ok(self.state);
        }

        let Some(movement) = self.next_room(presenter, input)? else {
            self.state = if self.world.hero.is_alive() {
                GameState::Abandoned
            } else {
                GameState::Dead
            };
            return Ok(self.state);
        };
        let destination = movement.destination();
        info!("hero moves {} -> {destination} ({movement:?})", self.world.current_room);
        self.world.current_room = destination;
        self.world.path.visit(destination);

        if !self.world.hero.is_alive() {
            info!("hero died on the way to room {destination}");
            self.state = GameState::Dead;
        } else if self.world.at_exit() {
            self.state = GameState::ReachedExit;
        }
        presenter.flush();
        Ok(self.state)
    }

    fn render(&self, presenter: &mut dyn Presenter) -> Result<()> {
        let room = self.world.current_room;
        presenter.show_room(room, self.world.graph.describe(room)?);
        presenter.show_stats(&self.world.hero);
        presenter.show_inventory(&self.world.inventory.to_vec());
        presenter.show_path(self.world.path.current_path());
        Ok(())
    }

    fn face_challenge(&mut self, presenter: &mut dyn Presenter) {
        let Some(challenge) = self.world.challenges.lookup(self.world.current_room).copied() else {
            return;
        };
        presenter.show_message(
            MessageKind::Info,
            &format!("You encountered a {} challenge!", challenge.kind.as_str()),
        );
        match resolve_challenge(&mut self.world.hero, &challenge, &self.world.rules) {
            ChallengeOutcome::Overcome { level_up, .. } => {
                presenter.show_message(MessageKind::Success, "You successfully overcame the challenge!");
                if level_up.is_some() {
                    presenter.show_message(MessageKind::Success, "You leveled up! Stats increased!");
                }
            },
            ChallengeOutcome::Failed { damage: 0 } => {
                presenter.show_message(MessageKind::Failure, "You failed the challenge but escaped unharmed.");
            },
            ChallengeOutcome::Failed { damage } => {
                presenter.show_message(MessageKind::Failure, &format!("You took {damage} damage!"));
            },
        }
    }

    fn look_for_treasure(&mut self, presenter: &mut dyn Presenter) {
        if let Some(treasure) = roll_treasure(&mut self.rng, &self.world.treasures) {
            presenter.show_message(
                MessageKind::Treasure,
                &format!("You found {}, effect: {}", treasure.name, treasure.effect()),
            );
            treasure.apply(&mut self.world.hero);
        }
    }

    /// Decide where the hero goes. `None` means the input channel closed.
    fn next_room(&mut self, presenter: &mut dyn Presenter, input: &mut dyn InputSource) -> Result<Option<Movement>> {
        match self.world.rules.movement {
            MovementMode::Interactive => self.ask_for_room(presenter, input),
            MovementMode::Automatic => self.roll_room(presenter).map(Some),
        }
    }

    fn ask_for_room(&mut self, presenter: &mut dyn Presenter, input: &mut dyn InputSource) -> Result<Option<Movement>> {
        let current = self.world.current_room;
        let exits = self.world.graph.exit_list(current)?;
        presenter.show_exits(&exits);
        presenter.flush();

        let prompt = format!("\n{}", MOVE_PROMPT.prompt_style());
        let Some(line) = input.read_choice(&prompt).context("reading room choice")? else {
            return Ok(None);
        };
        let movement = match parse_move_choice(&line) {
            MoveChoice::Backtrack => self.backtrack(presenter),
            MoveChoice::Room(room) if exits.iter().any(|(to, _)| *to == room) => Movement::Chosen(room),
            MoveChoice::Room(room) => {
                warn!("room {room} is not reachable from room {current}");
                presenter.show_message(MessageKind::Warning, "Invalid choice! Moving randomly...");
                self.random_exit()?
            },
            MoveChoice::Invalid(text) => {
                warn!("unparseable room choice '{text}'");
                presenter.show_message(MessageKind::Warning, "Invalid input! Moving randomly...");
                self.random_exit()?
            },
        };
        Ok(Some(movement))
    }

    /// Automatic movement: one of the two target rooms or a backtrack, equally likely.
    fn roll_room(&mut self, presenter: &mut dyn Presenter) -> Result<Movement> {
        let [first, second] = self.world.rules.auto_targets;
        let movement = match self.rng.random_range(0..3) {
            0 => Movement::Rolled(first),
            1 => Movement::Rolled(second),
            _ => return Ok(self.backtrack(presenter)),
        };
        let destination = self.world.graph.room(movement.destination())?;
        presenter.show_message(MessageKind::Movement, &format!("You head for room {}.", destination.id));
        Ok(movement)
    }

    fn random_exit(&mut self) -> Result<Movement> {
        let current = self.world.current_room;
        let exits = self.world.graph.neighbors(current)?;
        Ok(match exits.choose(&mut self.rng) {
            Some(&room) => Movement::Random(room),
            None => {
                warn!("room {current} has no exits; staying put");
                Movement::Stayed(current)
            },
        })
    }

    /// Drop the newest path entry and head back to the room the trail started in.
    fn backtrack(&mut self, presenter: &mut dyn Presenter) -> Movement {
        let current = self.world.current_room;
        let path = &mut self.world.path;
        if let Some(dropped) = path.backtrack() {
            info!("room {dropped} dropped from the path");
        }
        match path.first() {
            Some(start) if start != current => {
                presenter.show_message(MessageKind::Movement, &format!("You retrace your steps to room {start}."));
                Movement::Backtracked(start)
            },
            _ => {
                presenter.show_message(MessageKind::Movement, "There is nowhere to backtrack to.");
                Movement::Stayed(current)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::view::View;
    use crate::world::build_world;
    use quest_data::hero_quest;

    fn game(rules: RulesConfig, seed: u64) -> GameLoop<StdRng> {
        let world = build_world(&hero_quest(), rules).unwrap();
        GameLoop::new(world, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn chosen_exit_is_taken() {
        let mut game = game(RulesConfig::full(), 1);
        let mut view = View::new();
        let mut input = ScriptedInput::new(["3"]);
        let state = game.take_turn(&mut view, &mut input).unwrap();
        assert_eq!(state, GameState::Playing);
        assert_eq!(game.world().current_room, 3);
        assert_eq!(game.world().path.current_path(), &[1, 3]);
    }

    #[test]
    fn unreachable_choice_moves_to_a_neighbor() {
        for seed in 0..20 {
            let mut game = game(RulesConfig::full(), seed);
            let mut input = ScriptedInput::new(["4"]);
            game.take_turn(&mut View::new(), &mut input).unwrap();
            assert!([2, 3].contains(&game.world().current_room));
        }
    }

    #[test]
    fn backtrack_from_start_stays_put() {
        let mut game = game(RulesConfig::full(), 1);
        let mut input = ScriptedInput::new(["0"]);
        game.take_turn(&mut View::new(), &mut input).unwrap();
        assert_eq!(game.world().current_room, 1);
        assert_eq!(game.world().path.current_path(), &[1]);
    }

    #[test]
    fn closed_input_abandons() {
        let mut game = game(RulesConfig::full(), 1);
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let outcome = game.run(&mut View::new(), &mut input).unwrap();
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert_eq!(game.state(), GameState::Abandoned);
    }

    #[test]
    fn finished_game_takes_no_more_turns() {
        let mut game = game(RulesConfig::full(), 1);
        let mut input = ScriptedInput::new(["3", "5"]);
        game.run(&mut View::new(), &mut input).unwrap();
        let turns = game.turn();
        assert_eq!(game.take_turn(&mut View::new(), &mut input).unwrap(), GameState::ReachedExit);
        assert_eq!(game.turn(), turns);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let rules = RulesConfig::full().with_seed(11);
        let mut a = rng_for(&rules);
        let mut b = rng_for(&rules);
        let draws_a: Vec<u32> = (0..10).map(|_| a.random_range(0..1000)).collect();
        let draws_b: Vec<u32> = (0..10).map(|_| b.random_range(0..1000)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
