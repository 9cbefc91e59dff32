//! View module.
//!
//! The game loop never prints. It reports each turn to a [`Presenter`], and the console
//! presenter ([`View`]) collects those reports and renders them together when the turn
//! is flushed.
use std::fmt::Write;

use colored::Colorize;
use log::info;
use quest_data::RoomId;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::hero::Hero;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_TREASURE: &str = "\u{2727}"; // ✧
const ICON_HEALED: &str = "\u{2624}"; // caduceus
const ICON_MOVE: &str = "\u{2192}"; // →
const ICON_ENGINE: &str = "⚙";
const ICON_DEATH: &str = "☠";
const ICON_CELEBRATE: &str = "🎉";

/// Receives everything the game has to say about a turn.
pub trait Presenter {
    fn show_room(&mut self, id: RoomId, description: &str);
    fn show_stats(&mut self, hero: &Hero);
    fn show_inventory(&mut self, items: &[String]);
    fn show_path(&mut self, path: &[RoomId]);
    /// Exits from the current room with the description of where each leads.
    fn show_exits(&mut self, exits: &[(RoomId, String)]);
    fn show_message(&mut self, kind: MessageKind, text: &str);
    /// Called before input is requested and at the end of every turn.
    fn flush(&mut self) {}
}

/// Tone of a message, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Failure,
    Treasure,
    Healed,
    Movement,
    Warning,
    Victory,
    Death,
}

/// Snapshot of hero stats for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub experience: u32,
}
impl From<&Hero> for StatLine {
    fn from(hero: &Hero) -> Self {
        StatLine {
            strength: hero.strength,
            agility: hero.agility,
            intelligence: hero.intelligence,
            health: hero.health(),
            max_health: hero.max_health(),
            level: hero.level(),
            experience: hero.experience(),
        }
    }
}
impl std::fmt::Display for StatLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Strength: {}, Agility: {}, Intelligence: {}, Health: {}/{}, Level: {}, XP: {}",
            self.strength, self.agility, self.intelligence, self.health, self.max_health, self.level, self.experience
        )
    }
}

/// Anything that can be shown to the player during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    RoomDescription { id: RoomId, description: String },
    Stats(StatLine),
    Inventory(Vec<String>),
    Path(Vec<RoomId>),
    Exits(Vec<(RoomId, String)>),
    Message { kind: MessageKind, text: String },
}

/// Output sections, rendered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Room description and hero status.
    Scene,
    /// Challenge, treasure and potion outcomes.
    Results,
    /// Where the hero can go next.
    Exits,
}
impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. } | ViewItem::Stats(_) | ViewItem::Inventory(_) | ViewItem::Path(_) => {
                Section::Scene
            },
            ViewItem::Message { .. } => Section::Results,
            ViewItem::Exits(_) => Section::Exits,
        }
    }
}

/// Console presenter. Aggregates the items of a turn and prints them on [`Presenter::flush`].
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render the buffered items as text and clear the buffer.
    pub fn render(&mut self) -> String {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        let mut out = String::new();

        let scene: Vec<_> = self.items.iter().filter(|i| i.section() == Section::Scene).collect();
        let results: Vec<_> = self.items.iter().filter(|i| i.section() == Section::Results).collect();
        let exits: Vec<_> = self.items.iter().filter(|i| i.is_exits()).collect();

        if !scene.is_empty() {
            let _ = writeln!(out, "{:.>width$}\n", "scene".section_style(), width = self.width);
            for item in scene {
                Self::scene_item(&mut out, item);
            }
        }
        if !results.is_empty() {
            let _ = writeln!(out, "{:.>width$}\n", "results".section_style(), width = self.width);
            for item in results {
                if let ViewItem::Message { kind, text } = item {
                    Self::message(&mut out, *kind, text);
                }
            }
        }
        for item in exits {
            if let ViewItem::Exits(exits) = item {
                let _ = writeln!(out, "{:.>width$}\n", "exits".section_style(), width = self.width);
                Self::exit_list(&mut out, exits);
            }
        }

        self.items.clear();
        out
    }

    fn scene_item(out: &mut String, item: &ViewItem) {
        match item {
            ViewItem::RoomDescription { id, description } => {
                let _ = writeln!(out, "{}", format!("Room {id}").room_titlebar_style());
                let _ = writeln!(out, "{}\n", fill(description, normal_block()).description_style());
            },
            ViewItem::Stats(stats) => {
                let _ = writeln!(out, "{}\n", stats.to_string().stat_style());
            },
            ViewItem::Inventory(items) => {
                let _ = writeln!(out, "{}:", "Inventory".subheading_style());
                if items.is_empty() {
                    let _ = writeln!(out, "    {}", "(empty)".italic().dimmed());
                }
                for item in items {
                    let _ = writeln!(out, "    {}", item.item_style());
                }
                out.push('\n');
            },
            ViewItem::Path(path) => {
                let trail: Vec<String> = path.iter().map(ToString::to_string).collect();
                let _ = writeln!(out, "{}:", "Visited Rooms Path".subheading_style());
                let _ = writeln!(out, "    {}\n", format!("{} -> END", trail.join(" -> ")).path_style());
            },
            _ => info!("non-scene item passed to scene renderer: {item:?}"),
        }
    }

    fn message(out: &mut String, kind: MessageKind, text: &str) {
        let line = match kind {
            MessageKind::Info => format!("{ICON_ENGINE:<4}{text}"),
            MessageKind::Success => format!("{:<4}{}", ICON_SUCCESS.green(), text.success_style()),
            MessageKind::Failure => format!("{:<4}{}", ICON_FAILURE.red(), text.failure_style()),
            MessageKind::Treasure => format!("{:<4}{}", ICON_TREASURE.yellow(), text.treasure_style()),
            MessageKind::Healed => format!("{:<4}{}", ICON_HEALED.green(), text.success_style()),
            MessageKind::Movement => format!("{ICON_MOVE:<4}{}", text.italic()),
            MessageKind::Warning => format!("{:<4}{}", ICON_ENGINE.yellow(), text.error_style()),
            MessageKind::Victory => format!("{ICON_CELEBRATE:<4}{}", text.bold().bright_blue()),
            MessageKind::Death => format!("{:<4}{}", ICON_DEATH.red(), text.bold().red()),
        };
        let _ = writeln!(out, "{}", fill(&line, normal_block()));
    }

    fn exit_list(out: &mut String, exits: &[(RoomId, String)]) {
        let _ = writeln!(out, "{}:", "You can move to".subheading_style());
        if exits.is_empty() {
            let _ = writeln!(out, "{}", fill("nowhere at all", indented_block()).italic());
        }
        for (id, description) in exits {
            let _ = writeln!(out, "    - Room {id}: {}", description.exit_style());
        }
    }
}

impl Presenter for View {
    fn show_room(&mut self, id: RoomId, description: &str) {
        self.push(ViewItem::RoomDescription {
            id,
            description: description.to_string(),
        });
    }

    fn show_stats(&mut self, hero: &Hero) {
        self.push(ViewItem::Stats(StatLine::from(hero)));
    }

    fn show_inventory(&mut self, items: &[String]) {
        self.push(ViewItem::Inventory(items.to_vec()));
    }

    fn show_path(&mut self, path: &[RoomId]) {
        self.push(ViewItem::Path(path.to_vec()));
    }

    fn show_exits(&mut self, exits: &[(RoomId, String)]) {
        self.push(ViewItem::Exits(exits.to_vec()));
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.push(ViewItem::Message {
            kind,
            text: text.to_string(),
        });
    }

    fn flush(&mut self) {
        if self.items.is_empty() {
            return;
        }
        print!("{}", self.render());
    }
}
