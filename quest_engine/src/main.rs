#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Hero's Quest **
//! Console adventure: survive the rooms, reach the swamp.

use quest_engine::data_paths::rules_path;
use quest_engine::game::rng_for;
use quest_engine::style::{GameStyle, normal_block};
use quest_engine::{GameLoop, GameOutcome, InputManager, QUEST_VERSION, View, build_world, load_rules};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::fill;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: building Hero's Quest world (engine v{QUEST_VERSION})...");
    let rules = load_rules(&rules_path());
    let world = build_world(&quest_data::hero_quest(), rules.clone()).context("while building QuestWorld")?;
    info!("QuestWorld built successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!("{:^84}", world.title.to_uppercase().bright_yellow().underline());
    println!("{:^84}", format!("v{QUEST_VERSION}").dimmed());
    println!("\n{}\n", fill(&world.intro, normal_block()).description_style());

    let mut view = View::new();
    let mut input = InputManager::new();
    let outcome = GameLoop::new(world, rng_for(&rules)).run(&mut view, &mut input)?;

    match outcome {
        GameOutcome::Victory => info!("player won"),
        GameOutcome::Dead => info!("player died"),
        GameOutcome::Abandoned => info!("player left early"),
    }
    Ok(())
}
