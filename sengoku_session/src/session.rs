//! Session resolution: map a typed name to a character, creating one when
//! no existing character matches, then bring their province up to strength.

use log::info;
use rand::Rng;
use thiserror::Error;

use sengoku_rules::{enroll, new_player, ready_province, CharacterId, World, WorldError};

use crate::ui::Prompt;

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user backed out of a selection dialog. Nothing is persisted.
    #[error("session cancelled")]
    Cancelled,
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Run one interactive session against the in-memory world.
///
/// Resolves the typed name to an existing character (case-insensitive,
/// first match wins) or creates a new player, enrolls them in their
/// province, and fills the province roster. Returns the character's id;
/// the caller owns persistence.
pub fn run_session(
    world: &mut World,
    prompt: &mut impl Prompt,
    rng: &mut impl Rng,
) -> Result<CharacterId, SessionError> {
    let suggestions = world.character_names();
    let typed = prompt.read_name(&suggestions)?;

    let existing = world
        .find_by_name(&typed)
        .map(|c| (c.id, c.name.clone(), c.province.clone()));

    let (id, province_name) = match existing {
        Some((id, name, province_name)) => {
            // Greet with the stored spelling, not the typed one.
            println!("Welcome back, {name}!");
            info!("resolved returning character {id}");
            (id, province_name)
        }
        None => {
            println!("Welcome, {typed}!");
            let province_name = select_province(world, prompt, &typed)?;
            let advantage = select_advantage(world, prompt)?;
            let player = new_player(world, typed, &province_name, &advantage, rng)?;
            let id = world.add_character(player);
            info!("created new player {id} in {province_name}");
            (id, province_name)
        }
    };

    enroll(world, &province_name, id)?;
    ready_province(world, &province_name, rng)?;
    Ok(id)
}

fn select_province(
    world: &World,
    prompt: &mut impl Prompt,
    player_name: &str,
) -> Result<String, SessionError> {
    let options: Vec<String> = world.provinces.keys().cloned().collect();
    prompt
        .select(
            &format!("{player_name} decides his fate"),
            "Select a province",
            &options,
        )?
        .ok_or(SessionError::Cancelled)
}

fn select_advantage(world: &World, prompt: &mut impl Prompt) -> Result<String, SessionError> {
    prompt
        .select(
            "Family advantage",
            "Select a family advantage",
            &world.attributes,
        )?
        .ok_or(SessionError::Cancelled)
}
