//! Construction recipes for the three character roles.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;

use crate::entities::{Character, CharacterId, HOME_LOCATION};
use crate::world::{World, WorldError};

use super::{free_family_name, roll_attributes};

/// Age range for the player and AI rivals.
const RECRUIT_AGE: Range<u32> = 18..34;
/// A hatamoto is drawn from an older generation.
const HATAMOTO_AGE: Range<u32> = 34..68;

/// Provision the human player's character.
///
/// The name, province, and advantage attribute have already been resolved
/// interactively by the caller; this applies the attribute roll and the +1
/// advantage bump.
pub fn new_player(
    world: &World,
    name: impl Into<String>,
    province_name: &str,
    advantage: &str,
    rng: &mut impl Rng,
) -> Result<Character, WorldError> {
    let province = world.province(province_name)?;
    let mut character = Character {
        id: CharacterId::new(),
        name: name.into(),
        is_ai: false,
        age: rng.gen_range(RECRUIT_AGE),
        level: 1,
        location: HOME_LOCATION.to_string(),
        province: province_name.to_string(),
        attributes: roll_attributes(&world.attributes, &province.baseline, rng),
    };
    bump(&mut character, advantage);
    debug!("provisioned player {} in {}", character.name, province_name);
    Ok(character)
}

/// Provision a province's hatamoto: a level-2 AI lieutenant.
pub fn new_hatamoto(
    world: &World,
    province_name: &str,
    rng: &mut impl Rng,
) -> Result<Character, WorldError> {
    let mut character = new_ai(world, province_name, HATAMOTO_AGE, 2, rng)?;
    bump_random(&mut character, &world.attributes, rng);
    debug!("provisioned hatamoto {} for {}", character.name, province_name);
    Ok(character)
}

/// Provision a level-1 AI rival.
pub fn new_rival(
    world: &World,
    province_name: &str,
    rng: &mut impl Rng,
) -> Result<Character, WorldError> {
    let mut character = new_ai(world, province_name, RECRUIT_AGE, 1, rng)?;
    bump_random(&mut character, &world.attributes, rng);
    debug!("provisioned rival {} for {}", character.name, province_name);
    Ok(character)
}

fn new_ai(
    world: &World,
    province_name: &str,
    age: Range<u32>,
    level: u8,
    rng: &mut impl Rng,
) -> Result<Character, WorldError> {
    let province = world.province(province_name)?;
    let name = free_family_name(&world.family_names, &world.character_names(), rng);
    Ok(Character {
        id: CharacterId::new(),
        name,
        is_ai: true,
        age: rng.gen_range(age),
        level,
        location: HOME_LOCATION.to_string(),
        province: province_name.to_string(),
        attributes: roll_attributes(&world.attributes, &province.baseline, rng),
    })
}

/// Apply the +1 bump after the positional-decay roll, never folded into it.
/// Only attributes the roll populated can be bumped; the character always
/// carries exactly the world's attribute set.
fn bump(character: &mut Character, attribute: &str) {
    if let Some(value) = character.attributes.get_mut(attribute) {
        *value += 1.0;
    }
}

fn bump_random(character: &mut Character, attributes: &[String], rng: &mut impl Rng) {
    if let Some(attribute) = attributes.choose(rng) {
        bump(character, attribute);
    }
}
