//! Province enrollment: roster membership and minimum-population fill.

use log::{debug, info};
use rand::Rng;

use crate::entities::CharacterId;
use crate::world::{World, WorldError};

use super::{new_hatamoto, new_rival};

/// Every readied province holds at least this many roster members. The
/// hatamoto is tracked separately and does not count toward it.
pub const MIN_ROSTER: usize = 4;

/// Add a character to a province's roster. Repeated calls with the same id
/// leave the roster unchanged.
pub fn enroll(world: &mut World, province_name: &str, id: CharacterId) -> Result<(), WorldError> {
    let province = world.province_mut(province_name)?;
    if !province.members.contains(&id) {
        province.members.push(id);
        debug!("enrolled {id} in {province_name}");
    }
    Ok(())
}

/// Bring a province up to playable strength.
///
/// Assigns a hatamoto if the province has none, then musters AI rivals until
/// the roster reaches [`MIN_ROSTER`]. Every created character is appended to
/// the global roster. Each loop iteration grows membership by one, so the
/// fill always terminates. Calling this on an already-readied province is a
/// no-op.
pub fn ready_province(
    world: &mut World,
    province_name: &str,
    rng: &mut impl Rng,
) -> Result<(), WorldError> {
    if world.province(province_name)?.hatamoto.is_none() {
        let hatamoto = new_hatamoto(world, province_name, rng)?;
        let id = world.add_character(hatamoto);
        world.province_mut(province_name)?.hatamoto = Some(id);
        info!("assigned hatamoto {id} to {province_name}");
    }

    while world.province(province_name)?.members.len() < MIN_ROSTER {
        let rival = new_rival(world, province_name, rng)?;
        let id = world.add_character(rival);
        world.province_mut(province_name)?.members.push(id);
        info!("mustered rival {id} into {province_name}");
    }

    Ok(())
}
