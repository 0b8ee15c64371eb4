//! Character definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CharacterId;

/// Where every freshly provisioned character starts out.
pub const HOME_LOCATION: &str = "home";

/// A full character record. The human player, a province's hatamoto, and
/// AI rivals all share this shape; only `is_ai`, `level`, and the age range
/// differ by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// True for the hatamoto and AI rivals, false for the human player.
    #[serde(rename = "ai")]
    pub is_ai: bool,
    pub age: u32,
    /// 1 for the player and rivals, 2 for a hatamoto.
    pub level: u8,
    pub location: String,
    /// Name key into the world's province map.
    pub province: String,
    /// One entry per attribute in the world's attribute set, each value >= 0.
    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,
}

impl Character {
    /// Check if this is the human player's character.
    pub fn is_player(&self) -> bool {
        !self.is_ai
    }

    /// Case-insensitive display-name match.
    ///
    /// Duplicate names are possible once the family-name pool runs dry, so
    /// callers should treat the first match as authoritative.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
