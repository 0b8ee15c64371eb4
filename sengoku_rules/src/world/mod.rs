//! World state - the root document holding every province and character.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::entities::{Character, CharacterId};

/// Errors from world lookups and validation.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown province: {0}")]
    UnknownProvince(String),
    #[error("province {province} references missing character {id}")]
    DanglingMember { province: String, id: CharacterId },
    #[error("province {province} lists character {id} more than once")]
    DuplicateMember { province: String, id: CharacterId },
}

/// A named territory with baseline attribute values and a member roster.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Province {
    /// Template attribute values copied (with positional decay) onto newly
    /// provisioned characters. Attributes absent here count as zero.
    #[serde(default)]
    pub baseline: BTreeMap<String, f64>,
    /// Ids of enrolled characters, in insertion order, no duplicates.
    #[serde(default)]
    pub members: Vec<CharacterId>,
    /// The province lieutenant, assigned at most once. The hatamoto does not
    /// occupy a `members` slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hatamoto: Option<CharacterId>,
}

/// The root world document: loaded wholesale at startup, mutated in memory
/// through the session, written back wholesale at exit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct World {
    /// Attribute names. Listing order is not authoritative; attribute
    /// assignment shuffles a copy per roll.
    pub attributes: Vec<String>,
    /// Pool of reusable surnames for AI characters.
    #[serde(rename = "family-names")]
    pub family_names: Vec<String>,
    #[serde(default)]
    pub provinces: BTreeMap<String, Province>,
    /// Every character record, player and AI alike. The document key keeps
    /// its historical name `players`.
    #[serde(default, rename = "players")]
    pub characters: Vec<Character>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a province by name.
    pub fn province(&self, name: &str) -> Result<&Province, WorldError> {
        self.provinces
            .get(name)
            .ok_or_else(|| WorldError::UnknownProvince(name.to_string()))
    }

    /// Look up a province by name, mutably.
    pub fn province_mut(&mut self, name: &str) -> Result<&mut Province, WorldError> {
        self.provinces
            .get_mut(name)
            .ok_or_else(|| WorldError::UnknownProvince(name.to_string()))
    }

    /// Get a character by ID.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// First character whose display name matches case-insensitively.
    ///
    /// Duplicate names can exist once the family-name pool runs dry; the
    /// first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name_matches(name))
    }

    /// Display names of every character, in roster order.
    pub fn character_names(&self) -> Vec<String> {
        self.characters.iter().map(|c| c.name.clone()).collect()
    }

    /// Add a character to the global roster.
    ///
    /// Returns the character ID for reference.
    pub fn add_character(&mut self, character: Character) -> CharacterId {
        let id = character.id;
        self.characters.push(character);
        id
    }

    /// Check referential integrity: every roster id on every province must
    /// resolve to a character record, exactly once per roster.
    pub fn validate(&self) -> Result<(), WorldError> {
        for (name, province) in &self.provinces {
            for (idx, id) in province.members.iter().enumerate() {
                if province.members[..idx].contains(id) {
                    return Err(WorldError::DuplicateMember {
                        province: name.clone(),
                        id: *id,
                    });
                }
                if self.character(*id).is_none() {
                    return Err(WorldError::DanglingMember {
                        province: name.clone(),
                        id: *id,
                    });
                }
            }
            if let Some(id) = province.hatamoto {
                if self.character(id).is_none() {
                    return Err(WorldError::DanglingMember {
                        province: name.clone(),
                        id,
                    });
                }
            }
        }
        Ok(())
    }
}
