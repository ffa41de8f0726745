//! Catalog Domain Models
//!
//! This module contains the data structures describing weapons offered by
//! the armory.

use serde::{Deserialize, Serialize};

/// Rarity tier of a weapon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A single weapon as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeaponRecord {
    /// Identifier assigned at catalog load (1-based position)
    pub id: u32,

    /// Display name
    pub name: String,

    pub rarity: Rarity,

    /// Absolute URL of the weapon artwork
    pub image: String,
}

/// A catalog document entry before an id has been assigned
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    pub rarity: Rarity,
    pub image: String,
}

impl CatalogEntry {
    pub(crate) fn into_record(self, id: u32) -> WeaponRecord {
        WeaponRecord {
            id,
            name: self.name,
            rarity: self.rarity,
            image: self.image,
        }
    }
}
