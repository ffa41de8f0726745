//! Weapon Catalog Module
//!
//! The catalog is loaded once at startup and never mutated afterwards, so it
//! can be shared between requests behind an `Arc` without locking.

pub mod models;

pub use models::{CatalogEntry, Rarity, WeaponRecord};

use std::{collections::HashMap, path::Path};

/// Catalog document compiled into the binary
pub const DEFAULT_CATALOG: &str = include_str!("../../assets/weapons.json");

/// Errors raised while loading a catalog document
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no weapons")]
    Empty,
}

/// Read-only, ordered list of weapons with id lookup
#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: Vec<WeaponRecord>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG)
    }

    /// Loads a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses a catalog document, assigning ids by position starting at 1.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let weapons: Vec<WeaponRecord> = entries
            .into_iter()
            .zip(1u32..)
            .map(|(entry, id)| entry.into_record(id))
            .collect();
        let index = weapons
            .iter()
            .enumerate()
            .map(|(pos, weapon)| (weapon.id, pos))
            .collect();

        Ok(Self { weapons, index })
    }

    /// All weapons in display order.
    pub fn list(&self) -> &[WeaponRecord] {
        &self.weapons
    }

    /// Looks up a weapon by id. Absence is not an error here; callers decide.
    pub fn find(&self, id: u32) -> Option<&WeaponRecord> {
        self.index.get(&id).map(|&pos| &self.weapons[pos])
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_starts_with_assault_rifle() {
        let catalog = Catalog::builtin().expect("builtin catalog should load");
        let first = &catalog.list()[0];

        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Assault Rifle");
        assert_eq!(first.rarity, Rarity::Rare);
        assert!(first.image.starts_with("https://"));
    }

    #[test]
    fn ids_follow_document_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<u32> = catalog.list().iter().map(|w| w.id).collect();
        let expected: Vec<u32> = (1..=catalog.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn find_returns_matching_record_or_none() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.find(2).unwrap().name, "Combat Shotgun");
        assert!(catalog.find(0).is_none());
        assert!(catalog.find(9999).is_none());
    }

    #[test]
    fn rarity_serializes_as_capitalized_name() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_value(catalog.find(1).unwrap()).unwrap();
        assert_eq!(json["rarity"], "Rare");
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn unknown_rarity_is_rejected() {
        let raw = r#"[{ "name": "Spoon", "rarity": "Mythic", "image": "x" }]"#;
        assert!(matches!(Catalog::from_json(raw), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
