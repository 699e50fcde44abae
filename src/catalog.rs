//! Reference data shown in the selection panel.
//!
//! The catalog is immutable: it is built once at startup and only ever read
//! by the click handler and the panel.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::types::BodyId;

/// One catalog entry: display name plus descriptive text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub info: &'static str,
}

/// Identifier-keyed catalog of planet descriptions.
///
/// The Sun deliberately has no entry; clicking it does nothing.
#[derive(Resource)]
pub struct PlanetCatalog {
    entries: HashMap<BodyId, CatalogEntry>,
}

impl Default for PlanetCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            BodyId::Mercury,
            CatalogEntry {
                name: "Mercury",
                info: "Mercury is the smallest planet in our solar system and closest to the Sun.",
            },
        );
        entries.insert(
            BodyId::Venus,
            CatalogEntry {
                name: "Venus",
                info: "Venus is the second planet from the Sun and has a thick, toxic atmosphere.",
            },
        );
        entries.insert(
            BodyId::Earth,
            CatalogEntry {
                name: "Earth",
                info: "Earth is the third planet from the Sun and the only known planet to support life.",
            },
        );
        entries.insert(
            BodyId::Mars,
            CatalogEntry {
                name: "Mars",
                info: "Mars is the fourth planet from the Sun and is known as the Red Planet.",
            },
        );
        entries.insert(
            BodyId::Jupiter,
            CatalogEntry {
                name: "Jupiter",
                info: "Jupiter is the largest planet in our solar system and is known for its Great Red Spot.",
            },
        );
        entries.insert(
            BodyId::Saturn,
            CatalogEntry {
                name: "Saturn",
                info: "Saturn is the sixth planet from the Sun and is famous for its stunning ring system.",
            },
        );
        entries.insert(
            BodyId::Uranus,
            CatalogEntry {
                name: "Uranus",
                info: "Uranus is the seventh planet from the Sun and has a unique sideways rotation.",
            },
        );
        entries.insert(
            BodyId::Neptune,
            CatalogEntry {
                name: "Neptune",
                info: "Neptune is the eighth and farthest known planet from the Sun in our solar system.",
            },
        );
        Self { entries }
    }
}

impl PlanetCatalog {
    /// Look up the entry for a body, if one exists.
    pub fn get(&self, id: BodyId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    /// Number of cataloged bodies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
