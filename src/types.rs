//! Core identifiers and shared visual constants for the solar system viewer.

use bevy::prelude::*;

/// Identifier for celestial bodies in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// All planets, ordered by distance from the Sun.
    pub const PLANETS: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Lower-case identifier used as the catalog key and texture file stem.
    pub fn key(&self) -> &'static str {
        match self {
            BodyId::Sun => "sun",
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
        }
    }

    /// Capitalized display name.
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }
}

/// Emissive tint applied to a planet while it is hovered.
pub const HIGHLIGHT_TINT: LinearRgba = LinearRgba {
    red: 0.33,
    green: 0.33,
    blue: 0.33,
    alpha: 1.0,
};

/// Emissive intensity multiplier for the Sun's glow.
pub const SUN_EMISSIVE_INTENSITY: f32 = 1.5;
