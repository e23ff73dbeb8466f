//! Positional base-stat templates
//!
//! Lookup tables seeding the derivation engine before genetic influences
//! and life-phase bonuses are applied.

use crate::player::types::{PlayerStats, Position};

/// Base template for a position. Unknown position strings are resolved to
/// MID before this lookup (see [`Position::from_str_or_default`]).
pub fn base_stats(position: Position) -> PlayerStats {
    match position {
        Position::GK => PlayerStats {
            speed: 40,
            shooting: 30,
            passing: 45,
            defense: 60,
            stamina: 50,
            intelligence: 55,
        },
        Position::DEF => PlayerStats {
            speed: 50,
            shooting: 35,
            passing: 50,
            defense: 62,
            stamina: 58,
            intelligence: 52,
        },
        Position::MID => PlayerStats {
            speed: 52,
            shooting: 48,
            passing: 60,
            defense: 50,
            stamina: 58,
            intelligence: 58,
        },
        Position::FWD => PlayerStats {
            speed: 58,
            shooting: 60,
            passing: 50,
            defense: 38,
            stamina: 55,
            intelligence: 52,
        },
    }
}
