//! Core types for the derived player record
//!
//! This module contains the terminal artifacts of the life-phase pipeline:
//! - PlayerStats: the six starting attributes
//! - PotentialRange: the training ceiling window
//! - FinalStatBundle: stats + potential + overall rating
//! - PlayerCreationData: the input handed over by player creation

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Playing position used for base-stat templates.
///
/// Player creation only distinguishes the four broad roles; detailed
/// positions (CB/CDM/ST/...) belong to the match layer, not this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// Parse a position string, falling back to MID for anything unknown.
    ///
    /// Unknown positions are a data problem from the caller, not a reason
    /// to abort a life simulation. MID is the documented default because
    /// its template is the most balanced of the four.
    pub fn from_str_or_default(s: &str) -> Self {
        Position::from_str(s).unwrap_or(Position::MID)
    }
}

impl FromStr for Position {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GK" => Ok(Position::GK),
            "DEF" | "DF" => Ok(Position::DEF),
            "MID" | "MF" => Ok(Position::MID),
            "FWD" | "FW" => Ok(Position::FWD),
            _ => Err(()),
        }
    }
}

/// The six starting attributes derived by the pipeline.
///
/// All values are kept in 30..=85 by the derivation engine; the weekly
/// training loop (outside this crate) grows them toward the potential range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub speed: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defense: u8,
    pub stamina: u8,
    pub intelligence: u8,
}

impl PlayerStats {
    pub fn as_array(&self) -> [u8; 6] {
        [
            self.speed,
            self.shooting,
            self.passing,
            self.defense,
            self.stamina,
            self.intelligence,
        ]
    }

    /// Mean of the six attributes, floored (matches `overall_rating`).
    pub fn mean_floor(&self) -> u8 {
        let sum: u32 = self.as_array().iter().map(|v| *v as u32).sum();
        (sum / 6) as u8
    }
}

/// Integer attribute deltas accumulated from the life-phase summaries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatDeltas {
    pub speed: i16,
    pub shooting: i16,
    pub passing: i16,
    pub defense: i16,
    pub stamina: i16,
    pub intelligence: i16,
}

impl StatDeltas {
    pub fn add(&mut self, other: &StatDeltas) {
        self.speed += other.speed;
        self.shooting += other.shooting;
        self.passing += other.passing;
        self.defense += other.defense;
        self.stamina += other.stamina;
        self.intelligence += other.intelligence;
    }

    pub fn as_array(&self) -> [i16; 6] {
        [
            self.speed,
            self.shooting,
            self.passing,
            self.defense,
            self.stamina,
            self.intelligence,
        ]
    }
}

/// The ceiling window future training can reach, separate from current stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PotentialRange {
    /// Guaranteed floor the player will reach with ordinary development (>= 65).
    pub min: u8,
    /// Hard ceiling (<= 99).
    pub max: u8,
    /// Age at which attributes stop improving (26..=32, from longevity genes).
    pub peak_age: u8,
    /// Post-peak decline speed, 0..1 (lower is slower).
    pub decline_rate: f32,
}

/// Terminal artifact of the pipeline, persisted onto the player record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalStatBundle {
    pub stats: PlayerStats,
    pub potential: PotentialRange,
    /// floor(mean(stats)); re-derivable from `stats` at any time.
    pub overall_rating: u8,
}

/// Input handed over by the player-creation flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerCreationData {
    pub name: String,
    pub age: u8,
    pub position: Position,
    pub nationality: String,
    #[serde(default)]
    pub career_ambition: CareerAmbition,
    pub starting_league: String,
    pub starting_team: String,
}

/// Narrative flavour chosen at creation; does not feed any stat formula.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CareerAmbition {
    #[default]
    ProfessionalPlayer,
    NationalTeam,
    WorldClassStar,
    LocalHero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_known() {
        assert_eq!(Position::from_str_or_default("GK"), Position::GK);
        assert_eq!(Position::from_str_or_default("fwd"), Position::FWD);
        assert_eq!(Position::from_str_or_default("DF"), Position::DEF);
    }

    #[test]
    fn test_position_parse_unknown_falls_back_to_mid() {
        assert_eq!(Position::from_str_or_default("STRIKER"), Position::MID);
        assert_eq!(Position::from_str_or_default(""), Position::MID);
    }

    #[test]
    fn test_mean_floor_matches_manual_mean() {
        let stats = PlayerStats {
            speed: 60,
            shooting: 55,
            passing: 70,
            defense: 41,
            stamina: 66,
            intelligence: 58,
        };
        // (60+55+70+41+66+58) = 350, 350/6 = 58.33 -> 58
        assert_eq!(stats.mean_floor(), 58);
    }

    #[test]
    fn test_stat_deltas_accumulate() {
        let mut total = StatDeltas::default();
        total.add(&StatDeltas { shooting: 3, passing: 2, ..Default::default() });
        total.add(&StatDeltas { speed: 3, stamina: 2, ..Default::default() });
        assert_eq!(total.shooting, 3);
        assert_eq!(total.speed, 3);
        assert_eq!(total.defense, 0);
    }
}
