//! # career_core - Deterministic Football Career Life Simulation
//!
//! This library simulates a footballer's entire pre-career life: genetics,
//! childhood, elementary school, pre-academy football, academy selection and
//! academy life, terminating in the starting attributes and potential range
//! consumed by player creation.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same life story)
//! - Six strictly ordered stages, each producing an immutable summary
//! - JSON API for easy integration with game engines

// Allow unused code for features under development
#![allow(dead_code)]

pub mod academy;
pub mod api;
pub mod error;
pub mod genetics;
pub mod phases;
pub mod pipeline;
pub mod player;

// Re-export main API functions
pub use api::{simulate_career_json, CareerRequest, CareerResponse};
pub use error::{CareerError, Result};

// Re-export pipeline entry points
pub use pipeline::{LifePhaseManager, LifeStory};

// Re-export genetics system types
pub use genetics::{
    FamilyTree, GeneticCalculator, GeneticPotential, GeneticProfile, InjuryPredispositions,
    ParentalData,
};

// Re-export stage summaries
pub use academy::{
    AcademyLifeSummary, AcademySelectionSummary, AcademyTier, DebutScenario, FinalChoice,
};
pub use phases::{ChildhoodSummary, ElementarySummary, FamilyEnvironment, PreAcademySummary};

// Re-export player record types
pub use player::{
    FinalStatBundle, PlayerCreationData, PlayerStats, Position, PotentialRange,
    StatDerivationEngine,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = api::SCHEMA_VERSION;

#[cfg(test)]
mod pipeline_test;
