//! Player record derivation
//!
//! Terminal stage of the pipeline: positional templates, the stat
//! derivation engine, and the final bundle types handed to player creation.

pub mod derivation;
pub mod templates;
pub mod types;

pub use derivation::StatDerivationEngine;
pub use templates::base_stats;
pub use types::{
    CareerAmbition, FinalStatBundle, PlayerCreationData, PlayerStats, Position, PotentialRange,
    StatDeltas,
};
