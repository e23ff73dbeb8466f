//! Hereditary foundation of the life-phase pipeline
//!
//! Generated once per new player; every later stage reads the profile
//! through a shared reference and never mutates it.

pub mod family;
pub mod influence;
pub mod profile;

pub use family::{AthleticLevel, FamilyMember, FamilyTree, Sibling};
pub use influence::{
    GeneticCalculator, GeneticPotential, InjuryCategory, InjuryFrequency, InjuryPredispositions,
    PotentialBand, Predisposition,
};
pub use profile::{
    AthleticGenes, GeneticProfile, HealthGenes, HeightProfile, MentalGenes, ParentalData,
    PhysicalGenes,
};
