//! Academy selection and academy life
//!
//! The selection engine gates admission on the pre-academy readiness
//! record; the life simulator turns the outcome into five academy years or
//! the non-academy fallback.

pub mod catalog;
pub mod life;
pub mod selection;
pub mod trial;

pub use catalog::{build_catalog, Academy, AcademyBenefits, AcademyRequirements, AcademyTier, Selectivity};
pub use life::{
    pick_debut_scenario, AcademyLifeSimulator, AcademyLifeSummary, AcademyYear, AcademyYearStage,
    AlternativePath, CareerPath, CareerReadiness, DebutScenario, FutureProjection,
};
pub use selection::{
    decide_offer, family_score, rank_score, AcademySelectionEngine, AcademySelectionSummary,
    AlternativePlan, ApplicationRecord, FinalChoice, OfferDecision, RejectionReason,
    ScreeningResult, SelectionState,
};
pub use trial::{run_trial, TrialResult};
