//! Life-phase simulators: childhood, elementary school, pre-academy
//!
//! Each stage consumes the previous stage's summary and the shared genetic
//! profile, producing its own immutable summary. Stages run strictly in
//! order; no stage revisits an earlier stage's output.

pub mod childhood;
pub mod elementary;
pub mod environment;
pub mod pre_academy;

pub use childhood::{ChildhoodSimulator, ChildhoodSummary, EarlyIndicators};
pub use elementary::{
    AthleticDevelopment, ElementarySimulator, ElementarySummary, TeamTryout, YouthPosition,
};
pub use environment::{FamilyEnvironment, Housing, IncomeBracket, Location};
pub use pre_academy::{
    scout_interest_probability, AcademyReadiness, PreAcademySimulator, PreAcademySummary,
    ScoutContact,
};
