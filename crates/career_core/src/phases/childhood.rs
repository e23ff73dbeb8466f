//! Childhood stage (birth to age six)
//!
//! Three age bands derive motor and social milestones from the genetic
//! profile scaled by small constants, then aggregate the early indicators
//! consumed by the elementary stage and the stat-derivation bonuses.

use crate::genetics::GeneticProfile;
use crate::phases::environment::FamilyEnvironment;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Birth to age two: raw motor milestones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InfancyRecord {
    pub sitting_age_months: f32,
    pub walking_age_months: f32,
    /// General physical restlessness, 0..1.
    pub activity_level: f32,
}

/// Ages two to four: first contact with a ball.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToddlerRecord {
    pub ball_play_interest: f32,
    pub running_coordination: f32,
    pub energy_level: f32,
}

/// Ages four to six: kindergarten social behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EarlyYearsRecord {
    pub group_play_comfort: f32,
    pub instruction_following: f32,
    /// Quality of the first organized football contact, 0..1.
    pub first_football_touch: f32,
}

/// Aggregate indicators read by later stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EarlyIndicators {
    /// Mean of fast-twitch and endurance genes, 0..1.
    pub athletic_potential: f32,
    /// 0..10 affinity scale; > 7 feeds shooting/passing bonuses later.
    pub ball_affinity: f32,
    pub social_leadership: bool,
    pub attention_capacity: f32,
    pub physical_confidence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildhoodSummary {
    pub environment: FamilyEnvironment,
    pub infancy: InfancyRecord,
    pub toddler: ToddlerRecord,
    pub early_years: EarlyYearsRecord,
    pub indicators: EarlyIndicators,
}

#[derive(Debug)]
pub struct ChildhoodSimulator;

impl ChildhoodSimulator {
    /// Simulate birth through age six. Generates a random family environment
    /// when the caller does not supply one.
    pub fn simulate(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        environment: Option<FamilyEnvironment>,
    ) -> ChildhoodSummary {
        let environment = environment.unwrap_or_else(|| FamilyEnvironment::generate(rng));
        log::debug!("childhood: income={:?} location={:?}", environment.income, environment.location);

        let infancy = Self::infancy(rng, genetics);
        let toddler = Self::toddler(rng, genetics, &environment);
        let early_years = Self::early_years(rng, genetics, &environment);
        let indicators = Self::indicators(rng, genetics, &environment, &infancy, &early_years);

        ChildhoodSummary { environment, infancy, toddler, early_years, indicators }
    }

    fn infancy(rng: &mut ChaCha8Rng, genetics: &GeneticProfile) -> InfancyRecord {
        let muscle = genetics.physical.muscle_mass;
        let coordination = genetics.athletic.coordination;

        InfancyRecord {
            // Stronger infants sit and walk earlier.
            sitting_age_months: 6.0 + (muscle - 0.5) * 4.0 + rng.gen_range(-1.0..1.0),
            walking_age_months: 12.0 - (coordination - 0.5) * 4.0 + rng.gen_range(-1.5..1.5),
            activity_level: (genetics.athletic.fast_twitch_fibers * 0.6
                + genetics.athletic.endurance_capacity * 0.4
                + rng.gen_range(-0.1..0.1))
            .clamp(0.0, 1.0),
        }
    }

    fn toddler(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        environment: &FamilyEnvironment,
    ) -> ToddlerRecord {
        ToddlerRecord {
            ball_play_interest: (genetics.athletic.coordination * 0.5
                + environment.parental_involvement * 0.3
                + rng.gen_range(0.0..0.2))
            .clamp(0.0, 1.0),
            running_coordination: (genetics.athletic.coordination * 0.7
                + genetics.athletic.reflexes * 0.2
                + rng.gen_range(0.0..0.1))
            .clamp(0.0, 1.0),
            energy_level: (genetics.athletic.endurance_capacity * 0.8 + rng.gen_range(0.0..0.2))
                .clamp(0.0, 1.0),
        }
    }

    fn early_years(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        environment: &FamilyEnvironment,
    ) -> EarlyYearsRecord {
        let sibling_factor = 0.05 * environment.siblings.min(2) as f32;

        EarlyYearsRecord {
            group_play_comfort: (genetics.mental.leadership_instinct * 0.6
                + sibling_factor
                + rng.gen_range(0.0..0.2))
            .clamp(0.0, 1.0),
            instruction_following: (genetics.mental.focus * 0.7 + rng.gen_range(0.0..0.3))
                .clamp(0.0, 1.0),
            first_football_touch: (genetics.athletic.coordination * 0.6
                + environment.parental_involvement * 0.2
                + rng.gen_range(0.0..0.2))
            .clamp(0.0, 1.0),
        }
    }

    fn indicators(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        environment: &FamilyEnvironment,
        infancy: &InfancyRecord,
        early_years: &EarlyYearsRecord,
    ) -> EarlyIndicators {
        let athletic_potential =
            (genetics.athletic.fast_twitch_fibers + genetics.athletic.endurance_capacity) / 2.0;

        let ball_affinity = ((genetics.athletic.coordination * 0.45
            + genetics.mental.learning_speed * 0.35
            + environment.parental_involvement * 0.2)
            * 10.0
            + rng.gen_range(-0.5..0.5))
        .clamp(0.0, 10.0);

        let leadership_score = genetics.mental.leadership_instinct * 0.7
            + early_years.group_play_comfort * 0.3;

        EarlyIndicators {
            athletic_potential,
            ball_affinity,
            social_leadership: leadership_score > 0.55,
            attention_capacity: (genetics.mental.focus * 0.8 + rng.gen_range(0.0..0.2))
                .clamp(0.0, 1.0),
            physical_confidence: (athletic_potential * 0.6
                + infancy.activity_level * 0.3
                + rng.gen_range(0.0..0.1))
            .clamp(0.0, 1.0),
        }
    }
}
