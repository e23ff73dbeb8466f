//! Five-day academy trial
//!
//! One evaluation day per axis (technical, physical, tactical, match,
//! character). Each day yields a 0..100 score plus descriptive sub-scores;
//! the aggregate is a weighted mean with technical work weighted heaviest:
//! technical 0.30, tactical 0.20, physical 0.20, match 0.20, character 0.10.

use crate::academy::catalog::{Academy, AcademyTier};
use crate::genetics::GeneticProfile;
use crate::phases::pre_academy::PreAcademySummary;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TechnicalDayResult {
    pub first_touch: f32,
    pub dribbling: f32,
    pub passing_drills: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhysicalDayResult {
    pub sprint_test: f32,
    pub endurance_run: f32,
    pub agility_course: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TacticalDayResult {
    pub positioning: f32,
    pub decision_making: f32,
    pub set_piece_roles: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchDayResult {
    pub involvement: f32,
    pub end_product: f32,
    pub work_rate: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CharacterDayResult {
    pub coachability: f32,
    pub attitude: f32,
    pub pressure_response: f32,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialResult {
    pub academy_name: String,
    pub tier: AcademyTier,
    pub technical: TechnicalDayResult,
    pub physical: PhysicalDayResult,
    pub tactical: TacticalDayResult,
    pub match_day: MatchDayResult,
    pub character: CharacterDayResult,
    /// Weighted mean of the five day scores, 0..100.
    pub overall_score: f32,
}

const W_TECHNICAL: f32 = 0.30;
const W_TACTICAL: f32 = 0.20;
const W_PHYSICAL: f32 = 0.20;
const W_MATCH: f32 = 0.20;
const W_CHARACTER: f32 = 0.10;

/// Map a 0..10 skill level onto the 0..100 day-score scale with trial noise.
fn day_score(rng: &mut ChaCha8Rng, skill: f32) -> f32 {
    (skill * 9.2 + 14.0 + rng.gen_range(-3.0..6.0)).clamp(0.0, 100.0)
}

/// Descriptive spread around a day score for the individual drills.
fn sub_score(rng: &mut ChaCha8Rng, score: f32) -> f32 {
    (score + rng.gen_range(-5.0..5.0)).clamp(0.0, 100.0)
}

pub fn run_trial(
    rng: &mut ChaCha8Rng,
    academy: &Academy,
    pre_academy: &PreAcademySummary,
    genetics: &GeneticProfile,
) -> TrialResult {
    let middle = &pre_academy.middle;

    let technical_skill = pre_academy.readiness.technical_level;
    let physical_skill = (3.0
        + (genetics.athletic.fast_twitch_fibers + genetics.athletic.endurance_capacity) * 3.0
        + genetics.physical.muscle_mass)
        .clamp(0.0, 10.0);
    let tactical_skill = middle.tactical_understanding;
    let match_skill = technical_skill * 0.4 + middle.game_intelligence * 0.6;
    let character_skill =
        (2.0 + genetics.mental.competitiveness * 4.0 + genetics.mental.composure * 3.0)
            .clamp(0.0, 10.0);

    let technical = {
        let score = day_score(rng, technical_skill);
        TechnicalDayResult {
            first_touch: sub_score(rng, score),
            dribbling: sub_score(rng, score),
            passing_drills: sub_score(rng, score),
            score,
        }
    };
    let physical = {
        let score = day_score(rng, physical_skill);
        PhysicalDayResult {
            sprint_test: sub_score(rng, score),
            endurance_run: sub_score(rng, score),
            agility_course: sub_score(rng, score),
            score,
        }
    };
    let tactical = {
        let score = day_score(rng, tactical_skill);
        TacticalDayResult {
            positioning: sub_score(rng, score),
            decision_making: sub_score(rng, score),
            set_piece_roles: sub_score(rng, score),
            score,
        }
    };
    let match_day = {
        let score = day_score(rng, match_skill);
        MatchDayResult {
            involvement: sub_score(rng, score),
            end_product: sub_score(rng, score),
            work_rate: sub_score(rng, score),
            score,
        }
    };
    let character = {
        let score = day_score(rng, character_skill);
        CharacterDayResult {
            coachability: sub_score(rng, score),
            attitude: sub_score(rng, score),
            pressure_response: sub_score(rng, score),
            score,
        }
    };

    let overall_score = technical.score * W_TECHNICAL
        + tactical.score * W_TACTICAL
        + physical.score * W_PHYSICAL
        + match_day.score * W_MATCH
        + character.score * W_CHARACTER;

    TrialResult {
        academy_name: academy.name.clone(),
        tier: academy.tier,
        technical,
        physical,
        tactical,
        match_day,
        character,
        overall_score,
    }
}
