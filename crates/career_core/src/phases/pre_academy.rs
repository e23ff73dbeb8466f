//! Pre-academy stage (ages eleven to fourteen)
//!
//! Local-club football across three sub-periods. The middle period carries
//! the scout-contact event; the late period settles the academy-readiness
//! gate that academy selection keys on.

use crate::genetics::{GeneticCalculator, GeneticProfile};
use crate::phases::elementary::ElementarySummary;
use crate::phases::environment::FamilyEnvironment;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const CLUB_NAMES: &[&str] = &[
    "Riverside Juniors",
    "Eastgate United Youth",
    "Hillcrest Rovers",
    "Seongnam Little Kickers",
    "Westpark Academy FC",
    "Old Mill Boys Club",
    "Harborview Youth FC",
    "Northfield Colts",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalClub {
    pub name: String,
    pub reputation: f32,
    pub coaching_quality: f32,
    pub monthly_cost: u32,
    pub distance_km: f32,
}

/// Entry trial at the chosen local club, 0..10 per axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClubTrial {
    pub technical: f32,
    pub physical: f32,
    pub mental: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GrowthSpurt {
    pub started: bool,
    pub projected_gain_cm: f32,
}

/// Ages 11-12: joining local football.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EarlyPhase {
    pub candidate_clubs: Vec<LocalClub>,
    pub chosen_club: LocalClub,
    pub club_trial: ClubTrial,
    pub growth_spurt: GrowthSpurt,
    pub injury_risk: f32,
}

/// Scout contact generated when the interest draw succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoutContact {
    pub academy_affiliation: String,
    /// Scout's first written evaluation, 0..1.
    pub initial_evaluation: f32,
    pub family_contacted: bool,
    pub family_receptive: bool,
}

/// Ages 12-13: tactical growth and scout attention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MiddlePhase {
    pub tactical_understanding: f32,
    pub game_intelligence: f32,
    pub mental_resilience: f32,
    pub leadership: f32,
    pub technical_level: f32,
    /// Share of matches with a standout performance, 0..1.
    pub standout_rate: f32,
    pub tournament_top_performer: bool,
    /// The capped probability that produced `scout_contact`.
    pub scout_interest: f32,
    pub scout_contact: Option<ScoutContact>,
}

/// Ages 13-14: consolidation before academy selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatePhase {
    pub elite_recognition: f32,
    pub skill_mastery: f32,
}

/// Composite gate read by the academy-selection engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AcademyReadiness {
    pub technical_level: f32,
    pub mental_strength: f32,
    pub family_support: f32,
    /// technical >= 7 AND mental >= 6 AND family support > 0.7.
    pub overall_readiness: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreAcademySummary {
    pub early: EarlyPhase,
    pub middle: MiddlePhase,
    pub late: LatePhase,
    pub readiness: AcademyReadiness,
}

/// Additive scout-interest probability, capped at 0.8.
///
/// The standout rate contributes itself as the base term once it clears
/// 0.3; the remaining conditions add fixed bonuses.
pub fn scout_interest_probability(
    standout_rate: f32,
    tournament_top_performer: bool,
    leadership: f32,
    technical_level: f32,
    game_intelligence: f32,
    tactical_understanding: f32,
) -> f32 {
    let mut p = 0.0;
    if standout_rate > 0.3 {
        p += standout_rate;
    }
    if tournament_top_performer {
        p += 0.2;
    }
    if leadership > 7.0 {
        p += 0.2;
    }
    if technical_level > 8.0 {
        p += 0.2;
    }
    if game_intelligence > 7.0 {
        p += 0.15;
    }
    if tactical_understanding > 7.0 {
        p += 0.1;
    }
    p.min(0.8)
}

#[derive(Debug)]
pub struct PreAcademySimulator;

impl PreAcademySimulator {
    pub fn simulate(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        elementary: &ElementarySummary,
        family: &FamilyEnvironment,
    ) -> PreAcademySummary {
        let early = Self::early_phase(rng, genetics, elementary);
        let middle = Self::middle_phase(rng, genetics, elementary, family);
        let late = Self::late_phase(rng, genetics, &middle);
        let readiness = Self::assess_readiness(&middle, family);
        log::debug!(
            "pre-academy: technical={:.1} mental={:.1} ready={}",
            readiness.technical_level,
            readiness.mental_strength,
            readiness.overall_readiness
        );

        PreAcademySummary { early, middle, late, readiness }
    }

    fn early_phase(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        elementary: &ElementarySummary,
    ) -> EarlyPhase {
        let mut names = CLUB_NAMES.to_vec();
        names.shuffle(rng);
        let candidate_clubs: Vec<LocalClub> = names
            .iter()
            .take(rng.gen_range(3..=6))
            .map(|name| LocalClub {
                name: name.to_string(),
                reputation: rng.gen_range(0.2..0.9),
                coaching_quality: rng.gen_range(0.2..0.9),
                monthly_cost: rng.gen_range(3..=20) * 10_000,
                distance_km: rng.gen_range(1.0..25.0),
            })
            .collect();

        // Families weigh coaching first, travel second.
        let chosen_club = candidate_clubs
            .iter()
            .max_by(|a, b| {
                let score = |c: &LocalClub| c.coaching_quality - c.distance_km * 0.01;
                score(a).total_cmp(&score(b))
            })
            .cloned()
            .unwrap_or_else(|| candidate_clubs[0].clone());

        let club_trial = ClubTrial {
            technical: (genetics.athletic.coordination * 5.0
                + elementary.development.skill_progression * 0.4
                + rng.gen_range(0.0..1.0))
            .clamp(0.0, 10.0),
            physical: ((genetics.athletic.fast_twitch_fibers
                + genetics.athletic.endurance_capacity)
                * 4.0
                + rng.gen_range(0.0..1.0))
            .clamp(0.0, 10.0),
            mental: (genetics.mental.composure * 4.0
                + genetics.mental.focus * 4.0
                + rng.gen_range(0.0..1.0))
            .clamp(0.0, 10.0),
        };

        let growth_spurt = GrowthSpurt {
            started: genetics.height.early_bloomer || rng.gen_bool(0.5),
            projected_gain_cm: (genetics.height.projected_cm - 160.0) * 0.1
                + rng.gen_range(0.0..4.0),
        };

        let mut injury_risk = GeneticCalculator::injury_predispositions(genetics).mean_risk();
        if growth_spurt.started {
            // Rapid growth loosens joints for a while.
            injury_risk = (injury_risk + 0.1).min(1.0);
        }

        EarlyPhase { candidate_clubs, chosen_club, club_trial, growth_spurt, injury_risk }
    }

    fn middle_phase(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        elementary: &ElementarySummary,
        family: &FamilyEnvironment,
    ) -> MiddlePhase {
        let m = &genetics.mental;

        let tactical_understanding =
            (1.5 + m.learning_speed * 4.0 + m.focus * 3.0 + rng.gen_range(0.0..1.0))
                .clamp(0.0, 10.0);
        let game_intelligence = (1.0
            + m.learning_speed * 4.0
            + m.composure * 2.0
            + m.leadership_instinct * 2.0
            + rng.gen_range(0.0..1.0))
        .clamp(0.0, 10.0);
        let mental_resilience =
            (1.0 + m.focus * 3.0 + m.composure * 3.0 + m.competitiveness * 2.0
                + rng.gen_range(0.0..0.8))
            .clamp(0.0, 10.0);
        let leadership =
            (m.leadership_instinct * 7.0 + m.competitiveness * 2.0 + rng.gen_range(0.0..1.0))
                .clamp(0.0, 10.0);
        let technical_level = (1.5
            + genetics.athletic.coordination * 3.0
            + m.learning_speed * 2.0
            + elementary.development.skill_progression * 0.25
            + rng.gen_range(0.0..0.5))
        .clamp(0.0, 10.0);

        let athletic_potential =
            (genetics.athletic.fast_twitch_fibers + genetics.athletic.endurance_capacity) / 2.0;
        let standout_rate = (athletic_potential * 0.5
            + technical_level * 0.04
            + rng.gen_range(0.0..0.1))
        .clamp(0.0, 1.0);
        let tournament_top_performer = rng.gen_bool((standout_rate * 0.6).clamp(0.0, 1.0) as f64);

        let scout_interest = scout_interest_probability(
            standout_rate,
            tournament_top_performer,
            leadership,
            technical_level,
            game_intelligence,
            tactical_understanding,
        );

        let scout_contact = if rng.gen_bool(scout_interest as f64) {
            Some(Self::scout_contact(rng, standout_rate, family))
        } else {
            None
        };

        MiddlePhase {
            tactical_understanding,
            game_intelligence,
            mental_resilience,
            leadership,
            technical_level,
            standout_rate,
            tournament_top_performer,
            scout_interest,
            scout_contact,
        }
    }

    fn scout_contact(
        rng: &mut ChaCha8Rng,
        standout_rate: f32,
        family: &FamilyEnvironment,
    ) -> ScoutContact {
        let affiliations = ["Capital Elite Academy", "Regional Performance Academy", "City Youth Academy"];
        ScoutContact {
            academy_affiliation: affiliations[rng.gen_range(0..affiliations.len())].to_string(),
            initial_evaluation: (standout_rate * 0.7 + rng.gen_range(0.0..0.3)).clamp(0.0, 1.0),
            family_contacted: true,
            family_receptive: family.parental_involvement > 0.4 || rng.gen_bool(0.3),
        }
    }

    fn late_phase(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        middle: &MiddlePhase,
    ) -> LatePhase {
        let contact_bonus = if middle.scout_contact.is_some() { 0.2 } else { 0.0 };
        LatePhase {
            elite_recognition: (middle.standout_rate * 0.6 + contact_bonus
                + rng.gen_range(0.0..0.1))
            .clamp(0.0, 1.0),
            skill_mastery: (middle.technical_level * 0.8
                + genetics.athletic.coordination * 2.0
                + rng.gen_range(0.0..0.5))
            .clamp(0.0, 10.0),
        }
    }

    fn assess_readiness(middle: &MiddlePhase, family: &FamilyEnvironment) -> AcademyReadiness {
        let technical_level = middle.technical_level;
        let mental_strength = middle.mental_resilience;
        let family_support = family.support_level();

        AcademyReadiness {
            technical_level,
            mental_strength,
            family_support,
            overall_readiness: technical_level >= 7.0
                && mental_strength >= 6.0
                && family_support > 0.7,
        }
    }
}
