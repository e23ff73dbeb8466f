//! Elementary-school stage (ages six to eleven)
//!
//! Three sub-periods derive academic and athletic progress from the early
//! indicators plus a school environment rolled from family income and
//! location. The middle period carries the probabilistic first-team tryout.

use crate::genetics::GeneticProfile;
use crate::phases::childhood::ChildhoodSummary;
use crate::phases::environment::{FamilyEnvironment, Location};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// School quality rolled from the family's circumstances.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SchoolEnvironment {
    pub academic_quality: f32,
    pub sports_program_quality: f32,
    /// How much individual attention the PE coach can give, 0..1.
    pub coaching_attention: f32,
}

impl SchoolEnvironment {
    fn generate(rng: &mut ChaCha8Rng, family: &FamilyEnvironment) -> Self {
        let comfort = family.income.comfort();
        let urban_bonus = match family.location {
            Location::Urban => 0.1,
            Location::Suburban => 0.05,
            Location::Rural => 0.0,
        };

        Self {
            academic_quality: (comfort * 0.5 + urban_bonus + rng.gen_range(0.1..0.4))
                .clamp(0.0, 1.0),
            sports_program_quality: (comfort * 0.4 + urban_bonus + rng.gen_range(0.1..0.5))
                .clamp(0.0, 1.0),
            coaching_attention: (0.3 + rng.gen_range(0.0..0.5) - 0.05 * family.siblings as f32)
                .clamp(0.1, 1.0),
        }
    }
}

/// One of the three school sub-periods (6-8, 8-10, 10-11).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ElementaryPeriod {
    /// 0..10 academic skill for the period.
    pub academic_skill: f32,
    /// Share of organized sport the child takes part in, 0..1.
    pub athletic_participation: f32,
    pub social_standing: f32,
}

/// Position assigned at the first-team tryout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum YouthPosition {
    Forward,
    Midfielder,
    Defender,
    Flexible,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TeamTryout {
    pub position: YouthPosition,
    pub coach_impression: f32,
}

/// Terminal aggregate of the stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AthleticDevelopment {
    /// 0..10; > 7 feeds passing/shooting bonuses later.
    pub skill_progression: f32,
    pub leadership_emergence: bool,
    /// 0..10.
    pub teamwork: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementarySummary {
    pub school: SchoolEnvironment,
    pub early: ElementaryPeriod,
    pub middle: ElementaryPeriod,
    pub late: ElementaryPeriod,
    pub tryout: Option<TeamTryout>,
    pub development: AthleticDevelopment,
}

#[derive(Debug)]
pub struct ElementarySimulator;

impl ElementarySimulator {
    pub fn simulate(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        childhood: &ChildhoodSummary,
        family: &FamilyEnvironment,
    ) -> ElementarySummary {
        let school = SchoolEnvironment::generate(rng, family);

        let early = Self::period(rng, genetics, childhood, &school, 0.9);
        let middle = Self::period(rng, genetics, childhood, &school, 1.0);
        let late = Self::period(rng, genetics, childhood, &school, 1.05);

        let tryout = Self::roll_tryout(rng, genetics, childhood, &school, family);
        if tryout.is_some() {
            log::debug!("elementary: first-team tryout passed");
        }
        let development = Self::development(rng, genetics, childhood, &middle);

        ElementarySummary { school, early, middle, late, tryout, development }
    }

    fn period(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        childhood: &ChildhoodSummary,
        school: &SchoolEnvironment,
        maturity: f32,
    ) -> ElementaryPeriod {
        let indicators = &childhood.indicators;

        let academic_skill = ((genetics.mental.learning_speed * 5.0
            + indicators.attention_capacity * 2.0
            + school.academic_quality * 2.0)
            * maturity
            + rng.gen_range(0.0..1.0))
        .clamp(0.0, 10.0);

        ElementaryPeriod {
            academic_skill,
            athletic_participation: (indicators.athletic_potential * 0.6
                + school.sports_program_quality * 0.2
                + rng.gen_range(0.0..0.2))
            .clamp(0.0, 1.0),
            social_standing: (indicators.physical_confidence * 0.5
                + genetics.mental.composure * 0.3
                + rng.gen_range(0.0..0.2))
            .clamp(0.0, 1.0),
        }
    }

    /// Selection probability is the plain 3-way average of athletic potential,
    /// school sports quality and parental involvement.
    fn roll_tryout(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        childhood: &ChildhoodSummary,
        school: &SchoolEnvironment,
        family: &FamilyEnvironment,
    ) -> Option<TeamTryout> {
        let indicators = &childhood.indicators;
        let probability = (indicators.athletic_potential
            + school.sports_program_quality
            + family.parental_involvement)
            / 3.0;

        if !rng.gen_bool(probability.clamp(0.0, 1.0) as f64) {
            return None;
        }

        let competitive = genetics.mental.competitiveness > 0.6;
        let athletic = indicators.athletic_potential > 0.7;

        // Priority order matters: leadership outranks raw athleticism.
        let position = if indicators.social_leadership && competitive {
            YouthPosition::Midfielder
        } else if athletic && competitive {
            YouthPosition::Forward
        } else if competitive {
            YouthPosition::Defender
        } else {
            YouthPosition::Flexible
        };

        Some(TeamTryout {
            position,
            coach_impression: (indicators.ball_affinity / 10.0 * 0.7 + rng.gen_range(0.0..0.3))
                .clamp(0.0, 1.0),
        })
    }

    fn development(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        childhood: &ChildhoodSummary,
        middle: &ElementaryPeriod,
    ) -> AthleticDevelopment {
        let indicators = &childhood.indicators;

        AthleticDevelopment {
            skill_progression: (1.0
                + indicators.athletic_potential * 6.0
                + indicators.ball_affinity * 0.2
                + rng.gen_range(0.0..1.2))
            .clamp(0.0, 10.0),
            leadership_emergence: indicators.social_leadership
                && genetics.mental.competitiveness > 0.5,
            teamwork: ((genetics.mental.composure * 0.4
                + genetics.mental.focus * 0.3
                + middle.athletic_participation * 0.3)
                * 10.0
                + rng.gen_range(-0.5..0.5))
            .clamp(0.0, 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::childhood::ChildhoodSimulator;
    use crate::phases::environment::{Housing, IncomeBracket};
    use rand::SeedableRng;

    fn strong_environment() -> FamilyEnvironment {
        FamilyEnvironment {
            income: IncomeBracket::High,
            housing: Housing::House,
            location: Location::Urban,
            siblings: 1,
            parental_involvement: 0.9,
            extended_family_support: 0.8,
        }
    }

    fn run(trait_value: f32, env: FamilyEnvironment, seed: u64) -> ElementarySummary {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let genetics = GeneticProfile::uniform(trait_value);
        let childhood = ChildhoodSimulator::simulate(&mut rng, &genetics, Some(env.clone()));
        ElementarySimulator::simulate(&mut rng, &genetics, &childhood, &env)
    }

    #[test]
    fn test_academic_skill_clamped_to_ten() {
        for seed in 0..30u64 {
            let summary = run(1.0, strong_environment(), seed);
            for period in [summary.early, summary.middle, summary.late] {
                assert!((0.0..=10.0).contains(&period.academic_skill));
            }
        }
    }

    #[test]
    fn test_gifted_player_progression() {
        for seed in 0..30u64 {
            let summary = run(0.9, strong_environment(), seed);
            assert!(summary.development.skill_progression >= 8.0);
            assert!(summary.development.leadership_emergence);
        }
    }

    #[test]
    fn test_tryout_position_priority() {
        // Leadership + competitiveness outranks athleticism, so a gifted
        // leader who gets selected must land in midfield.
        for seed in 0..60u64 {
            let summary = run(0.9, strong_environment(), seed);
            if let Some(tryout) = summary.tryout {
                assert_eq!(tryout.position, YouthPosition::Midfielder);
            }
        }
    }

    #[test]
    fn test_weak_profile_rarely_progresses() {
        let env = FamilyEnvironment {
            income: IncomeBracket::Low,
            parental_involvement: 0.3,
            ..strong_environment()
        };
        for seed in 0..30u64 {
            let summary = run(0.2, env.clone(), seed);
            assert!(summary.development.skill_progression < 5.0);
            assert!(!summary.development.leadership_emergence);
        }
    }
}
