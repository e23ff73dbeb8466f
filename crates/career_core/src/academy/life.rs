//! Academy life (and the non-academy fallback)
//!
//! Five narrative years for accepted players, from foundation work to the
//! professional-debut scenario. Players without an offer follow a reduced
//! alternative path instead. Both branches end in the career-readiness and
//! future-projection records consumed by player creation.

use crate::academy::selection::{
    AcademySelectionSummary, AlternativePlan, FinalChoice,
};
use crate::genetics::{GeneticProfile, InjuryPredispositions};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AcademyYearStage {
    Foundation,
    Development,
    Advanced,
    Integration,
    Launch,
}

const YEAR_STAGES: [AcademyYearStage; 5] = [
    AcademyYearStage::Foundation,
    AcademyYearStage::Development,
    AcademyYearStage::Advanced,
    AcademyYearStage::Integration,
    AcademyYearStage::Launch,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AcademyYear {
    pub stage: AcademyYearStage,
    pub training_quality: f32,
    pub technical_growth: f32,
    pub physical_growth: f32,
    pub mental_growth: f32,
    pub standout_moments: u8,
}

/// How the first senior appearance comes about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DebutScenario {
    PlannedSubstitute,
    EmergencySubstitute,
    TacticalSubstitute,
    StartingOpportunity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativePath {
    pub plan: AlternativePlan,
    /// Overall development reached outside the academy system, 0..1.
    pub development_level: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum CareerPath {
    Academy {
        years: Vec<AcademyYear>,
        /// 0..10; drives the debut-scenario weighting.
        readiness_level: f32,
        debut: DebutScenario,
    },
    Alternative(AlternativePath),
}

/// 0..10 per axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CareerReadiness {
    pub technical: f32,
    pub physical: f32,
    pub mental: f32,
    pub tactical: f32,
    pub professional: f32,
    pub overall_readiness: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FutureProjection {
    pub peak_potential_rating: u8,
    pub career_length_years: u8,
    pub injury_risk: f32,
    pub market_value_projection: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcademyLifeSummary {
    pub career_path: CareerPath,
    pub career_readiness: CareerReadiness,
    pub projection: FutureProjection,
}

/// Weighted categorical draw over the four debut scenarios. Above a
/// readiness level of 8 the weights shift toward high-pressure debuts.
pub fn pick_debut_scenario(rng: &mut ChaCha8Rng, readiness_level: f32) -> DebutScenario {
    let weights: [(DebutScenario, f32); 4] = if readiness_level > 8.0 {
        [
            (DebutScenario::PlannedSubstitute, 0.35),
            (DebutScenario::EmergencySubstitute, 0.10),
            (DebutScenario::TacticalSubstitute, 0.20),
            (DebutScenario::StartingOpportunity, 0.35),
        ]
    } else {
        [
            (DebutScenario::PlannedSubstitute, 0.45),
            (DebutScenario::EmergencySubstitute, 0.25),
            (DebutScenario::TacticalSubstitute, 0.20),
            (DebutScenario::StartingOpportunity, 0.10),
        ]
    };

    let total: f32 = weights.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (scenario, weight) in weights {
        if roll < weight {
            return scenario;
        }
        roll -= weight;
    }
    DebutScenario::PlannedSubstitute
}

#[derive(Debug)]
pub struct AcademyLifeSimulator;

impl AcademyLifeSimulator {
    pub fn simulate(
        rng: &mut ChaCha8Rng,
        selection: &AcademySelectionSummary,
        genetics: &GeneticProfile,
        predispositions: &InjuryPredispositions,
    ) -> AcademyLifeSummary {
        match &selection.final_choice {
            FinalChoice::AcademyAccepted { academy_name, .. } => {
                Self::academy_path(rng, selection, academy_name, genetics, predispositions)
            }
            FinalChoice::NoOffer { alternative_plan, .. } => {
                Self::alternative_path(rng, *alternative_plan, genetics, predispositions)
            }
        }
    }

    fn academy_path(
        rng: &mut ChaCha8Rng,
        selection: &AcademySelectionSummary,
        academy_name: &str,
        genetics: &GeneticProfile,
        predispositions: &InjuryPredispositions,
    ) -> AcademyLifeSummary {
        let academy = selection.academies.iter().find(|a| a.name == academy_name);
        let coaching = academy.map(|a| a.benefits.coaching_quality).unwrap_or(0.6);
        let trial_score = selection
            .trials
            .iter()
            .find(|t| t.academy_name == academy_name)
            .map(|t| t.overall_score)
            .unwrap_or(65.0);

        let years: Vec<AcademyYear> = YEAR_STAGES
            .iter()
            .enumerate()
            .map(|(index, stage)| {
                // Later years lean harder on mentality than raw drills.
                let seniority = index as f32 / 4.0;
                AcademyYear {
                    stage: *stage,
                    training_quality: (coaching + rng.gen_range(-0.1..0.1)).clamp(0.0, 1.0),
                    technical_growth: (genetics.athletic.coordination * (1.0 - seniority * 0.3)
                        + coaching * 0.3
                        + rng.gen_range(0.0..0.2))
                    .clamp(0.0, 1.0),
                    physical_growth: (genetics.athletic.fast_twitch_fibers * 0.5
                        + genetics.physical.muscle_mass * 0.3
                        + rng.gen_range(0.0..0.2))
                    .clamp(0.0, 1.0),
                    mental_growth: (genetics.mental.learning_speed * (0.5 + seniority * 0.5)
                        + rng.gen_range(0.0..0.2))
                    .clamp(0.0, 1.0),
                    standout_moments: rng.gen_range(0..=5),
                }
            })
            .collect();

        let readiness_level = (trial_score / 10.0
            + genetics.mental.composure * 0.5
            + rng.gen_range(0.0..0.3))
        .clamp(0.0, 10.0);
        let debut = pick_debut_scenario(rng, readiness_level);
        log::debug!("academy life: readiness={:.1} debut={:?}", readiness_level, debut);

        let career_readiness = Self::career_readiness(rng, genetics, readiness_level, coaching, 1.0);
        let projection = Self::projection(genetics, &career_readiness, predispositions);

        AcademyLifeSummary {
            career_path: CareerPath::Academy { years, readiness_level, debut },
            career_readiness,
            projection,
        }
    }

    fn alternative_path(
        rng: &mut ChaCha8Rng,
        plan: AlternativePlan,
        genetics: &GeneticProfile,
        predispositions: &InjuryPredispositions,
    ) -> AcademyLifeSummary {
        let development_level = (genetics.athletic.coordination * 0.4
            + genetics.mental.learning_speed * 0.3
            + rng.gen_range(0.0..0.2))
        .clamp(0.0, 1.0);

        // Without academy structure everything grows slower.
        let career_readiness =
            Self::career_readiness(rng, genetics, development_level * 6.0, 0.4, 0.65);
        let projection = Self::projection(genetics, &career_readiness, predispositions);

        AcademyLifeSummary {
            career_path: CareerPath::Alternative(AlternativePath { plan, development_level }),
            career_readiness,
            projection,
        }
    }

    fn career_readiness(
        rng: &mut ChaCha8Rng,
        genetics: &GeneticProfile,
        readiness_level: f32,
        coaching: f32,
        scale: f32,
    ) -> CareerReadiness {
        let technical =
            ((readiness_level * 0.7 + coaching * 2.0 + rng.gen_range(0.0..0.5)) * scale)
                .clamp(0.0, 10.0);
        let physical = ((3.0
            + (genetics.athletic.fast_twitch_fibers + genetics.athletic.endurance_capacity) * 3.0
            + rng.gen_range(0.0..1.0))
            * scale)
            .clamp(0.0, 10.0);
        let mental = ((1.0
            + genetics.mental.focus * 3.0
            + genetics.mental.composure * 3.0
            + genetics.mental.competitiveness * 2.0)
            * scale)
            .clamp(0.0, 10.0);
        let tactical = ((readiness_level * 0.5 + genetics.mental.learning_speed * 3.0
            + rng.gen_range(0.0..0.5))
            * scale)
            .clamp(0.0, 10.0);
        let professional = ((2.0
            + genetics.mental.composure * 4.0
            + genetics.mental.focus * 3.0
            + rng.gen_range(0.0..0.5))
            * scale)
            .clamp(0.0, 10.0);

        let overall_readiness = technical * 0.25
            + physical * 0.20
            + mental * 0.20
            + tactical * 0.20
            + professional * 0.15;

        CareerReadiness { technical, physical, mental, tactical, professional, overall_readiness }
    }

    fn projection(
        genetics: &GeneticProfile,
        readiness: &CareerReadiness,
        predispositions: &InjuryPredispositions,
    ) -> FutureProjection {
        FutureProjection {
            peak_potential_rating: (60.0 + readiness.overall_readiness * 4.0).clamp(0.0, 99.0)
                as u8,
            career_length_years: 12 + (genetics.health.longevity.clamp(0.0, 1.0) * 6.0) as u8,
            injury_risk: predispositions.mean_risk(),
            market_value_projection: 50_000
                + (readiness.overall_readiness * 100_000.0).max(0.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academy::catalog::build_catalog;
    use crate::academy::selection::SelectionState;
    use crate::genetics::GeneticCalculator;
    use crate::phases::pre_academy::AcademyReadiness;
    use rand::SeedableRng;

    fn no_offer_selection() -> AcademySelectionSummary {
        let readiness = AcademyReadiness {
            technical_level: 4.0,
            mental_strength: 3.0,
            family_support: 0.4,
            overall_readiness: false,
        };
        AcademySelectionSummary {
            state: SelectionState::NoOffer,
            academies: build_catalog(&readiness),
            applications: Vec::new(),
            trials: Vec::new(),
            offers: Vec::new(),
            final_choice: FinalChoice::NoOffer {
                alternative_plan: AlternativePlan::SchoolFootball,
                continue_local_development: true,
            },
        }
    }

    #[test]
    fn test_no_offer_takes_alternative_path() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let genetics = GeneticProfile::uniform(0.3);
        let predispositions = GeneticCalculator::injury_predispositions(&genetics);
        let summary = AcademyLifeSimulator::simulate(
            &mut rng,
            &no_offer_selection(),
            &genetics,
            &predispositions,
        );
        match summary.career_path {
            CareerPath::Alternative(path) => {
                assert_eq!(path.plan, AlternativePlan::SchoolFootball)
            }
            CareerPath::Academy { .. } => panic!("expected alternative path"),
        }
    }

    #[test]
    fn test_debut_draw_respects_weights() {
        // Low readiness must never be impossible to land the common outcome
        // and high readiness should start matches far more often.
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut high_starts = 0;
        let mut low_starts = 0;
        for _ in 0..500 {
            if pick_debut_scenario(&mut rng, 9.0) == DebutScenario::StartingOpportunity {
                high_starts += 1;
            }
            if pick_debut_scenario(&mut rng, 5.0) == DebutScenario::StartingOpportunity {
                low_starts += 1;
            }
        }
        assert!(high_starts > low_starts);
        assert!(low_starts > 0 || high_starts > 0);
    }

    #[test]
    fn test_career_readiness_bounded() {
        for seed in 0..30u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let genetics = GeneticProfile::uniform(0.9);
            let predispositions = GeneticCalculator::injury_predispositions(&genetics);
            let summary = AcademyLifeSimulator::simulate(
                &mut rng,
                &no_offer_selection(),
                &genetics,
                &predispositions,
            );
            let r = summary.career_readiness;
            for v in [r.technical, r.physical, r.mental, r.tactical, r.professional, r.overall_readiness] {
                assert!((0.0..=10.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_projection_fields_plausible() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let genetics = GeneticProfile::uniform(0.7);
        let predispositions = GeneticCalculator::injury_predispositions(&genetics);
        let summary = AcademyLifeSimulator::simulate(
            &mut rng,
            &no_offer_selection(),
            &genetics,
            &predispositions,
        );
        assert!(summary.projection.peak_potential_rating <= 99);
        assert!((12..=18).contains(&summary.projection.career_length_years));
        assert!((0.0..=1.0).contains(&summary.projection.injury_risk));
    }
}
