//! Stat-derivation engine
//!
//! Combines the positional template, genetic influences and the cumulative
//! bonuses of every life phase into the final starting attributes and the
//! potential range. Missing upstream summaries degrade to zero bonuses
//! rather than failing; an incomplete life story is still a valid player.

use crate::academy::life::AcademyLifeSummary;
use crate::genetics::{GeneticCalculator, GeneticProfile};
use crate::phases::childhood::ChildhoodSummary;
use crate::phases::elementary::ElementarySummary;
use crate::phases::environment::IncomeBracket;
use crate::phases::pre_academy::PreAcademySummary;
use crate::player::templates::base_stats;
use crate::player::types::{
    FinalStatBundle, PlayerCreationData, PlayerStats, PotentialRange, StatDeltas,
};

const STAT_MIN: f32 = 30.0;
const STAT_MAX: f32 = 85.0;
const POTENTIAL_FLOOR: f32 = 65.0;
const POTENTIAL_CEILING: f32 = 99.0;

#[derive(Debug)]
pub struct StatDerivationEngine;

impl StatDerivationEngine {
    /// Derive the final starting attributes for a new player.
    pub fn derive(
        creation: &PlayerCreationData,
        genetics: &GeneticProfile,
        childhood: Option<&ChildhoodSummary>,
        elementary: Option<&ElementarySummary>,
        pre_academy: Option<&PreAcademySummary>,
        _academy_life: Option<&AcademyLifeSummary>,
    ) -> FinalStatBundle {
        let base = base_stats(creation.position);
        let genetic_stats = GeneticCalculator::apply_influences(genetics, &base, creation.age);

        let mut bonuses = StatDeltas::default();
        bonuses.add(&Self::childhood_bonuses(childhood));
        bonuses.add(&Self::elementary_bonuses(elementary));
        bonuses.add(&Self::pre_academy_bonuses(pre_academy));

        let deltas = bonuses.as_array();
        let mut clamped = [0u8; 6];
        for (i, value) in genetic_stats.iter().enumerate() {
            clamped[i] = (value + deltas[i] as f32).clamp(STAT_MIN, STAT_MAX).round() as u8;
        }
        let stats = PlayerStats {
            speed: clamped[0],
            shooting: clamped[1],
            passing: clamped[2],
            defense: clamped[3],
            stamina: clamped[4],
            intelligence: clamped[5],
        };

        let potential = Self::potential_range(genetics, childhood, elementary, pre_academy);
        let overall_rating = stats.mean_floor();
        log::debug!(
            "derived stats: overall={} potential={}..{}",
            overall_rating,
            potential.min,
            potential.max
        );

        FinalStatBundle { stats, potential, overall_rating }
    }

    fn childhood_bonuses(childhood: Option<&ChildhoodSummary>) -> StatDeltas {
        let mut deltas = StatDeltas::default();
        let Some(childhood) = childhood else { return deltas };
        let indicators = &childhood.indicators;

        if indicators.ball_affinity > 7.0 {
            deltas.shooting += 3;
            deltas.passing += 2;
        }
        if indicators.athletic_potential > 0.8 {
            deltas.speed += 3;
            deltas.stamina += 2;
        }
        if indicators.social_leadership {
            deltas.intelligence += 2;
        }
        if indicators.physical_confidence > 0.7 {
            deltas.defense += 1;
            deltas.stamina += 1;
        }
        if indicators.attention_capacity > 0.7 {
            deltas.intelligence += 1;
        }
        deltas
    }

    fn elementary_bonuses(elementary: Option<&ElementarySummary>) -> StatDeltas {
        let mut deltas = StatDeltas::default();
        let Some(elementary) = elementary else { return deltas };
        let development = &elementary.development;

        if development.skill_progression > 7.0 {
            deltas.shooting += 2;
            deltas.passing += 2;
        }
        if development.leadership_emergence {
            deltas.intelligence += 2;
        }
        if development.teamwork > 7.0 {
            deltas.passing += 1;
            deltas.defense += 1;
        }
        if let Some(tryout) = &elementary.tryout {
            use crate::phases::elementary::YouthPosition;
            match tryout.position {
                YouthPosition::Forward => deltas.shooting += 1,
                YouthPosition::Midfielder => deltas.passing += 1,
                YouthPosition::Defender => deltas.defense += 1,
                YouthPosition::Flexible => {}
            }
        }
        let academic_avg = (elementary.early.academic_skill
            + elementary.middle.academic_skill
            + elementary.late.academic_skill)
            / 3.0;
        if academic_avg > 7.0 {
            deltas.intelligence += 1;
        }
        deltas
    }

    fn pre_academy_bonuses(pre_academy: Option<&PreAcademySummary>) -> StatDeltas {
        let mut deltas = StatDeltas::default();
        let Some(pre_academy) = pre_academy else { return deltas };
        let middle = &pre_academy.middle;

        if middle.technical_level >= 8.0 {
            deltas.shooting += 2;
            deltas.passing += 2;
        }
        if middle.tactical_understanding > 7.0 {
            deltas.intelligence += 2;
            deltas.defense += 1;
        }
        if middle.mental_resilience > 7.0 {
            deltas.stamina += 1;
            deltas.intelligence += 1;
        }
        if middle.scout_contact.is_some() {
            deltas.speed += 1;
            deltas.shooting += 1;
        }
        if pre_academy.early.growth_spurt.started {
            deltas.speed += 1;
            deltas.stamina += 1;
        }
        deltas
    }

    /// Development-quality score: boolean condition checks across the three
    /// formative stages, each worth a fixed number of points.
    fn quality_score(
        childhood: Option<&ChildhoodSummary>,
        elementary: Option<&ElementarySummary>,
        pre_academy: Option<&PreAcademySummary>,
    ) -> u8 {
        let mut score = 0u8;

        if let Some(childhood) = childhood {
            if childhood.indicators.athletic_potential > 0.7 {
                score += 2;
            }
            if childhood.indicators.ball_affinity > 7.0 {
                score += 1;
            }
            if matches!(
                childhood.environment.income,
                IncomeBracket::Comfortable | IncomeBracket::High
            ) {
                score += 1;
            }
        }
        if let Some(elementary) = elementary {
            if elementary.school.sports_program_quality > 0.7 {
                score += 1;
            }
            if elementary.development.skill_progression > 7.0 {
                score += 2;
            }
        }
        if let Some(pre_academy) = pre_academy {
            if pre_academy.readiness.overall_readiness {
                score += 3;
            }
        }
        score
    }

    /// Step function on the quality score.
    fn development_quality_bonus(quality_score: u8) -> i16 {
        match quality_score {
            s if s >= 8 => 5,
            s if s >= 6 => 3,
            s if s >= 4 => 1,
            _ => -2,
        }
    }

    fn potential_range(
        genetics: &GeneticProfile,
        childhood: Option<&ChildhoodSummary>,
        elementary: Option<&ElementarySummary>,
        pre_academy: Option<&PreAcademySummary>,
    ) -> PotentialRange {
        let genetic = GeneticCalculator::genetic_potential(genetics);
        let quality = Self::quality_score(childhood, elementary, pre_academy);
        let bonus = Self::development_quality_bonus(quality);

        let min = genetic.overall_min.max(POTENTIAL_FLOOR);
        let max = (genetic.overall_max + bonus as f32).min(POTENTIAL_CEILING).max(min);

        PotentialRange {
            min: min.round() as u8,
            max: max.round() as u8,
            peak_age: genetic.peak_age,
            decline_rate: genetic.decline_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::types::{CareerAmbition, Position};

    fn creation(position: Position, age: u8) -> PlayerCreationData {
        PlayerCreationData {
            name: "Test Player".to_string(),
            age,
            position,
            nationality: "KR".to_string(),
            career_ambition: CareerAmbition::ProfessionalPlayer,
            starting_league: "K League 2".to_string(),
            starting_team: "Test FC".to_string(),
        }
    }

    #[test]
    fn test_missing_upstream_data_defaults_cleanly() {
        let genetics = GeneticProfile::uniform(0.5);
        let bundle = StatDerivationEngine::derive(
            &creation(Position::MID, 18),
            &genetics,
            None,
            None,
            None,
            None,
        );
        for value in bundle.stats.as_array() {
            assert!((30..=85).contains(&value));
        }
        // No stage data means a poor development-quality score: -2 on the cap.
        assert!(bundle.potential.min >= 65);
        assert!(bundle.potential.max <= 99);
        assert!(bundle.potential.min <= bundle.potential.max);
    }

    #[test]
    fn test_overall_rating_matches_mean_floor() {
        for v in [0.2, 0.5, 0.9] {
            let genetics = GeneticProfile::uniform(v);
            let bundle = StatDerivationEngine::derive(
                &creation(Position::FWD, 18),
                &genetics,
                None,
                None,
                None,
                None,
            );
            assert_eq!(bundle.overall_rating, bundle.stats.mean_floor());
        }
    }

    #[test]
    fn test_quality_bonus_steps() {
        assert_eq!(StatDerivationEngine::development_quality_bonus(10), 5);
        assert_eq!(StatDerivationEngine::development_quality_bonus(8), 5);
        assert_eq!(StatDerivationEngine::development_quality_bonus(7), 3);
        assert_eq!(StatDerivationEngine::development_quality_bonus(6), 3);
        assert_eq!(StatDerivationEngine::development_quality_bonus(5), 1);
        assert_eq!(StatDerivationEngine::development_quality_bonus(4), 1);
        assert_eq!(StatDerivationEngine::development_quality_bonus(3), -2);
        assert_eq!(StatDerivationEngine::development_quality_bonus(0), -2);
    }

    #[test]
    fn test_potential_ordering_for_weak_genetics() {
        // Weak genes push the raw ceiling below the 65 floor; the range must
        // still come out ordered.
        let genetics = GeneticProfile::uniform(0.1);
        let bundle = StatDerivationEngine::derive(
            &creation(Position::DEF, 16),
            &genetics,
            None,
            None,
            None,
            None,
        );
        assert!(bundle.potential.min >= 65);
        assert!(bundle.potential.min <= bundle.potential.max);
        assert!(bundle.potential.max <= 99);
    }

    #[test]
    fn test_peak_age_carried_from_genetics() {
        let genetics = GeneticProfile::uniform(0.9);
        let bundle = StatDerivationEngine::derive(
            &creation(Position::MID, 18),
            &genetics,
            None,
            None,
            None,
            None,
        );
        assert!((26..=32).contains(&bundle.potential.peak_age));
    }
}
