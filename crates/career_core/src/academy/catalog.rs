//! Fixed academy catalog
//!
//! Exactly three academies, one per tier. The catalog is rebuilt per
//! selection run; only the `available` flag depends on the player.

use crate::phases::pre_academy::AcademyReadiness;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AcademyTier {
    Elite,
    High,
    Mid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selectivity {
    VeryHigh,
    High,
    Medium,
}

impl Selectivity {
    /// Admission threshold on the 0..100 trial score.
    pub fn admission_threshold(&self) -> f32 {
        match self {
            Selectivity::VeryHigh => 85.0,
            Selectivity::High => 75.0,
            Selectivity::Medium => 65.0,
        }
    }
}

/// Minimum levels an academy publishes for applicants. Descriptive; the
/// hard availability gate is [`Academy::eligible`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AcademyRequirements {
    pub min_technical: f32,
    pub min_physical: f32,
    pub min_mental: f32,
    pub min_academic: f32,
    pub requires_overall_readiness: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AcademyBenefits {
    pub coaching_quality: f32,
    pub education_support: f32,
    /// Boarding/welfare support for the family, 0..1.
    pub family_support: f32,
    /// Share of costs the family still carries, 0..1.
    pub cost_burden: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Academy {
    pub name: String,
    pub tier: AcademyTier,
    /// 0..100 standing in the football world.
    pub reputation: f32,
    pub selectivity: Selectivity,
    pub requirements: AcademyRequirements,
    pub benefits: AcademyBenefits,
    pub available: bool,
}

impl Academy {
    /// Tier-specific eligibility rule.
    ///
    /// Elite demands full readiness plus a technical level of 8; high accepts
    /// either; mid only needs technical 6. Elite eligibility therefore
    /// implies the other two.
    pub fn eligible(tier: AcademyTier, readiness: &AcademyReadiness) -> bool {
        match tier {
            AcademyTier::Elite => readiness.overall_readiness && readiness.technical_level >= 8.0,
            AcademyTier::High => readiness.overall_readiness || readiness.technical_level >= 7.0,
            AcademyTier::Mid => readiness.technical_level >= 6.0,
        }
    }
}

/// Build the three-academy catalog with availability resolved for `readiness`.
pub fn build_catalog(readiness: &AcademyReadiness) -> Vec<Academy> {
    let entries = [
        (
            "Capital Elite Academy",
            AcademyTier::Elite,
            95.0,
            Selectivity::VeryHigh,
            AcademyRequirements {
                min_technical: 8.0,
                min_physical: 7.0,
                min_mental: 7.0,
                min_academic: 5.0,
                requires_overall_readiness: true,
            },
            AcademyBenefits {
                coaching_quality: 0.95,
                education_support: 0.8,
                family_support: 0.9,
                cost_burden: 0.2,
            },
        ),
        (
            "Regional Performance Academy",
            AcademyTier::High,
            76.0,
            Selectivity::High,
            AcademyRequirements {
                min_technical: 7.0,
                min_physical: 6.0,
                min_mental: 6.0,
                min_academic: 4.0,
                requires_overall_readiness: false,
            },
            AcademyBenefits {
                coaching_quality: 0.8,
                education_support: 0.7,
                family_support: 0.7,
                cost_burden: 0.4,
            },
        ),
        (
            "City Youth Academy",
            AcademyTier::Mid,
            58.0,
            Selectivity::Medium,
            AcademyRequirements {
                min_technical: 6.0,
                min_physical: 5.0,
                min_mental: 5.0,
                min_academic: 3.0,
                requires_overall_readiness: false,
            },
            AcademyBenefits {
                coaching_quality: 0.65,
                education_support: 0.6,
                family_support: 0.6,
                cost_burden: 0.3,
            },
        ),
    ];

    entries
        .into_iter()
        .map(|(name, tier, reputation, selectivity, requirements, benefits)| Academy {
            name: name.to_string(),
            tier,
            reputation,
            selectivity,
            requirements,
            benefits,
            available: Academy::eligible(tier, readiness),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readiness(technical: f32, mental: f32, family: f32) -> AcademyReadiness {
        AcademyReadiness {
            technical_level: technical,
            mental_strength: mental,
            family_support: family,
            overall_readiness: technical >= 7.0 && mental >= 6.0 && family > 0.7,
        }
    }

    #[test]
    fn test_catalog_has_one_academy_per_tier() {
        let catalog = build_catalog(&readiness(5.0, 5.0, 0.5));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].tier, AcademyTier::Elite);
        assert_eq!(catalog[1].tier, AcademyTier::High);
        assert_eq!(catalog[2].tier, AcademyTier::Mid);
    }

    #[test]
    fn test_elite_eligibility_implies_lower_tiers() {
        let ready = readiness(8.5, 7.0, 0.9);
        assert!(Academy::eligible(AcademyTier::Elite, &ready));
        assert!(Academy::eligible(AcademyTier::High, &ready));
        assert!(Academy::eligible(AcademyTier::Mid, &ready));
    }

    #[test]
    fn test_high_tier_accepts_technical_without_readiness() {
        // Technically excellent but without family backing: no overall
        // readiness, still eligible for high and mid.
        let ready = readiness(7.5, 6.5, 0.3);
        assert!(!ready.overall_readiness);
        assert!(!Academy::eligible(AcademyTier::Elite, &ready));
        assert!(Academy::eligible(AcademyTier::High, &ready));
        assert!(Academy::eligible(AcademyTier::Mid, &ready));
    }

    #[test]
    fn test_weak_player_eligible_nowhere() {
        let ready = readiness(4.0, 3.0, 0.3);
        let catalog = build_catalog(&ready);
        assert!(catalog.iter().all(|a| !a.available));
    }

    #[test]
    fn test_thresholds_by_selectivity() {
        assert_eq!(Selectivity::VeryHigh.admission_threshold(), 85.0);
        assert_eq!(Selectivity::High.admission_threshold(), 75.0);
        assert_eq!(Selectivity::Medium.admission_threshold(), 65.0);
    }
}
