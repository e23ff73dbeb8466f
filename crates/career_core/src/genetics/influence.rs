//! Derived views over a genetic profile
//!
//! Pure calculators, no RNG: the potential window, the multiplicative
//! influence of genes on base stats, and injury predispositions consumed
//! by the (external) injury system.

use crate::genetics::profile::GeneticProfile;
use crate::player::types::PlayerStats;
use serde::{Deserialize, Serialize};

/// Per-attribute ceiling interval before development bonuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PotentialBand {
    pub min: f32,
    pub max: f32,
}

/// Hereditary potential window across all six attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneticPotential {
    pub speed: PotentialBand,
    pub shooting: PotentialBand,
    pub passing: PotentialBand,
    pub defense: PotentialBand,
    pub stamina: PotentialBand,
    pub intelligence: PotentialBand,
    /// Mean of the per-attribute minima.
    pub overall_min: f32,
    /// Mean of the per-attribute maxima.
    pub overall_max: f32,
    /// 26..=32, from longevity genes.
    pub peak_age: u8,
    /// 0..1, lower is slower post-peak decline.
    pub decline_rate: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InjuryCategory {
    Muscle,
    Joint,
    Bone,
    Illness,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InjuryFrequency {
    Low,
    Moderate,
    High,
}

/// One predisposition entry per injury category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Predisposition {
    /// 0..1, inverted from the correlated health trait.
    pub risk: f32,
    /// 0..1, inverted from muscle recovery; scales layoff length.
    pub recovery_time: f32,
    pub frequency: InjuryFrequency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InjuryPredispositions {
    pub muscle: Predisposition,
    pub joint: Predisposition,
    pub bone: Predisposition,
    pub illness: Predisposition,
}

impl InjuryPredispositions {
    pub fn get(&self, category: InjuryCategory) -> Predisposition {
        match category {
            InjuryCategory::Muscle => self.muscle,
            InjuryCategory::Joint => self.joint,
            InjuryCategory::Bone => self.bone,
            InjuryCategory::Illness => self.illness,
        }
    }

    /// Mean risk across categories, used for career projections.
    pub fn mean_risk(&self) -> f32 {
        (self.muscle.risk + self.joint.risk + self.bone.risk + self.illness.risk) / 4.0
    }
}

fn band(blend: f32) -> PotentialBand {
    let center = 35.0 + 55.0 * blend.clamp(0.0, 1.0);
    PotentialBand {
        min: (center - 8.0).clamp(40.0, 99.0),
        max: (center + 12.0).clamp(40.0, 99.0),
    }
}

fn frequency_for(risk: f32) -> InjuryFrequency {
    if risk < 0.4 {
        InjuryFrequency::Low
    } else if risk < 0.7 {
        InjuryFrequency::Moderate
    } else {
        InjuryFrequency::High
    }
}

/// Pure calculators over an immutable [`GeneticProfile`].
#[derive(Debug)]
pub struct GeneticCalculator;

impl GeneticCalculator {
    /// Potential window from weighted blends of two to three traits each.
    pub fn genetic_potential(profile: &GeneticProfile) -> GeneticPotential {
        let a = &profile.athletic;
        let m = &profile.mental;
        let p = &profile.physical;
        let h = &profile.health;

        let speed = band(a.fast_twitch_fibers * 0.6 + a.reflexes * 0.4);
        let shooting = band(a.coordination * 0.5 + a.fast_twitch_fibers * 0.3 + m.composure * 0.2);
        let passing = band(a.coordination * 0.5 + m.learning_speed * 0.3 + m.focus * 0.2);
        let defense = band(p.muscle_mass * 0.4 + a.reflexes * 0.3 + m.focus * 0.3);
        let stamina = band(a.endurance_capacity * 0.6 + h.muscle_recovery * 0.4);
        let intelligence = band(m.learning_speed * 0.5 + m.focus * 0.3 + m.composure * 0.2);

        let bands = [&speed, &shooting, &passing, &defense, &stamina, &intelligence];
        let overall_min = bands.iter().map(|b| b.min).sum::<f32>() / 6.0;
        let overall_max = bands.iter().map(|b| b.max).sum::<f32>() / 6.0;

        GeneticPotential {
            speed,
            shooting,
            passing,
            defense,
            stamina,
            intelligence,
            overall_min,
            overall_max,
            peak_age: 26 + (h.longevity.clamp(0.0, 1.0) * 6.0).floor() as u8,
            decline_rate: (1.0 - (h.longevity * 0.6 + h.muscle_recovery * 0.2)).clamp(0.1, 1.0),
        }
    }

    /// Multiply base stats by `(constant + weight * trait)` and apply age scaling.
    ///
    /// Returns f32 values so the derivation engine can add integer bonuses
    /// before the final clamp-and-round.
    pub fn apply_influences(profile: &GeneticProfile, base: &PlayerStats, age: u8) -> [f32; 6] {
        let a = &profile.athletic;
        let m = &profile.mental;
        let p = &profile.physical;

        let mut values = [
            base.speed as f32 * (0.80 + 0.30 * a.fast_twitch_fibers),
            base.shooting as f32 * (0.80 + 0.30 * a.coordination),
            base.passing as f32 * (0.80 + 0.30 * (a.coordination * 0.5 + m.learning_speed * 0.5)),
            base.defense as f32 * (0.80 + 0.30 * (p.muscle_mass * 0.5 + m.focus * 0.5)),
            base.stamina as f32 * (0.80 + 0.30 * a.endurance_capacity),
            base.intelligence as f32 * (0.80 + 0.30 * m.learning_speed),
        ];

        if age < 18 {
            // Younger bodies sit farther from their adult baseline.
            let t = ((age as f32 - 14.0) / 4.0).clamp(0.0, 1.0);
            let development = 0.85 + 0.15 * t;
            for v in values.iter_mut() {
                *v *= development;
            }
        } else if age > 30 {
            let seasons_past = (age - 30) as f32;
            let physical_decay = (1.0 - 0.02 * seasons_past).max(0.6);
            // speed, shooting, defense, stamina fade; game reading keeps growing.
            values[0] *= physical_decay;
            values[1] *= physical_decay;
            values[3] *= physical_decay;
            values[4] *= physical_decay;
            values[5] *= 1.0 + 0.015 * seasons_past;
        }

        values
    }

    pub fn injury_predispositions(profile: &GeneticProfile) -> InjuryPredispositions {
        let h = &profile.health;
        let recovery_time = (1.0 - h.muscle_recovery).clamp(0.0, 1.0);

        let entry = |trait_value: f32| {
            let risk = (1.0 - trait_value).clamp(0.0, 1.0);
            Predisposition { risk, recovery_time, frequency: frequency_for(risk) }
        };

        InjuryPredispositions {
            muscle: entry(h.muscle_durability),
            joint: entry(h.joint_stability),
            bone: entry(h.bone_strength),
            illness: entry(h.immune_strength),
        }
    }
}
