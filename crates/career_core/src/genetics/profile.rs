//! Hereditary trait generation
//!
//! Every trait is a 0..1 factor. With a parental value supplied the child
//! inherits `clamp(parent * 0.7 + U(-0.3, 0.3), 0.1, 1.0)`; without one the
//! trait is a plain uniform draw. Height is modelled separately as a 60/40
//! father/mother blend with ±10cm noise.
//!
//! A profile is generated exactly once per new player and is read-only for
//! every downstream stage (all stage functions take `&GeneticProfile`).

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Parental inputs distilled from the family tree.
///
/// One value per trait group; each child trait in the group inherits from
/// the same parental factor with independent noise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParentalData {
    pub father_height_cm: f32,
    pub mother_height_cm: f32,
    /// Combined parental athletic pedigree, 0..1.
    pub athleticism: f32,
    /// Combined parental build/physique factor, 0..1.
    pub physique: f32,
    /// Combined parental health/robustness factor, 0..1.
    pub resilience: f32,
    /// Combined parental temperament factor, 0..1.
    pub temperament: f32,
}

/// Explosive/endurance capacity of the raw athlete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AthleticGenes {
    /// Fast-twitch fiber density; drives sprint speed.
    pub fast_twitch_fibers: f32,
    /// Aerobic base; drives stamina.
    pub endurance_capacity: f32,
    /// Fine motor control; drives ball skills.
    pub coordination: f32,
    /// Reaction and change of direction.
    pub reflexes: f32,
}

/// Build and frame factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhysicalGenes {
    pub muscle_mass: f32,
    pub bone_density: f32,
    pub flexibility: f32,
}

/// Durability and recovery factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthGenes {
    pub muscle_durability: f32,
    pub joint_stability: f32,
    pub bone_strength: f32,
    pub immune_strength: f32,
    /// Recovery speed after strain; inverts into injury recovery time.
    pub muscle_recovery: f32,
    /// Longevity genes; sets peak age and decline rate.
    pub longevity: f32,
}

/// Cognitive and character factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MentalGenes {
    pub learning_speed: f32,
    pub focus: f32,
    pub competitiveness: f32,
    pub composure: f32,
    pub leadership_instinct: f32,
}

/// Adult-height projection, independent of the trait groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeightProfile {
    /// Projected adult height, clamped to 160..200 cm.
    pub projected_cm: f32,
    /// Relative growth tempo, 0..1.
    pub growth_rate: f32,
    /// 30% of players hit their growth spurt early.
    pub early_bloomer: bool,
}

/// Immutable hereditary profile read by every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneticProfile {
    pub athletic: AthleticGenes,
    pub physical: PhysicalGenes,
    pub health: HealthGenes,
    pub mental: MentalGenes,
    pub height: HeightProfile,
}

/// Inherit a single trait from a parental factor, or draw it fresh.
fn inherit(rng: &mut ChaCha8Rng, parent: Option<f32>) -> f32 {
    match parent {
        Some(p) => (p * 0.7 + rng.gen_range(-0.3..0.3)).clamp(0.1, 1.0),
        None => rng.gen::<f32>(),
    }
}

impl GeneticProfile {
    /// Generate a fresh profile, optionally anchored to parental data.
    pub fn generate(rng: &mut ChaCha8Rng, parental: Option<&ParentalData>) -> Self {
        let athletic = parental.map(|p| p.athleticism);
        let physique = parental.map(|p| p.physique);
        let resilience = parental.map(|p| p.resilience);
        let temperament = parental.map(|p| p.temperament);

        Self {
            athletic: AthleticGenes {
                fast_twitch_fibers: inherit(rng, athletic),
                endurance_capacity: inherit(rng, athletic),
                coordination: inherit(rng, athletic),
                reflexes: inherit(rng, athletic),
            },
            physical: PhysicalGenes {
                muscle_mass: inherit(rng, physique),
                bone_density: inherit(rng, physique),
                flexibility: inherit(rng, physique),
            },
            health: HealthGenes {
                muscle_durability: inherit(rng, resilience),
                joint_stability: inherit(rng, resilience),
                bone_strength: inherit(rng, resilience),
                immune_strength: inherit(rng, resilience),
                muscle_recovery: inherit(rng, resilience),
                longevity: inherit(rng, resilience),
            },
            mental: MentalGenes {
                learning_speed: inherit(rng, temperament),
                focus: inherit(rng, temperament),
                competitiveness: inherit(rng, temperament),
                composure: inherit(rng, temperament),
                leadership_instinct: inherit(rng, temperament),
            },
            height: Self::generate_height(rng, parental),
        }
    }

    fn generate_height(rng: &mut ChaCha8Rng, parental: Option<&ParentalData>) -> HeightProfile {
        let (father, mother) = match parental {
            Some(p) => (p.father_height_cm, p.mother_height_cm),
            // Population averages when no family data exists.
            None => (176.0, 163.0),
        };
        let projected = (father * 0.6 + mother * 0.4 + rng.gen_range(-10.0..10.0))
            .clamp(160.0, 200.0);

        HeightProfile {
            projected_cm: projected,
            growth_rate: rng.gen::<f32>(),
            early_bloomer: rng.gen_bool(0.30),
        }
    }

    /// Build a flat profile where every trait equals `v` (clamped to 0..1).
    ///
    /// Used by scenario tooling that needs a controlled hereditary baseline
    /// rather than a random one.
    pub fn uniform(v: f32) -> Self {
        let v = v.clamp(0.0, 1.0);
        Self {
            athletic: AthleticGenes {
                fast_twitch_fibers: v,
                endurance_capacity: v,
                coordination: v,
                reflexes: v,
            },
            physical: PhysicalGenes { muscle_mass: v, bone_density: v, flexibility: v },
            health: HealthGenes {
                muscle_durability: v,
                joint_stability: v,
                bone_strength: v,
                immune_strength: v,
                muscle_recovery: v,
                longevity: v,
            },
            mental: MentalGenes {
                learning_speed: v,
                focus: v,
                competitiveness: v,
                composure: v,
                leadership_instinct: v,
            },
            height: HeightProfile {
                projected_cm: 178.0,
                growth_rate: v,
                early_bloomer: false,
            },
        }
    }

    /// Every trait value in generation order, for bound checks.
    pub fn all_traits(&self) -> [f32; 18] {
        [
            self.athletic.fast_twitch_fibers,
            self.athletic.endurance_capacity,
            self.athletic.coordination,
            self.athletic.reflexes,
            self.physical.muscle_mass,
            self.physical.bone_density,
            self.physical.flexibility,
            self.health.muscle_durability,
            self.health.joint_stability,
            self.health.bone_strength,
            self.health.immune_strength,
            self.health.muscle_recovery,
            self.health.longevity,
            self.mental.learning_speed,
            self.mental.focus,
            self.mental.competitiveness,
            self.mental.composure,
            self.mental.leadership_instinct,
        ]
    }
}
