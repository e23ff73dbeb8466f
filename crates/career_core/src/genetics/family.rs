//! Family tree generation
//!
//! Purely descriptive background for the player record. The only numeric
//! contribution to the pipeline is parental height and pedigree, distilled
//! into [`ParentalData`] for trait inheritance.

use crate::genetics::profile::ParentalData;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AthleticLevel {
    None,
    School,
    Amateur,
    SemiPro,
    Professional,
}

impl AthleticLevel {
    /// Pedigree factor fed into trait inheritance.
    pub fn pedigree(&self) -> f32 {
        match self {
            AthleticLevel::None => 0.35,
            AthleticLevel::School => 0.45,
            AthleticLevel::Amateur => 0.55,
            AthleticLevel::SemiPro => 0.7,
            AthleticLevel::Professional => 0.85,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyMember {
    pub relation: String,
    pub occupation: String,
    pub nationality: String,
    pub height_cm: f32,
    pub athletic_history: AthleticLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sibling {
    pub older: bool,
    pub plays_football: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyTree {
    pub father: FamilyMember,
    pub mother: FamilyMember,
    pub grandparents: Vec<FamilyMember>,
    pub siblings: Vec<Sibling>,
}

const OCCUPATIONS: &[&str] = &[
    "teacher",
    "office worker",
    "shop owner",
    "engineer",
    "nurse",
    "driver",
    "chef",
    "construction worker",
    "civil servant",
    "coach",
];

fn weighted_athletic_level(rng: &mut ChaCha8Rng) -> AthleticLevel {
    // Most parents never played beyond school level.
    let roll: f32 = rng.gen();
    if roll < 0.40 {
        AthleticLevel::None
    } else if roll < 0.65 {
        AthleticLevel::School
    } else if roll < 0.85 {
        AthleticLevel::Amateur
    } else if roll < 0.96 {
        AthleticLevel::SemiPro
    } else {
        AthleticLevel::Professional
    }
}

fn random_member(rng: &mut ChaCha8Rng, relation: &str, nationality: &str, base_height: f32) -> FamilyMember {
    FamilyMember {
        relation: relation.to_string(),
        occupation: OCCUPATIONS
            .choose(rng)
            .copied()
            .unwrap_or("office worker")
            .to_string(),
        nationality: nationality.to_string(),
        height_cm: base_height + rng.gen_range(-8.0..8.0),
        athletic_history: weighted_athletic_level(rng),
    }
}

impl FamilyTree {
    pub fn generate(rng: &mut ChaCha8Rng, nationality: &str) -> Self {
        let father = random_member(rng, "father", nationality, 176.0);
        let mother = random_member(rng, "mother", nationality, 163.0);

        let grandparents = vec![
            random_member(rng, "paternal_grandfather", nationality, 174.0),
            random_member(rng, "paternal_grandmother", nationality, 161.0),
            random_member(rng, "maternal_grandfather", nationality, 174.0),
            random_member(rng, "maternal_grandmother", nationality, 161.0),
        ];

        let sibling_count = rng.gen_range(0..=3);
        let siblings = (0..sibling_count)
            .map(|_| Sibling { older: rng.gen_bool(0.5), plays_football: rng.gen_bool(0.3) })
            .collect();

        Self { father, mother, grandparents, siblings }
    }

    /// Distill the tree into the inheritance inputs for profile generation.
    pub fn parental_data(&self) -> ParentalData {
        let pedigree =
            (self.father.athletic_history.pedigree() + self.mother.athletic_history.pedigree()) / 2.0;

        ParentalData {
            father_height_cm: self.father.height_cm,
            mother_height_cm: self.mother.height_cm,
            athleticism: pedigree,
            // Build tracks pedigree loosely; robustness and temperament sit
            // nearer the population mean regardless of sporting history.
            physique: (pedigree * 0.7 + 0.15).clamp(0.0, 1.0),
            resilience: (pedigree * 0.4 + 0.3).clamp(0.0, 1.0),
            temperament: (pedigree * 0.3 + 0.35).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_tree_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let tree = FamilyTree::generate(&mut rng, "KR");
        assert_eq!(tree.grandparents.len(), 4);
        assert!(tree.siblings.len() <= 3);
        assert_eq!(tree.father.relation, "father");
        assert_eq!(tree.mother.nationality, "KR");
    }

    #[test]
    fn test_parental_data_bounded() {
        for seed in 0..40u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let data = FamilyTree::generate(&mut rng, "BR").parental_data();
            assert!((0.0..=1.0).contains(&data.athleticism));
            assert!((0.0..=1.0).contains(&data.physique));
            assert!((0.0..=1.0).contains(&data.resilience));
            assert!((0.0..=1.0).contains(&data.temperament));
        }
    }
}
