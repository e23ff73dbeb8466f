//! Family and home environment
//!
//! Rolled once before the childhood stage (unless the caller supplies one)
//! and read by every phase up to academy selection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBracket {
    Low,
    Modest,
    Comfortable,
    High,
}

impl IncomeBracket {
    /// Financial comfort factor used by school quality and readiness gates.
    pub fn comfort(&self) -> f32 {
        match self {
            IncomeBracket::Low => 0.25,
            IncomeBracket::Modest => 0.5,
            IncomeBracket::Comfortable => 0.75,
            IncomeBracket::High => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Housing {
    Apartment,
    House,
    Farmhouse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyEnvironment {
    pub income: IncomeBracket,
    pub housing: Housing,
    pub location: Location,
    pub siblings: u8,
    /// How much time the parents invest in the child's football, 0..1.
    pub parental_involvement: f32,
    /// Grandparents/relatives nearby who can help, 0..1.
    pub extended_family_support: f32,
}

impl FamilyEnvironment {
    pub fn generate(rng: &mut ChaCha8Rng) -> Self {
        let income = Self::weighted_income(rng);
        let location = match rng.gen_range(0..10) {
            0..=4 => Location::Urban,
            5..=7 => Location::Suburban,
            _ => Location::Rural,
        };
        let housing = match (income, location) {
            (_, Location::Rural) => Housing::Farmhouse,
            (IncomeBracket::Low | IncomeBracket::Modest, _) => Housing::Apartment,
            _ => {
                if rng.gen_bool(0.5) {
                    Housing::House
                } else {
                    Housing::Apartment
                }
            }
        };

        Self {
            income,
            housing,
            location,
            siblings: rng.gen_range(0..=3),
            parental_involvement: rng.gen_range(0.2..1.0),
            extended_family_support: rng.gen::<f32>(),
        }
    }

    fn weighted_income(rng: &mut ChaCha8Rng) -> IncomeBracket {
        // 25/40/25/10 split; most families are ordinary earners.
        let roll: f32 = rng.gen();
        if roll < 0.25 {
            IncomeBracket::Low
        } else if roll < 0.65 {
            IncomeBracket::Modest
        } else if roll < 0.90 {
            IncomeBracket::Comfortable
        } else {
            IncomeBracket::High
        }
    }

    /// Composite family-support factor used in the pre-academy readiness gate.
    pub fn support_level(&self) -> f32 {
        (self.parental_involvement * 0.6 + self.income.comfort() * 0.4).clamp(0.0, 1.0)
    }
}
