//! Life-phase pipeline orchestration
//!
//! Runs the six derivation stages strictly in order within one synchronous
//! call. All randomness flows through a single seeded ChaCha8 stream, so the
//! same seed and creation data always reproduce the same life story.

use crate::academy::life::{AcademyLifeSimulator, AcademyLifeSummary};
use crate::academy::selection::{AcademySelectionEngine, AcademySelectionSummary};
use crate::genetics::{FamilyTree, GeneticCalculator, GeneticProfile, InjuryPredispositions};
use crate::phases::childhood::{ChildhoodSimulator, ChildhoodSummary};
use crate::phases::elementary::{ElementarySimulator, ElementarySummary};
use crate::phases::pre_academy::{PreAcademySimulator, PreAcademySummary};
use crate::player::derivation::StatDerivationEngine;
use crate::player::types::{FinalStatBundle, PlayerCreationData};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Season reference year the pipeline anchors birth dates to.
const SEASON_YEAR: i32 = 2026;

/// Everything the pipeline produced for one new player. Stored verbatim on
/// the player record; the UI layer reads the nested summaries for display.
///
/// Both identity fields come out of the seeded stream, so the whole record
/// serializes identically for the same seed and creation data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifeStory {
    pub player_id: String,
    pub birth_date: NaiveDate,
    pub creation: PlayerCreationData,
    pub family_tree: FamilyTree,
    pub genetics: GeneticProfile,
    pub injury_predispositions: InjuryPredispositions,
    pub childhood: ChildhoodSummary,
    pub elementary: ElementarySummary,
    pub pre_academy: PreAcademySummary,
    pub academy_selection: AcademySelectionSummary,
    pub academy_life: AcademyLifeSummary,
    pub final_stats: FinalStatBundle,
}

#[derive(Debug)]
pub struct LifePhaseManager;

impl LifePhaseManager {
    /// Simulate a complete pre-career life for `creation` under `seed`.
    pub fn simulate(creation: &PlayerCreationData, seed: u64) -> LifeStory {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        log::info!("simulating life story for '{}' (seed {})", creation.name, seed);

        let player_id = {
            let mut bytes = [0u8; 16];
            rng.fill(&mut bytes);
            uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
        };
        let birth_date = NaiveDate::from_ymd_opt(
            SEASON_YEAR - i32::from(creation.age),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
        )
        .unwrap_or_default();

        let family_tree = FamilyTree::generate(&mut rng, &creation.nationality);
        let parental = family_tree.parental_data();
        let genetics = GeneticProfile::generate(&mut rng, Some(&parental));
        let injury_predispositions = GeneticCalculator::injury_predispositions(&genetics);

        let childhood = ChildhoodSimulator::simulate(&mut rng, &genetics, None);
        let family = childhood.environment.clone();
        let elementary = ElementarySimulator::simulate(&mut rng, &genetics, &childhood, &family);
        let pre_academy =
            PreAcademySimulator::simulate(&mut rng, &genetics, &elementary, &family);
        let academy_selection =
            AcademySelectionEngine::run(&mut rng, &pre_academy, &genetics, &family);
        let academy_life = AcademyLifeSimulator::simulate(
            &mut rng,
            &academy_selection,
            &genetics,
            &injury_predispositions,
        );

        let final_stats = StatDerivationEngine::derive(
            creation,
            &genetics,
            Some(&childhood),
            Some(&elementary),
            Some(&pre_academy),
            Some(&academy_life),
        );

        LifeStory {
            player_id,
            birth_date,
            creation: creation.clone(),
            family_tree,
            genetics,
            injury_predispositions,
            childhood,
            elementary,
            pre_academy,
            academy_selection,
            academy_life,
            final_stats,
        }
    }
}
