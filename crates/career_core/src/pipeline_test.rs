//! End-to-end pipeline tests
//!
//! Scenario tests force a controlled genetic baseline and family
//! environment, then run the stages directly; the property tests sweep the
//! full pipeline across seeds.

use crate::academy::life::AcademyLifeSimulator;
use crate::academy::selection::{AcademySelectionEngine, FinalChoice, SelectionState};
use crate::academy::AcademyTier;
use crate::genetics::{GeneticCalculator, GeneticProfile};
use crate::phases::childhood::ChildhoodSimulator;
use crate::phases::elementary::ElementarySimulator;
use crate::phases::environment::{FamilyEnvironment, Housing, IncomeBracket, Location};
use crate::phases::pre_academy::PreAcademySimulator;
use crate::pipeline::LifePhaseManager;
use crate::player::types::{CareerAmbition, PlayerCreationData, Position};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn creation(position: Position, age: u8) -> PlayerCreationData {
    PlayerCreationData {
        name: "Scenario Player".to_string(),
        age,
        position,
        nationality: "KR".to_string(),
        career_ambition: CareerAmbition::WorldClassStar,
        starting_league: "K League 2".to_string(),
        starting_team: "Seongnam FC".to_string(),
    }
}

fn supportive_family() -> FamilyEnvironment {
    FamilyEnvironment {
        income: IncomeBracket::High,
        housing: Housing::House,
        location: Location::Urban,
        siblings: 1,
        parental_involvement: 0.9,
        extended_family_support: 0.8,
    }
}

fn struggling_family() -> FamilyEnvironment {
    FamilyEnvironment {
        income: IncomeBracket::Low,
        housing: Housing::Apartment,
        location: Location::Urban,
        siblings: 2,
        parental_involvement: 0.3,
        extended_family_support: 0.2,
    }
}

/// Run childhood through academy life for a fixed genetic baseline.
fn run_stages(
    seed: u64,
    trait_value: f32,
    family: FamilyEnvironment,
) -> (
    crate::phases::childhood::ChildhoodSummary,
    crate::phases::elementary::ElementarySummary,
    crate::phases::pre_academy::PreAcademySummary,
    crate::academy::selection::AcademySelectionSummary,
    crate::academy::life::AcademyLifeSummary,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let genetics = GeneticProfile::uniform(trait_value);
    let predispositions = GeneticCalculator::injury_predispositions(&genetics);

    let childhood = ChildhoodSimulator::simulate(&mut rng, &genetics, Some(family.clone()));
    let elementary = ElementarySimulator::simulate(&mut rng, &genetics, &childhood, &family);
    let pre_academy = PreAcademySimulator::simulate(&mut rng, &genetics, &elementary, &family);
    let selection = AcademySelectionEngine::run(&mut rng, &pre_academy, &genetics, &family);
    let life =
        AcademyLifeSimulator::simulate(&mut rng, &selection, &genetics, &predispositions);

    (childhood, elementary, pre_academy, selection, life)
}

#[test]
fn test_gifted_prospect_lands_at_the_elite_academy() {
    // Flat 0.9 genetics with a supportive, well-off family: every gate on
    // the elite route holds across seeds (the formulas bound the noise).
    for seed in 0..25u64 {
        let (childhood, _, pre_academy, selection, _) =
            run_stages(seed, 0.9, supportive_family());

        assert!(childhood.indicators.athletic_potential > 0.8);
        assert!(pre_academy.readiness.overall_readiness);

        let elite = &selection.academies[0];
        assert_eq!(elite.tier, AcademyTier::Elite);
        assert!(elite.available);

        match &selection.final_choice {
            FinalChoice::AcademyAccepted { tier, .. } => {
                assert_eq!(*tier, AcademyTier::Elite);
            }
            FinalChoice::NoOffer { .. } => panic!("elite prospect must receive an offer"),
        }
        assert_eq!(selection.state, SelectionState::AcademyAccepted);
    }
}

#[test]
fn test_weak_prospect_gets_no_offer() {
    for seed in 0..25u64 {
        let (_, _, _, selection, life) = run_stages(seed, 0.2, struggling_family());

        assert!(selection.academies.iter().all(|a| !a.available));
        assert!(selection.applications.is_empty());
        assert!(selection.trials.is_empty());
        assert_eq!(selection.state, SelectionState::NoOffer);

        match &selection.final_choice {
            FinalChoice::NoOffer { continue_local_development, .. } => {
                assert!(*continue_local_development);
            }
            FinalChoice::AcademyAccepted { .. } => panic!("no academy should be reachable"),
        }

        // The fallback path still produces a complete career record.
        match &life.career_path {
            crate::academy::life::CareerPath::Alternative(_) => {}
            crate::academy::life::CareerPath::Academy { .. } => {
                panic!("rejected player cannot live academy years")
            }
        }
    }
}

#[test]
fn test_same_seed_reproduces_the_same_life() {
    let data = creation(Position::MID, 18);
    let a = LifePhaseManager::simulate(&data, 20_260_830);
    let b = LifePhaseManager::simulate(&data, 20_260_830);

    // Identity included: player_id and birth_date come out of the seeded
    // stream, so the serialized records must be byte-for-byte equal.
    assert_eq!(a.player_id, b.player_id);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_different_seeds_diverge() {
    let data = creation(Position::MID, 18);
    let a = LifePhaseManager::simulate(&data, 1);
    let b = LifePhaseManager::simulate(&data, 2);
    assert_ne!(a.genetics, b.genetics);
}

#[test]
fn test_life_story_serializes() {
    let story = LifePhaseManager::simulate(&creation(Position::GK, 17), 99);
    let json = serde_json::to_string(&story).unwrap();
    let back: crate::pipeline::LifeStory = serde_json::from_str(&json).unwrap();
    assert_eq!(back.final_stats, story.final_stats);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_final_stats_clamped(seed in any::<u64>(), age in 15u8..36) {
        let story = LifePhaseManager::simulate(&creation(Position::FWD, age), seed);
        for value in story.final_stats.stats.as_array() {
            prop_assert!((30..=85).contains(&value));
        }
    }

    #[test]
    fn prop_potential_range_ordered(seed in any::<u64>()) {
        let story = LifePhaseManager::simulate(&creation(Position::DEF, 18), seed);
        let p = story.final_stats.potential;
        prop_assert!(p.min >= 65);
        prop_assert!(p.max <= 99);
        prop_assert!(p.min <= p.max);
        prop_assert!((26..=32).contains(&p.peak_age));
    }

    #[test]
    fn prop_overall_rating_rederivable(seed in any::<u64>()) {
        let story = LifePhaseManager::simulate(&creation(Position::MID, 18), seed);
        prop_assert_eq!(
            story.final_stats.overall_rating,
            story.final_stats.stats.mean_floor()
        );
    }

    #[test]
    fn prop_traits_and_scout_interest_bounded(seed in any::<u64>()) {
        let story = LifePhaseManager::simulate(&creation(Position::MID, 18), seed);
        for value in story.genetics.all_traits() {
            // Pipeline genetics always inherit from the family tree.
            prop_assert!((0.1..=1.0).contains(&value));
        }
        prop_assert!(story.pre_academy.middle.scout_interest <= 0.8);
    }

    #[test]
    fn prop_terminal_state_matches_choice(seed in any::<u64>()) {
        let story = LifePhaseManager::simulate(&creation(Position::FWD, 18), seed);
        match story.academy_selection.final_choice {
            FinalChoice::AcademyAccepted { .. } => {
                prop_assert_eq!(story.academy_selection.state, SelectionState::AcademyAccepted);
            }
            FinalChoice::NoOffer { .. } => {
                prop_assert_eq!(story.academy_selection.state, SelectionState::NoOffer);
            }
        }
    }
}
