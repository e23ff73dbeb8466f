//! Debug binary: simulate one life story and print the outcome.
//!
//! Usage: simulate_career [seed] [position] [--json]

use anyhow::Result;
use career_core::academy::CareerPath;
use career_core::pipeline::LifePhaseManager;
use career_core::player::types::{CareerAmbition, PlayerCreationData, Position};
use career_core::FinalChoice;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let position = args
        .get(2)
        .map(|s| Position::from_str_or_default(s))
        .unwrap_or(Position::FWD);
    let as_json = args.iter().any(|a| a == "--json");

    let creation = PlayerCreationData {
        name: "Debug Player".to_string(),
        age: 18,
        position,
        nationality: "KR".to_string(),
        career_ambition: CareerAmbition::ProfessionalPlayer,
        starting_league: "K League 2".to_string(),
        starting_team: "Seongnam FC".to_string(),
    };

    let story = LifePhaseManager::simulate(&creation, seed);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&story)?);
        return Ok(());
    }

    println!("=== Life story (seed {}) ===", seed);
    println!(
        "height {:.0}cm, athletic potential {:.2}, ball affinity {:.1}",
        story.genetics.height.projected_cm,
        story.childhood.indicators.athletic_potential,
        story.childhood.indicators.ball_affinity
    );
    println!(
        "pre-academy: technical {:.1}, mental {:.1}, ready={}",
        story.pre_academy.readiness.technical_level,
        story.pre_academy.readiness.mental_strength,
        story.pre_academy.readiness.overall_readiness
    );
    match &story.academy_selection.final_choice {
        FinalChoice::AcademyAccepted { academy_name, tier, .. } => {
            println!("accepted by {} ({:?})", academy_name, tier);
        }
        FinalChoice::NoOffer { alternative_plan, .. } => {
            println!("no academy offer, fallback: {:?}", alternative_plan);
        }
    }
    if let CareerPath::Academy { debut, readiness_level, .. } = &story.academy_life.career_path {
        println!("debut: {:?} (readiness {:.1})", debut, readiness_level);
    }
    println!(
        "final stats: SPD {} SHO {} PAS {} DEF {} STA {} INT {} | overall {} | potential {}..{} (peak {})",
        story.final_stats.stats.speed,
        story.final_stats.stats.shooting,
        story.final_stats.stats.passing,
        story.final_stats.stats.defense,
        story.final_stats.stats.stamina,
        story.final_stats.stats.intelligence,
        story.final_stats.overall_rating,
        story.final_stats.potential.min,
        story.final_stats.potential.max,
        story.final_stats.potential.peak_age
    );

    Ok(())
}
