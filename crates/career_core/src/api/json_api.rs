use serde::{Deserialize, Serialize};

use crate::error::{CareerError, Result};
use crate::pipeline::{LifePhaseManager, LifeStory};
use crate::player::types::PlayerCreationData;

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub player: PlayerCreationData,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub life_story: LifeStory,
}

/// Simulate a complete pre-career life from a JSON request.
///
/// The only error paths are malformed JSON and a schema-version mismatch;
/// every simulation outcome (including "no academy offer") is a success.
pub fn simulate_career_json(request_json: &str) -> Result<String> {
    let request: CareerRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CareerError::UnsupportedSchemaVersion {
            expected: SCHEMA_VERSION,
            found: request.schema_version,
        });
    }
    if request.player.name.trim().is_empty() {
        return Err(CareerError::InvalidParameter("player name must not be empty".to_string()));
    }

    let life_story = LifePhaseManager::simulate(&request.player, request.seed);
    let response =
        CareerResponse { schema_version: SCHEMA_VERSION, seed: request.seed, life_story };
    Ok(serde_json::to_string(&response)?)
}
