pub mod json_api;

pub use json_api::{simulate_career_json, CareerRequest, CareerResponse, SCHEMA_VERSION};
