use std::fmt;

#[derive(Debug)]
pub enum CareerError {
    InvalidParameter(String),
    UnsupportedSchemaVersion { expected: u8, found: u8 },
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for CareerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CareerError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            CareerError::UnsupportedSchemaVersion { expected, found } => {
                write!(f, "Unsupported schema version: expected {}, found {}", expected, found)
            }
            CareerError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CareerError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for CareerError {}

impl From<serde_json::Error> for CareerError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CareerError::DeserializationError(err.to_string())
        } else {
            CareerError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CareerError>;
