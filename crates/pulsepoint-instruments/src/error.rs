use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "response at item {position} does not match the {expected} scale of instrument '{instrument_id}'"
    )]
    ScaleMismatch {
        instrument_id: String,
        position: usize,
        expected: &'static str,
    },

    #[error("score {score} falls outside every configured band of instrument '{instrument_id}'")]
    UnbandedScore { instrument_id: String, score: u32 },

    #[error("score {score} matches more than one band of instrument '{instrument_id}'")]
    BandOverlap { instrument_id: String, score: u32 },

    #[error("unknown subscale '{subscale}' for tool '{tool_id}'")]
    UnknownSubscale { tool_id: String, subscale: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
