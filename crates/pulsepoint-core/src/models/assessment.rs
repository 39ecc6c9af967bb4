use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::risk::RiskLevel;

/// A completed, persisted administration of a screening instrument.
///
/// `scores` holds the instrument-shaped score payload (total, cluster sums,
/// exposure counts) as free-form JSON so the record schema does not change
/// when an instrument is added.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub instrument_id: String,
    pub client_name: String,
    pub date_administered: jiff::civil::Date,
    pub scores: serde_json::Value,
    pub result: String,
    pub risk_level: Option<RiskLevel>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}
