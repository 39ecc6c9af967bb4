use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::error::InstrumentError;
use crate::scoring::{ScoreResult, ScoringKind};
use crate::Instrument;

/// One row of an instrument's interpretation table: an inclusive score
/// range carrying a category label, severity tag, optional risk level, and
/// the fixed clinical recommendation.
///
/// Bounds follow the original branch order of each instrument's published
/// cutoffs; every band is inclusive on both ends.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub min: u32,
    pub max: u32,
    pub category: String,
    pub severity: Severity,
    pub risk: Option<RiskLevel>,
    pub recommendation: String,
}

impl Band {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Shorthand constructor used by the instrument definition tables.
pub fn band(
    min: u32,
    max: u32,
    category: &str,
    severity: Severity,
    risk: Option<RiskLevel>,
    recommendation: &str,
) -> Band {
    Band {
        min,
        max,
        category: category.to_string(),
        severity,
        risk,
        recommendation: recommendation.to_string(),
    }
}

/// A per-cluster interpretation, resolved when the instrument configures a
/// band table for that cluster.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterInterpretation {
    pub cluster_id: String,
    pub cluster_name: String,
    pub score: u32,
    pub category: String,
    pub severity: Severity,
    pub risk: Option<RiskLevel>,
    pub recommendation: String,
}

/// The result of matching a score result against an instrument's band table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub instrument_id: String,
    pub category: String,
    pub severity: Severity,
    pub risk: Option<RiskLevel>,
    pub recommendation: String,
    /// Item-specific alert layered on top of the band result
    /// (PHQ-9 self-harm item), independent of the total score.
    pub clinical_alert: Option<String>,
    pub clusters: Vec<ClusterInterpretation>,
}

/// The score a band table is scanned against. Exposure-profile instruments
/// band on the Criterion A count; everything else bands on the total.
fn banded_score(result: &ScoreResult) -> u32 {
    result.total
}

fn scan<'a>(bands: &'a [Band], score: u32) -> Option<&'a Band> {
    bands.iter().find(|b| b.contains(score))
}

/// Map a score result onto the instrument's interpretation table.
///
/// Deterministic: the same score always yields the same interpretation. A
/// score outside every band is a configuration error, not a user-facing
/// condition — the band tables partition each instrument's score domain.
pub fn interpret(
    instrument: &dyn Instrument,
    result: &ScoreResult,
) -> Result<Interpretation, InstrumentError> {
    let score = banded_score(result);

    // LEC-5: "no events endorsed at all" is its own outcome, distinct from
    // a zero Criterion A count with indirect exposure present.
    let matched = if instrument.scoring_kind() == ScoringKind::ExposureProfile
        && result.exposure.as_ref().is_some_and(|e| e.total_exposures == 0)
    {
        instrument.no_exposure_band()
    } else {
        scan(instrument.bands(), score)
    };

    let band = matched.ok_or_else(|| InstrumentError::UnbandedScore {
        instrument_id: instrument.id().to_string(),
        score,
    })?;

    let mut clusters = Vec::new();
    for cluster_score in &result.clusters {
        let Some(table) = instrument.cluster_bands(&cluster_score.id) else {
            continue;
        };
        let cluster_band =
            scan(table, cluster_score.score).ok_or_else(|| InstrumentError::UnbandedScore {
                instrument_id: instrument.id().to_string(),
                score: cluster_score.score,
            })?;
        clusters.push(ClusterInterpretation {
            cluster_id: cluster_score.id.clone(),
            cluster_name: cluster_score.name.clone(),
            score: cluster_score.score,
            category: cluster_band.category.clone(),
            severity: cluster_band.severity,
            risk: cluster_band.risk,
            recommendation: cluster_band.recommendation.clone(),
        });
    }

    let clinical_alert = if result.item_alert {
        instrument.alert_message().map(str::to_string)
    } else {
        None
    };

    Ok(Interpretation {
        instrument_id: instrument.id().to_string(),
        category: band.category.clone(),
        severity: band.severity,
        risk: band.risk,
        recommendation: band.recommendation.clone(),
        clinical_alert,
        clusters,
    })
}

/// Check the partition invariant: every integer score in the instrument's
/// domain matches exactly one band (no gaps, no overlaps).
pub fn verify_bands(instrument: &dyn Instrument) -> Result<(), InstrumentError> {
    for score in 0..=instrument.max_score() {
        let matches = instrument
            .bands()
            .iter()
            .filter(|b| b.contains(score))
            .count();
        match matches {
            1 => {}
            0 => {
                return Err(InstrumentError::UnbandedScore {
                    instrument_id: instrument.id().to_string(),
                    score,
                });
            }
            _ => {
                return Err(InstrumentError::BandOverlap {
                    instrument_id: instrument.id().to_string(),
                    score,
                });
            }
        }
    }
    Ok(())
}
