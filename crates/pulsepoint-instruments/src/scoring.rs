use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::Instrument;

/// The aggregation strategy an instrument uses.
///
/// Scoring dispatches on this tag, so adding an instrument means adding a
/// definition module, not a new branch in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringKind {
    /// Total = sum of ordinal ratings (PCL-5, PHQ-9, GAD-7, CD-RISC-10, IES-R).
    OrdinalSum,
    /// Total = count of affirmative answers (ACE, TSQ, BTQ, CTSQ).
    AffirmativeCount,
    /// Affirmative count behind a gating question; a negative gate
    /// short-circuits to zero (PC-PTSD-5).
    GatedCount,
    /// Per-category exposure counts rather than a scalar total (LEC-5).
    ExposureProfile,
}

/// One point on an ordinal response scale, e.g. `2 — "Moderately"`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScalePoint {
    pub value: u8,
    pub label: String,
}

/// The response scale an instrument declares for its items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseScale {
    Ordinal(Vec<ScalePoint>),
    YesNo,
    Frequency,
    Exposure,
}

impl ResponseScale {
    /// The largest per-item contribution to a total under this scale.
    pub fn max_value(&self) -> u32 {
        match self {
            ResponseScale::Ordinal(points) => {
                points.iter().map(|p| u32::from(p.value)).max().unwrap_or(0)
            }
            ResponseScale::YesNo | ResponseScale::Frequency | ResponseScale::Exposure => 1,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            ResponseScale::Ordinal(_) => "ordinal",
            ResponseScale::YesNo => "yes/no",
            ResponseScale::Frequency => "frequency",
            ResponseScale::Exposure => "exposure",
        }
    }

    /// Human-readable label for a response under this scale, for report and
    /// prompt output.
    pub fn label_for(&self, response: &Response) -> String {
        match (self, response) {
            (_, Response::Skipped) => "Skipped".to_string(),
            (ResponseScale::Ordinal(points), Response::Rating(v)) => points
                .iter()
                .find(|p| p.value == *v)
                .map(|p| format!("{} ({})", v, p.label))
                .unwrap_or_else(|| v.to_string()),
            (ResponseScale::YesNo, Response::YesNo(answer)) => {
                if *answer { "Yes" } else { "No" }.to_string()
            }
            (ResponseScale::Frequency, Response::Frequency(f)) => f.label().to_string(),
            (ResponseScale::Exposure, Response::Exposure(e)) => e.label().to_string(),
            _ => "—".to_string(),
        }
    }
}

/// ACE frequency scale. `Sometimes` and `Often` count as affirmative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Never,
    Rarely,
    Sometimes,
    Often,
}

impl Frequency {
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Frequency::Sometimes | Frequency::Often)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Never => "Never",
            Frequency::Rarely => "Rarely",
            Frequency::Sometimes => "Sometimes",
            Frequency::Often => "Often",
        }
    }
}

/// LEC-5 exposure categories. Direct exposure (`HappenedToMe`) and
/// `Witnessed` together form the DSM-5 Criterion A count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Exposure {
    HappenedToMe,
    Witnessed,
    LearnedAbout,
    PartOfJob,
    DoesNotApply,
}

impl Exposure {
    pub fn label(&self) -> &'static str {
        match self {
            Exposure::HappenedToMe => "Happened to me",
            Exposure::Witnessed => "Witnessed it",
            Exposure::LearnedAbout => "Learned about it",
            Exposure::PartOfJob => "Part of my job",
            Exposure::DoesNotApply => "Doesn't apply",
        }
    }
}

/// A single answer value, tagged by scale family.
///
/// `Skipped` is an explicit sentinel distinct from an absent entry, but the
/// two are treated identically by the aggregator: neither contributes to a
/// sum or count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Response {
    Rating(u8),
    YesNo(bool),
    Frequency(Frequency),
    Exposure(Exposure),
    Skipped,
}

/// A sparse mapping from item position to answer.
///
/// Positions need not be contiguous; unanswered items are simply absent.
/// Created when a session starts and discarded at session end.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    answers: BTreeMap<usize, Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, position: usize, response: Response) {
        self.answers.insert(position, response);
    }

    pub fn skip(&mut self, position: usize) {
        self.answers.insert(position, Response::Skipped);
    }

    pub fn get(&self, position: usize) -> Option<&Response> {
        self.answers.get(&position)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Response)> {
        self.answers.iter().map(|(pos, r)| (*pos, r))
    }
}

/// An item (question) within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub position: usize,
    pub prompt: String,
    /// Symptom cluster or event category tag, where the instrument has one.
    pub cluster: Option<String>,
    /// Alternate client-friendly phrasing (ACE).
    pub client_friendly: Option<String>,
}

/// A named grouping of items whose ratings are summed separately
/// (PCL-5 DSM-5 clusters, IES-R subscales).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub items: Vec<usize>,
}

/// A resolved per-cluster sum.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterScore {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub max: u32,
}

/// LEC-5 per-category exposure counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExposureCounts {
    pub happened: u32,
    pub witnessed: u32,
    pub learned: u32,
    pub job: u32,
    /// Events endorsed in any category other than "doesn't apply".
    pub total_exposures: u32,
    /// Direct + witnessed exposure (DSM-5 Criterion A).
    pub criterion_a: u32,
}

/// The aggregate produced from one response set.
///
/// For exposure-profile instruments `total` is the Criterion A count and
/// `exposure` carries the full per-category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub total: u32,
    pub max_score: u32,
    pub answered: u32,
    pub unanswered: u32,
    pub clusters: Vec<ClusterScore>,
    pub exposure: Option<ExposureCounts>,
    /// Set when the instrument's alert item was endorsed (PHQ-9 item 9).
    pub item_alert: bool,
}

/// A boundary-validation failure for a single response.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub instrument_id: String,
    pub position: usize,
    pub message: String,
}

/// Reduce a response set to a score result.
///
/// Skipped and absent items are excluded from sums and counts; partial
/// response sets are not an error. A response whose variant does not match
/// the instrument's declared scale is rejected.
pub fn compute_score(
    instrument: &dyn Instrument,
    responses: &ResponseSet,
) -> Result<ScoreResult, InstrumentError> {
    match instrument.scoring_kind() {
        ScoringKind::OrdinalSum => ordinal_sum(instrument, responses),
        ScoringKind::AffirmativeCount => affirmative_count(instrument, responses),
        ScoringKind::GatedCount => gated_count(instrument, responses),
        ScoringKind::ExposureProfile => exposure_profile(instrument, responses),
    }
}

fn mismatch(instrument: &dyn Instrument, position: usize) -> InstrumentError {
    InstrumentError::ScaleMismatch {
        instrument_id: instrument.id().to_string(),
        position,
        expected: instrument.scale().variant_name(),
    }
}

fn ordinal_sum(
    instrument: &dyn Instrument,
    responses: &ResponseSet,
) -> Result<ScoreResult, InstrumentError> {
    let mut ratings: BTreeMap<usize, u32> = BTreeMap::new();
    let mut answered = 0u32;
    let mut unanswered = 0u32;
    let mut item_alert = false;

    for item in instrument.items() {
        match responses.get(item.position) {
            Some(Response::Rating(v)) => {
                answered += 1;
                ratings.insert(item.position, u32::from(*v));
                if instrument.alert_item() == Some(item.position) && *v > 0 {
                    item_alert = true;
                }
            }
            Some(Response::Skipped) | None => unanswered += 1,
            Some(_) => return Err(mismatch(instrument, item.position)),
        }
    }

    let total: u32 = ratings.values().sum();
    let per_item_max = instrument.scale().max_value();
    let clusters = instrument
        .clusters()
        .iter()
        .map(|c| ClusterScore {
            id: c.id.clone(),
            name: c.name.clone(),
            score: c.items.iter().filter_map(|pos| ratings.get(pos)).sum(),
            max: c.items.len() as u32 * per_item_max,
        })
        .collect();

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        total,
        max_score: instrument.max_score(),
        answered,
        unanswered,
        clusters,
        exposure: None,
        item_alert,
    })
}

fn affirmative_count(
    instrument: &dyn Instrument,
    responses: &ResponseSet,
) -> Result<ScoreResult, InstrumentError> {
    let yes_no = matches!(instrument.scale(), ResponseScale::YesNo);
    let mut total = 0u32;
    let mut answered = 0u32;
    let mut unanswered = 0u32;

    for item in instrument.items() {
        match responses.get(item.position) {
            Some(Response::YesNo(answer)) if yes_no => {
                answered += 1;
                if *answer {
                    total += 1;
                }
            }
            Some(Response::Frequency(f)) if !yes_no => {
                answered += 1;
                if f.is_affirmative() {
                    total += 1;
                }
            }
            Some(Response::Skipped) | None => unanswered += 1,
            Some(_) => return Err(mismatch(instrument, item.position)),
        }
    }

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        total,
        max_score: instrument.max_score(),
        answered,
        unanswered,
        clusters: Vec::new(),
        exposure: None,
        item_alert: false,
    })
}

fn gated_count(
    instrument: &dyn Instrument,
    responses: &ResponseSet,
) -> Result<ScoreResult, InstrumentError> {
    // Without a declared gate the screen degenerates to a plain count.
    let Some(gate) = instrument.gate_item() else {
        return affirmative_count(instrument, responses);
    };

    // A negative gate ends the screen: total is zero no matter what else
    // was recorded.
    if let Some(Response::YesNo(false)) = responses.get(gate) {
        return Ok(ScoreResult {
            instrument_id: instrument.id().to_string(),
            total: 0,
            max_score: instrument.max_score(),
            answered: 1,
            unanswered: instrument.items().len() as u32 - 1,
            clusters: Vec::new(),
            exposure: None,
            item_alert: false,
        });
    }

    let mut total = 0u32;
    let mut answered = 0u32;
    let mut unanswered = 0u32;

    for item in instrument.items() {
        match responses.get(item.position) {
            Some(Response::YesNo(answer)) => {
                answered += 1;
                if *answer && item.position != gate {
                    total += 1;
                }
            }
            Some(Response::Skipped) | None => unanswered += 1,
            Some(_) => return Err(mismatch(instrument, item.position)),
        }
    }

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        total,
        max_score: instrument.max_score(),
        answered,
        unanswered,
        clusters: Vec::new(),
        exposure: None,
        item_alert: false,
    })
}

fn exposure_profile(
    instrument: &dyn Instrument,
    responses: &ResponseSet,
) -> Result<ScoreResult, InstrumentError> {
    let mut counts = ExposureCounts::default();
    let mut answered = 0u32;
    let mut unanswered = 0u32;

    for item in instrument.items() {
        match responses.get(item.position) {
            Some(Response::Exposure(e)) => {
                answered += 1;
                match e {
                    Exposure::HappenedToMe => counts.happened += 1,
                    Exposure::Witnessed => counts.witnessed += 1,
                    Exposure::LearnedAbout => counts.learned += 1,
                    Exposure::PartOfJob => counts.job += 1,
                    Exposure::DoesNotApply => {}
                }
            }
            Some(Response::Skipped) | None => unanswered += 1,
            Some(_) => return Err(mismatch(instrument, item.position)),
        }
    }

    counts.total_exposures = counts.happened + counts.witnessed + counts.learned + counts.job;
    counts.criterion_a = counts.happened + counts.witnessed;

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        total: counts.criterion_a,
        max_score: instrument.max_score(),
        answered,
        unanswered,
        clusters: Vec::new(),
        exposure: Some(counts),
        item_alert: false,
    })
}
