//! pulsepoint-instruments
//!
//! Trauma-screening instrument definitions and the scoring/interpretation
//! engine. Pure data and pure functions — no I/O, no shared state. Defines
//! the items, response scales, cluster groupings, and interpretation bands
//! for each supported instrument, plus the manual-entry interpreter for
//! tools administered offline.

pub mod error;
pub mod instruments;
pub mod interpret;
pub mod manual;
pub mod scoring;
pub mod session;

use interpret::Band;
use scoring::{Cluster, Item, Response, ResponseScale, ResponseSet, ScoringKind, ValidationError};

/// Trait implemented by each screening instrument.
///
/// Definitions are static tables; the engine dispatches on `scoring_kind`
/// and the band list, so an implementation carries data, not logic.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g. "pcl5", "ace").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "PCL-5 (PTSD Checklist for DSM-5)").
    fn name(&self) -> &str;

    fn scoring_kind(&self) -> ScoringKind;

    /// Ordered item list. Positions are 0-based and dense.
    fn items(&self) -> &[Item];

    fn scale(&self) -> &ResponseScale;

    /// Interpretation bands over the total-score domain, lowest first.
    fn bands(&self) -> &[Band];

    /// Named item groupings scored separately (PCL-5 clusters, IES-R
    /// subscales). Empty for most instruments.
    fn clusters(&self) -> &[Cluster] {
        &[]
    }

    /// Band table for a named cluster, where one is configured.
    fn cluster_bands(&self, _cluster_id: &str) -> Option<&[Band]> {
        None
    }

    /// Position of the gating question for gated instruments.
    fn gate_item(&self) -> Option<usize> {
        None
    }

    /// Item whose affirmative answer raises a clinical alert regardless of
    /// the total score (PHQ-9 item 9).
    fn alert_item(&self) -> Option<usize> {
        None
    }

    fn alert_message(&self) -> Option<&str> {
        None
    }

    /// Band returned when an exposure-profile instrument has no endorsed
    /// events at all.
    fn no_exposure_band(&self) -> Option<&Band> {
        None
    }

    /// Upper bound of the total-score domain.
    fn max_score(&self) -> u32 {
        let items = self.items().len() as u32;
        match self.scoring_kind() {
            ScoringKind::OrdinalSum => items * self.scale().max_value(),
            ScoringKind::AffirmativeCount | ScoringKind::ExposureProfile => items,
            // The gate question never counts toward the total.
            ScoringKind::GatedCount => items.saturating_sub(1),
        }
    }

    /// Validate a response set against this instrument's item list and
    /// scale. Boundary check only — the aggregator assumes validated input.
    fn validate_responses(&self, responses: &ResponseSet) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (position, response) in responses.iter() {
            if position >= self.items().len() {
                errors.push(ValidationError {
                    instrument_id: self.id().to_string(),
                    position,
                    message: format!(
                        "{}: item position {} is out of range (instrument has {} items)",
                        self.name(),
                        position,
                        self.items().len(),
                    ),
                });
                continue;
            }
            let ok = match (self.scale(), response) {
                (_, Response::Skipped) => true,
                (ResponseScale::Ordinal(points), Response::Rating(v)) => {
                    points.iter().any(|p| p.value == *v)
                }
                (ResponseScale::YesNo, Response::YesNo(_)) => true,
                (ResponseScale::Frequency, Response::Frequency(_)) => true,
                (ResponseScale::Exposure, Response::Exposure(_)) => true,
                _ => false,
            };
            if !ok {
                errors.push(ValidationError {
                    instrument_id: self.id().to_string(),
                    position,
                    message: format!(
                        "{}: response {:?} at item {} is not valid for the {} scale",
                        self.name(),
                        response,
                        position + 1,
                        self.scale().variant_name(),
                    ),
                });
            }
        }
        errors
    }

    /// Format a response set as structured text for inclusion in a
    /// downstream AI-insight prompt.
    fn to_structured_input(&self, responses: &ResponseSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for item in self.items() {
            if let Some(response) = responses.get(item.position) {
                output.push_str(&format!(
                    "{}. {} — {}\n",
                    item.position + 1,
                    item.prompt,
                    self.scale().label_for(response),
                ));
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::ace::Ace),
        Box::new(instruments::pcl5::Pcl5),
        Box::new(instruments::pc_ptsd5::PcPtsd5),
        Box::new(instruments::tsq::Tsq),
        Box::new(instruments::btq::Btq),
        Box::new(instruments::ctsq::Ctsq),
        Box::new(instruments::lec5::Lec5),
        Box::new(instruments::cd_risc10::CdRisc10),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::iesr::Iesr),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
