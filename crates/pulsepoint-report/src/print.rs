//! Printable assessment reports.
//!
//! Flattens a scored assessment (or a manual entry result) into a template
//! context and renders the built-in print view. The same context type
//! serves both paths; sections with no data are omitted by the template.

use serde::Serialize;

use pulsepoint_core::models::Client;
use pulsepoint_instruments::interpret::Interpretation;
use pulsepoint_instruments::manual::ManualAssessmentResult;
use pulsepoint_instruments::scoring::{ResponseSet, ScoreResult};
use pulsepoint_instruments::Instrument;

use crate::error::ReportError;
use crate::render::render_template;

const PRINT_VIEW: &str = include_str!("../templates/print_view.html.tera");
const PRINT_VIEW_NAME: &str = "print_view.html";

/// One answered (or skipped) question, with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub number: usize,
    pub prompt: String,
    pub answer: String,
}

/// One symptom-cluster row. `category` is present only when the instrument
/// configures a band table for the cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterRow {
    pub name: String,
    pub score: u32,
    pub max: u32,
    pub category: Option<String>,
}

/// One manually entered subscale, with its cutoff interpretation.
#[derive(Debug, Clone, Serialize)]
pub struct SubscaleRow {
    pub name: String,
    pub score: f64,
    pub category: String,
    pub description: String,
    pub risk: String,
    pub clinical_actions: Vec<String>,
}

/// Flat template context for the print view.
#[derive(Debug, Clone, Serialize)]
pub struct PrintReport {
    pub instrument_id: String,
    pub instrument_name: String,
    pub client_name: Option<String>,
    pub administration_date: String,
    pub score: Option<u32>,
    pub max_score: Option<u32>,
    pub total_score: Option<f64>,
    pub category: String,
    pub severity_class: String,
    pub risk: Option<String>,
    pub recommendation: Option<String>,
    pub recommendations: Vec<String>,
    pub clinical_alert: Option<String>,
    pub clusters: Vec<ClusterRow>,
    pub subscales: Vec<SubscaleRow>,
    pub items: Vec<ItemRow>,
    pub notes: Option<String>,
}

impl PrintReport {
    /// Build a report context from an in-app administration.
    pub fn from_assessment(
        instrument: &dyn Instrument,
        responses: &ResponseSet,
        score: &ScoreResult,
        interpretation: &Interpretation,
        client: Option<&Client>,
        administration_date: jiff::civil::Date,
        notes: Option<String>,
    ) -> Self {
        let clusters = score
            .clusters
            .iter()
            .map(|c| ClusterRow {
                name: c.name.clone(),
                score: c.score,
                max: c.max,
                category: interpretation
                    .clusters
                    .iter()
                    .find(|ci| ci.cluster_id == c.id)
                    .map(|ci| ci.category.clone()),
            })
            .collect();

        let items = instrument
            .items()
            .iter()
            .filter_map(|item| {
                responses.get(item.position).map(|response| ItemRow {
                    number: item.position + 1,
                    prompt: item.prompt.clone(),
                    answer: instrument.scale().label_for(response),
                })
            })
            .collect();

        Self {
            instrument_id: instrument.id().to_string(),
            instrument_name: instrument.name().to_string(),
            client_name: client.map(|c| c.name.clone()),
            administration_date: administration_date.to_string(),
            score: Some(score.total),
            max_score: Some(score.max_score),
            total_score: None,
            category: interpretation.category.clone(),
            severity_class: interpretation.severity.css_class().to_string(),
            risk: interpretation.risk.map(|r| r.label().to_string()),
            recommendation: Some(interpretation.recommendation.clone()),
            recommendations: Vec::new(),
            clinical_alert: interpretation.clinical_alert.clone(),
            clusters,
            subscales: Vec::new(),
            items,
            notes,
        }
    }

    /// Build a report context from a manual-entry result.
    pub fn from_manual(result: &ManualAssessmentResult, client: Option<&Client>) -> Self {
        let subscales = result
            .scores
            .iter()
            .filter_map(|(name, &value)| {
                result.interpretations.get(name).map(|i| SubscaleRow {
                    name: name.clone(),
                    score: value,
                    category: i.category.label().to_string(),
                    description: i.description.clone(),
                    risk: i.risk.label().to_string(),
                    clinical_actions: i.clinical_actions.clone(),
                })
            })
            .collect();

        Self {
            instrument_id: result.tool_id.clone(),
            instrument_name: result.tool_name.clone(),
            client_name: client.map(|c| c.name.clone()),
            administration_date: result.administration_date.to_string(),
            score: None,
            max_score: None,
            total_score: result.total_score,
            category: result.overall_risk.label().to_string(),
            severity_class: String::new(),
            risk: Some(result.overall_risk.label().to_string()),
            recommendation: None,
            recommendations: result.recommendations.clone(),
            clinical_alert: None,
            clusters: Vec::new(),
            subscales,
            items: Vec::new(),
            notes: result.clinical_notes.clone(),
        }
    }
}

/// Render the built-in print view for a report context.
pub fn render_print_view(report: &PrintReport) -> Result<String, ReportError> {
    tracing::debug!(
        instrument_id = %report.instrument_id,
        "rendering print view"
    );
    render_template(PRINT_VIEW_NAME, PRINT_VIEW, report)
}
