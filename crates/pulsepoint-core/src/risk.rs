use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Discrete clinical risk level attached to an interpretation.
///
/// Ordered so the manual-entry path can aggregate an overall level as the
/// maximum across subscales.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" | "Low" => Ok(RiskLevel::Low),
            "moderate" | "Moderate" => Ok(RiskLevel::Moderate),
            "high" | "High" => Ok(RiskLevel::High),
            "very_high" | "very-high" | "Very High" => Ok(RiskLevel::VeryHigh),
            other => Err(CoreError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Severity color tag carried by an interpretation band.
///
/// These map one-to-one onto the result-card palette the web frontend
/// renders (green for reassuring through red for alarming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Green,
    Emerald,
    Blue,
    Yellow,
    Amber,
    Orange,
    Red,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Green => "severity-green",
            Severity::Emerald => "severity-emerald",
            Severity::Blue => "severity-blue",
            Severity::Yellow => "severity-yellow",
            Severity::Amber => "severity-amber",
            Severity::Orange => "severity-orange",
            Severity::Red => "severity-red",
        }
    }
}
