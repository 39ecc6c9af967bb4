use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::{item, YES_NO_SCALE};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// TSQ: Trauma Screening Questionnaire.
/// 10 yes/no items about the past week; six or more affirmative answers
/// indicates high risk for PTSD.
pub struct Tsq;

impl Instrument for Tsq {
    fn id(&self) -> &str {
        "tsq"
    }

    fn name(&self) -> &str {
        "TSQ (Trauma Screening Questionnaire)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::AffirmativeCount
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                item(0, "Upsetting thoughts or memories about the event that have come into your mind against your will"),
                item(1, "Upsetting dreams about the event"),
                item(2, "Acting or feeling as though the event was happening again"),
                item(3, "Feeling upset by reminders of the event"),
                item(4, "Bodily reactions (such as fast heartbeat, sweating, dizziness) when reminded of the event"),
                item(5, "Difficulty falling or staying asleep"),
                item(6, "Irritability or outbursts of anger"),
                item(7, "Difficulty concentrating"),
                item(8, "Heightened awareness of potential dangers to yourself and others"),
                item(9, "Being jumpy or being startled at something unexpected"),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        &YES_NO_SCALE
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    5,
                    "Low Risk for PTSD",
                    Severity::Green,
                    Some(RiskLevel::Low),
                    "Score indicates low risk for PTSD. Continue monitoring and provide appropriate support as needed.",
                ),
                band(
                    6,
                    10,
                    "High Risk for PTSD",
                    Severity::Red,
                    Some(RiskLevel::High),
                    "Score indicates high risk for PTSD. A comprehensive evaluation by a qualified professional is strongly recommended.",
                ),
            ]
        });
        &BANDS
    }
}
