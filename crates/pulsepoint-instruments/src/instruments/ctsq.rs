use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::{item, YES_NO_SCALE};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// CTSQ: Child Trauma Screening Questionnaire.
/// 10 yes/no items phrased for children and adolescents; five or more
/// affirmative answers meets the probable-trauma-symptom cutoff.
pub struct Ctsq;

impl Instrument for Ctsq {
    fn id(&self) -> &str {
        "ctsq"
    }

    fn name(&self) -> &str {
        "CTSQ (Child Trauma Screening Questionnaire)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::AffirmativeCount
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                item(0, "Have you had nightmares or dreams about something scary that happened to you?"),
                item(1, "When something reminds you of what happened, do you get very scared, sad, or upset?"),
                item(2, "Do you try not to think about what happened?"),
                item(3, "Do you stay away from places, people, or things that remind you of what happened?"),
                item(4, "Do you feel alone even when you are with other people?"),
                item(5, "Do you have trouble feeling happy?"),
                item(6, "Do you feel like you have to be extra careful about staying safe?"),
                item(7, "Are you easily startled or jumpy?"),
                item(8, "Do you have trouble paying attention at school or when doing homework?"),
                item(9, "Do you have trouble falling asleep or staying asleep?"),
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
                    0,
                    "No Trauma Symptoms Reported",
                    Severity::Green,
                    Some(RiskLevel::Low),
                    "Child/adolescent reports no significant trauma symptoms. Continue supportive care and monitor for any emerging concerns.",
                ),
                band(
                    1,
                    2,
                    "Minimal Trauma Symptoms",
                    Severity::Blue,
                    Some(RiskLevel::Low),
                    "Child/adolescent reports minimal trauma symptoms. Consider trauma-informed care approaches and continued monitoring.",
                ),
                band(
                    3,
                    4,
                    "Moderate Trauma Symptoms",
                    Severity::Yellow,
                    Some(RiskLevel::Moderate),
                    "Child/adolescent reports moderate trauma symptoms. Consider more detailed trauma assessment and trauma-informed interventions.",
                ),
                band(
                    5,
                    10,
                    "Significant Trauma Symptoms",
                    Severity::Red,
                    Some(RiskLevel::High),
                    "Child/adolescent reports significant trauma symptoms (cutoff met). Strongly recommend comprehensive trauma evaluation and specialized treatment for children.",
                ),
            ]
        });
        &BANDS
    }
}
