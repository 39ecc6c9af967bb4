use std::sync::LazyLock;

use pulsepoint_core::risk::Severity;

use crate::instruments::{item, likert};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, 9-item depression module.
/// Items rated 0–3 over the past two weeks, total 0–27. Item 9 (self-harm)
/// carries an independent clinical-alert path regardless of the total.
pub struct Phq9;

const SELF_HARM_ALERT: &str = "The individual endorsed thoughts of self-harm (Question #9). Immediate suicide risk assessment and safety planning is required.";

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9 (Patient Health Questionnaire)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::OrdinalSum
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                item(0, "Little interest or pleasure in doing things"),
                item(1, "Feeling down, depressed, or hopeless"),
                item(2, "Trouble falling or staying asleep, or sleeping too much"),
                item(3, "Feeling tired or having little energy"),
                item(4, "Poor appetite or overeating"),
                item(5, "Feeling bad about yourself - or that you are a failure or have let yourself or your family down"),
                item(6, "Trouble concentrating on things, such as reading the newspaper or watching television"),
                item(7, "Moving or speaking so slowly that other people could have noticed. Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual"),
                item(8, "Thoughts that you would be better off dead, or of hurting yourself in some way"),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        static SCALE: LazyLock<ResponseScale> = LazyLock::new(|| {
            likert(&[
                "Not at all",
                "Several days",
                "More than half the days",
                "Nearly every day",
            ])
        });
        &SCALE
    }

    fn alert_item(&self) -> Option<usize> {
        Some(8)
    }

    fn alert_message(&self) -> Option<&str> {
        Some(SELF_HARM_ALERT)
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    4,
                    "Minimal or No Depression",
                    Severity::Green,
                    None,
                    "No depression treatment indicated. Continue supportive monitoring as appropriate.",
                ),
                band(
                    5,
                    9,
                    "Mild Depression",
                    Severity::Yellow,
                    None,
                    "Watchful waiting with repeat PHQ-9 at follow-up. Consider counseling, follow-up, or pharmacotherapy depending on duration and functional impairment.",
                ),
                band(
                    10,
                    14,
                    "Moderate Depression",
                    Severity::Amber,
                    None,
                    "Treatment with psychotherapy and/or pharmacotherapy should be considered. Watchful waiting with repeat PHQ-9 at follow-up may be appropriate.",
                ),
                band(
                    15,
                    19,
                    "Moderately Severe Depression",
                    Severity::Orange,
                    None,
                    "Active treatment with psychotherapy and/or pharmacotherapy is warranted. Close monitoring and follow-up recommended.",
                ),
                band(
                    20,
                    27,
                    "Severe Depression",
                    Severity::Red,
                    None,
                    "Immediate treatment with psychotherapy and/or pharmacotherapy is strongly recommended. Consider urgent psychiatric evaluation if there are thoughts of self-harm.",
                ),
            ]
        });
        &BANDS
    }
}
