use std::sync::LazyLock;

use pulsepoint_core::risk::Severity;

use crate::instruments::{item, likert};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder, 7-item scale.
/// Items rated 0–3 over the past two weeks, total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7 (Generalized Anxiety Disorder Scale)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::OrdinalSum
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                item(0, "Feeling nervous, anxious, or on edge"),
                item(1, "Not being able to stop or control worrying"),
                item(2, "Worrying too much about different things"),
                item(3, "Trouble relaxing"),
                item(4, "Being so restless that it's hard to sit still"),
                item(5, "Becoming easily annoyed or irritable"),
                item(6, "Feeling afraid as if something awful might happen"),
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

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    4,
                    "Minimal Anxiety",
                    Severity::Green,
                    None,
                    "No significant anxiety symptoms detected. Continue supportive monitoring as appropriate.",
                ),
                band(
                    5,
                    9,
                    "Mild Anxiety",
                    Severity::Yellow,
                    None,
                    "Possible anxiety disorder. Watchful waiting, psychoeducation, and reassessment recommended. Consider counseling or brief therapy.",
                ),
                band(
                    10,
                    14,
                    "Moderate Anxiety",
                    Severity::Orange,
                    None,
                    "Probable generalized anxiety disorder. Consider psychotherapy and/or pharmacotherapy. Further evaluation and monitoring recommended.",
                ),
                band(
                    15,
                    21,
                    "Severe Anxiety",
                    Severity::Red,
                    None,
                    "Active treatment is warranted. Consider psychotherapy (e.g., CBT) and/or pharmacotherapy. Referral to a mental health specialist is recommended.",
                ),
            ]
        });
        &BANDS
    }
}
