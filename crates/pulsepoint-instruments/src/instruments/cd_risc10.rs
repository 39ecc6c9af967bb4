use std::sync::LazyLock;

use pulsepoint_core::risk::Severity;

use crate::instruments::{item, likert};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// CD-RISC-10: Connor-Davidson Resilience Scale, 10-item version.
/// Strength-based rather than symptom-based: higher totals indicate greater
/// resilience. 10 items rated 0–4, total 0–40.
pub struct CdRisc10;

impl Instrument for CdRisc10 {
    fn id(&self) -> &str {
        "cd_risc10"
    }

    fn name(&self) -> &str {
        "CD-RISC-10 (Connor-Davidson Resilience Scale)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::OrdinalSum
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                item(0, "I am able to adapt when changes occur"),
                item(1, "I can deal with whatever comes my way"),
                item(2, "I try to see the humorous side of things when I am faced with problems"),
                item(3, "Having to cope with stress can make me stronger"),
                item(4, "I tend to bounce back after illness, injury, or other hardships"),
                item(5, "I believe I can achieve my goals, even if there are obstacles"),
                item(6, "Under pressure, I stay focused and think clearly"),
                item(7, "I am not easily discouraged by failure"),
                item(8, "I think of myself as a strong person when dealing with life's challenges"),
                item(9, "I am able to handle unpleasant or painful feelings like sadness, fear, and anger"),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        static SCALE: LazyLock<ResponseScale> = LazyLock::new(|| {
            likert(&[
                "Not true at all",
                "Rarely true",
                "Sometimes true",
                "Often true",
                "True nearly all the time",
            ])
        });
        &SCALE
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    17,
                    "Low Resilience",
                    Severity::Orange,
                    None,
                    "Building resilience skills may be beneficial. Consider seeking support to develop coping strategies, problem-solving skills, and stress management techniques.",
                ),
                band(
                    18,
                    24,
                    "Moderate Resilience",
                    Severity::Yellow,
                    None,
                    "You have moderate resilience. Working on developing additional coping skills and support systems could enhance your ability to manage stress and adversity.",
                ),
                band(
                    25,
                    31,
                    "Moderate-High Resilience",
                    Severity::Emerald,
                    None,
                    "You show good resilience with room for continued growth. Consider building on your existing strengths and developing additional coping strategies.",
                ),
                band(
                    32,
                    40,
                    "High Resilience",
                    Severity::Green,
                    None,
                    "You demonstrate strong resilience and adaptive coping skills. Continue to maintain these strengths and use them as resources during challenging times.",
                ),
            ]
        });
        &BANDS
    }
}
