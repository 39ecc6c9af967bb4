use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::{item, tagged_item, YES_NO_SCALE};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// PC-PTSD-5: Primary Care PTSD Screen for DSM-5.
/// A trauma-exposure gating question followed by five yes/no symptom items.
/// A negative gate ends the screen with a total of zero; three or more
/// affirmative symptom items is a positive screen.
pub struct PcPtsd5;

impl Instrument for PcPtsd5 {
    fn id(&self) -> &str {
        "pc_ptsd5"
    }

    fn name(&self) -> &str {
        "PC-PTSD-5"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::GatedCount
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                tagged_item(
                    0,
                    "Have you ever in your life experienced a traumatic event?",
                    "Trauma Exposure",
                ),
                item(1, "Had nightmares about the event(s) or thought about the event(s) when you did not want to?"),
                item(2, "Tried hard not to think about the event(s) or gone out of your way to avoid situations that reminded you of the event(s)?"),
                item(3, "Been constantly on guard, watchful, or easily startled?"),
                item(4, "Felt numb or detached from people, activities, or your surroundings?"),
                item(5, "Felt guilty or unable to stop blaming yourself or others for the event(s) or any problems the event(s) may have caused?"),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        &YES_NO_SCALE
    }

    fn gate_item(&self) -> Option<usize> {
        Some(0)
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    2,
                    "Negative Screen",
                    Severity::Green,
                    Some(RiskLevel::Low),
                    "Score does not indicate probable PTSD. Continue monitoring and provide appropriate support as needed.",
                ),
                band(
                    3,
                    5,
                    "Positive Screen",
                    Severity::Red,
                    Some(RiskLevel::High),
                    "Score indicates probable PTSD. A comprehensive evaluation by a qualified professional is recommended.",
                ),
            ]
        });
        &BANDS
    }
}
