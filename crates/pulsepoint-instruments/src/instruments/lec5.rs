use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::{item, EXPOSURE_SCALE};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// LEC-5: Life Events Checklist for DSM-5.
/// 17 potentially traumatic event types, each answered with an exposure
/// category. Banded on the Criterion A count (happened + witnessed); a
/// checklist with no endorsed events at all resolves to its own outcome.
pub struct Lec5;

impl Instrument for Lec5 {
    fn id(&self) -> &str {
        "lec5"
    }

    fn name(&self) -> &str {
        "Life Events Checklist for DSM-5 (LEC-5)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::ExposureProfile
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                item(0, "Natural disaster (for example, flood, hurricane, tornado, earthquake)"),
                item(1, "Fire or explosion"),
                item(2, "Transportation accident (for example, car accident, boat accident, train wreck, plane crash)"),
                item(3, "Serious accident at work, home, or during recreational activity"),
                item(4, "Exposure to toxic substance (for example, dangerous chemicals, radiation)"),
                item(5, "Physical assault (for example, being attacked, hit, slapped, kicked, beaten up)"),
                item(6, "Assault with a weapon (for example, being shot, stabbed, threatened with a knife, gun, bomb)"),
                item(7, "Sexual assault (rape, attempted rape, made to perform any type of sexual act through force or threat of harm)"),
                item(8, "Other unwanted or uncomfortable sexual experience"),
                item(9, "Combat or exposure to a war-zone (in the military or as a civilian)"),
                item(10, "Captivity (for example, being kidnapped, abducted, held hostage, prisoner of war)"),
                item(11, "Life-threatening illness or injury"),
                item(12, "Severe human suffering"),
                item(13, "Sudden violent death (for example, homicide, suicide)"),
                item(14, "Sudden accidental death"),
                item(15, "Serious injury, harm, or death you caused to someone else"),
                item(16, "Any other very stressful event or experience"),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        &EXPOSURE_SCALE
    }

    fn no_exposure_band(&self) -> Option<&Band> {
        static NO_EXPOSURE: LazyLock<Band> = LazyLock::new(|| {
            band(
                0,
                0,
                "No Potentially Traumatic Events Reported",
                Severity::Green,
                Some(RiskLevel::Low),
                "Client reported no potentially traumatic life events. Continue supportive care and monitor for any emerging concerns.",
            )
        });
        Some(&NO_EXPOSURE)
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    0,
                    "Indirect Trauma Exposure Only",
                    Severity::Blue,
                    Some(RiskLevel::Low),
                    "Client reports trauma exposure through learning about events or job-related exposure only. Consider impact of indirect exposure and provide supportive care.",
                ),
                band(
                    1,
                    2,
                    "Limited Direct Trauma Exposure",
                    Severity::Yellow,
                    Some(RiskLevel::Moderate),
                    "Client reports limited direct trauma exposure. Consider comprehensive PTSD screening (PCL-5) and trauma-informed care approaches.",
                ),
                band(
                    3,
                    17,
                    "Multiple Direct Trauma Exposures",
                    Severity::Red,
                    Some(RiskLevel::High),
                    "Client reports multiple direct trauma exposures. Strongly recommend comprehensive PTSD assessment (CAPS-5 or PCL-5) and specialized trauma treatment.",
                ),
            ]
        });
        &BANDS
    }
}
