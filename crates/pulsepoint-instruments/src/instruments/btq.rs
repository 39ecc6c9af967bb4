use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::{tagged_item, YES_NO_SCALE};
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// BTQ: Brief Trauma Questionnaire.
/// 10 yes/no lifetime-exposure items, each tagged with an event category.
/// The total is the number of exposure categories endorsed.
pub struct Btq;

impl Instrument for Btq {
    fn id(&self) -> &str {
        "btq"
    }

    fn name(&self) -> &str {
        "BTQ (Brief Trauma Questionnaire)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::AffirmativeCount
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                tagged_item(0, "Have you ever been in a motor vehicle accident in which someone was injured or killed, or in which you thought that you or another person might be seriously injured or killed?", "Motor Vehicle Accident"),
                tagged_item(1, "Have you ever been in any other kind of accident in which you were injured or in which you thought you might be seriously injured? (examples: train accident, building collapse, boat accident, plane crash)", "Other Accident"),
                tagged_item(2, "Have you ever experienced a natural disaster such as a tornado, hurricane, flood, or major earthquake that resulted in significant loss of your personal property, or in which you felt your life was in danger?", "Natural Disaster"),
                tagged_item(3, "Have you ever been in a situation where you thought you might be killed or seriously injured? (examples: lost at sea, lost in the wilderness, caught in a fire)", "Life-threatening Situation"),
                tagged_item(4, "Have you ever witnessed someone being killed, seriously injured, or assaulted?", "Witnessed Trauma"),
                tagged_item(5, "Have you ever been robbed or been present during a robbery—whether or not you were injured?", "Crime Victim"),
                tagged_item(6, "Have you ever been hit, slapped, kicked, or otherwise physically hurt by someone? (do not include ordinary fights between children)", "Physical Assault"),
                tagged_item(7, "Have you ever been forced to have sex against your will?", "Sexual Assault"),
                tagged_item(8, "Have you ever been touched inappropriately or forced to touch someone inappropriately against your will, but did not have sex?", "Sexual Contact"),
                tagged_item(9, "Have you ever experienced any other extraordinarily stressful situation that you haven't mentioned?", "Other Trauma"),
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
                    "No Trauma Exposure Reported",
                    Severity::Green,
                    Some(RiskLevel::Low),
                    "Client reported no lifetime trauma exposure. Continue supportive care and monitor for any emerging concerns.",
                ),
                band(
                    1,
                    2,
                    "Limited Trauma Exposure",
                    Severity::Yellow,
                    Some(RiskLevel::Moderate),
                    "Client reports limited trauma exposure. Consider trauma-informed care approaches and monitor for trauma-related symptoms.",
                ),
                band(
                    3,
                    4,
                    "Moderate Trauma Exposure",
                    Severity::Orange,
                    Some(RiskLevel::High),
                    "Client reports moderate trauma exposure across multiple categories. Consider comprehensive trauma screening (PCL-5) and trauma-informed interventions.",
                ),
                band(
                    5,
                    10,
                    "Extensive Trauma Exposure",
                    Severity::Red,
                    Some(RiskLevel::VeryHigh),
                    "Client reports extensive lifetime trauma exposure. Strongly recommend comprehensive PTSD assessment (CAPS-5 or PCL-5) and specialized trauma treatment.",
                ),
            ]
        });
        &BANDS
    }
}
