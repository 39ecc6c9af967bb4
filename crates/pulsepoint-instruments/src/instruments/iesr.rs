use std::sync::LazyLock;

use pulsepoint_core::risk::Severity;

use crate::instruments::{likert, tagged_item};
use crate::interpret::{band, Band};
use crate::scoring::{Cluster, Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// IES-R: Impact of Event Scale, Revised.
/// 22 items rated 0–4 with Intrusion, Avoidance, and Hyperarousal
/// subscales. Total 0–88; 33 or above suggests probable PTSD.
pub struct Iesr;

impl Instrument for Iesr {
    fn id(&self) -> &str {
        "iesr"
    }

    fn name(&self) -> &str {
        "IES-R (Impact of Event Scale - Revised)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::OrdinalSum
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                tagged_item(0, "Any reminder brought back feelings about it", "Intrusion"),
                tagged_item(1, "I had trouble staying asleep", "Hyperarousal"),
                tagged_item(2, "Other things kept making me think about it", "Intrusion"),
                tagged_item(3, "I felt irritable and angry", "Hyperarousal"),
                tagged_item(4, "I avoided letting myself get upset when I thought about it or was reminded of it", "Avoidance"),
                tagged_item(5, "I thought about it when I didn't mean to", "Intrusion"),
                tagged_item(6, "I felt as if it hadn't happened or wasn't real", "Avoidance"),
                tagged_item(7, "I stayed away from reminders about it", "Avoidance"),
                tagged_item(8, "Pictures about it popped into my mind", "Intrusion"),
                tagged_item(9, "I was jumpy and easily startled", "Hyperarousal"),
                tagged_item(10, "I tried not to think about it", "Avoidance"),
                tagged_item(11, "I was aware that I still had a lot of feelings about it, but I didn't deal with them", "Avoidance"),
                tagged_item(12, "My feelings about it were kind of numb", "Avoidance"),
                tagged_item(13, "I found myself acting or feeling like I was back at that time", "Intrusion"),
                tagged_item(14, "I had trouble falling asleep", "Hyperarousal"),
                tagged_item(15, "I had waves of strong feelings about it", "Intrusion"),
                tagged_item(16, "I tried to remove it from my memory", "Avoidance"),
                tagged_item(17, "I had trouble concentrating", "Hyperarousal"),
                tagged_item(18, "Reminders of it caused me to have physical reactions, such as sweating, trouble breathing, nausea, or a pounding heart", "Hyperarousal"),
                tagged_item(19, "I had dreams about it", "Intrusion"),
                tagged_item(20, "I felt watchful and on-guard", "Hyperarousal"),
                tagged_item(21, "I tried not to talk about it", "Avoidance"),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        static SCALE: LazyLock<ResponseScale> = LazyLock::new(|| {
            likert(&["Not at all", "A little bit", "Moderately", "Quite a bit", "Extremely"])
        });
        &SCALE
    }

    fn clusters(&self) -> &[Cluster] {
        static CLUSTERS: LazyLock<Vec<Cluster>> = LazyLock::new(|| {
            vec![
                Cluster {
                    id: "intrusion".to_string(),
                    name: "Intrusion".to_string(),
                    items: vec![0, 2, 5, 8, 13, 15, 19],
                },
                Cluster {
                    id: "avoidance".to_string(),
                    name: "Avoidance".to_string(),
                    items: vec![4, 6, 7, 10, 11, 12, 16, 21],
                },
                Cluster {
                    id: "hyperarousal".to_string(),
                    name: "Hyperarousal".to_string(),
                    items: vec![1, 3, 9, 14, 17, 18, 20],
                },
            ]
        });
        &CLUSTERS
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    11,
                    "Minimal Symptoms",
                    Severity::Green,
                    None,
                    "Minimal post-traumatic stress symptoms. Continue supportive monitoring as appropriate. Psychoeducation about trauma reactions may be helpful.",
                ),
                band(
                    12,
                    23,
                    "Mild to Moderate Symptoms",
                    Severity::Yellow,
                    None,
                    "Some post-traumatic stress symptoms detected. Psychoeducation, supportive counseling, and monitoring recommended. Consider brief intervention or trauma-informed therapy.",
                ),
                band(
                    24,
                    32,
                    "Significant PTSD Symptoms",
                    Severity::Orange,
                    None,
                    "Significant post-traumatic stress symptoms present. Further clinical evaluation recommended. Consider trauma-focused psychotherapy and/or psychiatric consultation.",
                ),
                band(
                    33,
                    88,
                    "Probable PTSD (Clinical Concern)",
                    Severity::Red,
                    None,
                    "Total score indicates probable PTSD. Comprehensive clinical evaluation and trauma-focused treatment (e.g., CPT, PE, EMDR) strongly recommended. Consider referral to a trauma specialist.",
                ),
            ]
        });
        &BANDS
    }
}
