use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::{likert, tagged_item};
use crate::interpret::{band, Band};
use crate::scoring::{Cluster, Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// PCL-5: PTSD Checklist for DSM-5.
/// 20 items rated 0–4 over the past month, grouped into the four DSM-5
/// symptom clusters. Total 0–80; provisional PTSD cutoff 31–33.
pub struct Pcl5;

impl Instrument for Pcl5 {
    fn id(&self) -> &str {
        "pcl5"
    }

    fn name(&self) -> &str {
        "PCL-5 (PTSD Checklist for DSM-5)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::OrdinalSum
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                tagged_item(0, "Repeated, disturbing, and unwanted memories of the stressful experience?", "Intrusion"),
                tagged_item(1, "Repeated, disturbing dreams of the stressful experience?", "Intrusion"),
                tagged_item(2, "Suddenly feeling or acting as if the stressful experience were actually happening again (as if you were actually back there reliving it)?", "Intrusion"),
                tagged_item(3, "Feeling very upset when something reminded you of the stressful experience?", "Intrusion"),
                tagged_item(4, "Having strong physical reactions when something reminded you of the stressful experience (for example, heart pounding, trouble breathing, sweating)?", "Intrusion"),
                tagged_item(5, "Avoiding memories, thoughts, or feelings related to the stressful experience?", "Avoidance"),
                tagged_item(6, "Avoiding external reminders of the stressful experience (for example, people, places, conversations, activities, objects, or situations)?", "Avoidance"),
                tagged_item(7, "Trouble remembering important parts of the stressful experience?", "Negative Cognition"),
                tagged_item(8, "Having strong negative beliefs about yourself, other people, or the world (for example, having thoughts such as: I am bad, there is something seriously wrong with me, no one can be trusted, the world is completely dangerous)?", "Negative Cognition"),
                tagged_item(9, "Blaming yourself or someone else for the stressful experience or what happened after it?", "Negative Cognition"),
                tagged_item(10, "Having strong negative feelings such as fear, horror, anger, guilt, or shame?", "Negative Cognition"),
                tagged_item(11, "Loss of interest in activities that you used to enjoy?", "Negative Cognition"),
                tagged_item(12, "Feeling distant or cut off from other people?", "Negative Cognition"),
                tagged_item(13, "Trouble experiencing positive feelings (for example, being unable to feel happiness or have loving feelings for people close to you)?", "Negative Cognition"),
                tagged_item(14, "Irritable behavior, angry outbursts, or acting aggressively?", "Arousal"),
                tagged_item(15, "Taking too many risks or doing things that could cause you harm?", "Arousal"),
                tagged_item(16, "Being 'superalert' or watchful or on guard?", "Arousal"),
                tagged_item(17, "Feeling jumpy or easily startled?", "Arousal"),
                tagged_item(18, "Having difficulty concentrating?", "Arousal"),
                tagged_item(19, "Trouble falling or staying asleep?", "Arousal"),
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
                    items: vec![0, 1, 2, 3, 4],
                },
                Cluster {
                    id: "avoidance".to_string(),
                    name: "Avoidance".to_string(),
                    items: vec![5, 6],
                },
                Cluster {
                    id: "negative_cognition".to_string(),
                    name: "Negative Cognition".to_string(),
                    items: vec![7, 8, 9, 10, 11, 12, 13],
                },
                Cluster {
                    id: "arousal".to_string(),
                    name: "Arousal".to_string(),
                    items: vec![14, 15, 16, 17, 18, 19],
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
                    30,
                    "Below Cutoff",
                    Severity::Green,
                    Some(RiskLevel::Low),
                    "Score is below the clinical cutoff for PTSD. Continue monitoring and provide appropriate support.",
                ),
                band(
                    31,
                    44,
                    "Moderate Symptoms",
                    Severity::Yellow,
                    Some(RiskLevel::Moderate),
                    "Score suggests moderate PTSD symptoms. Consider trauma-focused interventions and comprehensive assessment.",
                ),
                band(
                    45,
                    59,
                    "Severe Symptoms",
                    Severity::Orange,
                    Some(RiskLevel::High),
                    "Score indicates severe PTSD symptoms. Strongly recommend evidence-based trauma treatment such as CPT or PE.",
                ),
                band(
                    60,
                    80,
                    "Very Severe Symptoms",
                    Severity::Red,
                    Some(RiskLevel::High),
                    "Score indicates very severe PTSD symptoms. Immediate referral to specialized trauma treatment is strongly recommended. Consider safety assessment.",
                ),
            ]
        });
        &BANDS
    }
}
