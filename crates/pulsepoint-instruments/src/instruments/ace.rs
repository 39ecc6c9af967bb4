use std::sync::LazyLock;

use pulsepoint_core::risk::{RiskLevel, Severity};

use crate::instruments::FREQUENCY_SCALE;
use crate::interpret::{band, Band};
use crate::scoring::{Item, ResponseScale, ScoringKind};
use crate::Instrument;

/// ACE: Adverse Childhood Experiences questionnaire.
/// 10 items on a Never/Rarely/Sometimes/Often scale; "Sometimes" and
/// "Often" each score one point. Total 0–10.
pub struct Ace;

fn ace_item(position: usize, clinical: &str, client_friendly: &str, category: &str) -> Item {
    Item {
        position,
        prompt: clinical.to_string(),
        cluster: Some(category.to_string()),
        client_friendly: Some(client_friendly.to_string()),
    }
}

impl Instrument for Ace {
    fn id(&self) -> &str {
        "ace"
    }

    fn name(&self) -> &str {
        "ACE (Adverse Childhood Experiences)"
    }

    fn scoring_kind(&self) -> ScoringKind {
        ScoringKind::AffirmativeCount
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            vec![
                ace_item(
                    0,
                    "Did a parent or other adult in the household often or very often swear at you, insult you, put you down, or humiliate you? Or act in a way that made you afraid that you might be physically hurt?",
                    "When you were growing up, did adults in your home often say hurtful things to you or make you feel bad about yourself?",
                    "Emotional Abuse",
                ),
                ace_item(
                    1,
                    "Did a parent or other adult in the household often or very often push, grab, slap, or throw something at you? Or ever hit you so hard that you had marks or were injured?",
                    "When you were a child, did adults in your home sometimes hurt you physically, like hitting or pushing you?",
                    "Physical Abuse",
                ),
                ace_item(
                    2,
                    "Did an adult or person at least 5 years older than you ever touch or fondle you or have you touch their body in a sexual way? Or attempt or actually have oral, anal, or vaginal intercourse with you?",
                    "Did an older person ever touch you in a way that made you uncomfortable or ask you to touch them inappropriately?",
                    "Sexual Abuse",
                ),
                ace_item(
                    3,
                    "Did you often or very often feel that no one in your family loved you or thought you were important or special? Or that your family didn't look out for each other, feel close to each other, or support each other?",
                    "Growing up, did you often feel like no one in your family really cared about you or showed you love?",
                    "Emotional Neglect",
                ),
                ace_item(
                    4,
                    "Did you often or very often feel that you didn't have enough to eat, had to wear dirty clothes, and had no one to protect you? Or that your parents were too drunk or high to take care of you or take you to the doctor if you needed it?",
                    "When you were young, did you often not have enough food, clean clothes, or someone to take care of you when you were sick?",
                    "Physical Neglect",
                ),
                ace_item(
                    5,
                    "Were your parents ever separated or divorced?",
                    "Did your parents separate or divorce while you were growing up?",
                    "Household Dysfunction",
                ),
                ace_item(
                    6,
                    "Was your mother or stepmother often or very often pushed, grabbed, slapped, or had something thrown at her? Or sometimes, often, or very often kicked, bitten, hit with a fist, or hit with something hard? Or ever repeatedly hit over at least a few minutes or threatened with a gun or knife?",
                    "Did you see violence in your home, like one parent hurting another?",
                    "Household Dysfunction",
                ),
                ace_item(
                    7,
                    "Did you live with anyone who was a problem drinker or alcoholic, or who used street drugs?",
                    "Did anyone in your home have problems with drinking alcohol or using drugs?",
                    "Household Dysfunction",
                ),
                ace_item(
                    8,
                    "Was a household member depressed or mentally ill, or did a household member attempt suicide?",
                    "Did anyone in your home struggle with depression, mental illness, or try to hurt themselves?",
                    "Household Dysfunction",
                ),
                ace_item(
                    9,
                    "Did a household member go to prison?",
                    "Did anyone in your home go to jail or prison?",
                    "Household Dysfunction",
                ),
            ]
        });
        &ITEMS
    }

    fn scale(&self) -> &ResponseScale {
        &FREQUENCY_SCALE
    }

    fn bands(&self) -> &[Band] {
        static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
            vec![
                band(
                    0,
                    0,
                    "No ACEs Reported",
                    Severity::Green,
                    Some(RiskLevel::Low),
                    "Client reported no adverse childhood experiences. Continue to provide supportive care and monitor for any emerging concerns.",
                ),
                band(
                    1,
                    3,
                    "Low to Moderate ACE Score",
                    Severity::Yellow,
                    Some(RiskLevel::Moderate),
                    "Client has some adverse childhood experiences. Consider trauma-informed care approaches and monitor for related health or mental health concerns.",
                ),
                band(
                    4,
                    6,
                    "High ACE Score",
                    Severity::Orange,
                    Some(RiskLevel::High),
                    "Client has significant adverse childhood experiences. Strongly recommend trauma-informed interventions, mental health support, and comprehensive care coordination.",
                ),
                band(
                    7,
                    10,
                    "Very High ACE Score",
                    Severity::Red,
                    Some(RiskLevel::High),
                    "Client has extensive adverse childhood experiences. Immediate trauma-informed care, mental health intervention, and comprehensive support services are strongly recommended. Consider referral to specialized trauma treatment.",
                ),
            ]
        });
        &BANDS
    }
}
