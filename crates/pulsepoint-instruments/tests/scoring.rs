//! Score aggregation and interpretation across the scoring strategies:
//! ordinal sums, affirmative counts, the gated count, and the exposure
//! profile, plus the item-level alert path.

use pulsepoint_core::risk::RiskLevel;
use pulsepoint_instruments::get_instrument;
use pulsepoint_instruments::interpret::interpret;
use pulsepoint_instruments::scoring::{
    compute_score, Exposure, Frequency, Response, ResponseSet,
};

fn ratings(values: &[u8]) -> ResponseSet {
    let mut set = ResponseSet::new();
    for (position, &value) in values.iter().enumerate() {
        set.record(position, Response::Rating(value));
    }
    set
}

#[test]
fn pcl5_sums_all_items_and_bands_the_total() {
    let instrument = get_instrument("pcl5").unwrap();
    let responses = ratings(&[2; 20]);
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 40);
    assert_eq!(score.max_score, 80);
    assert_eq!(score.answered, 20);
    assert_eq!(score.unanswered, 0);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Moderate Symptoms");
    assert_eq!(interpretation.risk, Some(RiskLevel::Moderate));
    assert!(interpretation.recommendation.contains("trauma-focused"));
}

#[test]
fn pcl5_cluster_sums_cover_all_items() {
    let instrument = get_instrument("pcl5").unwrap();
    let responses = ratings(&[1; 20]);
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.clusters.len(), 4);
    let cluster_total: u32 = score.clusters.iter().map(|c| c.score).sum();
    assert_eq!(cluster_total, score.total);
    let intrusion = score.clusters.iter().find(|c| c.id == "intrusion").unwrap();
    assert_eq!(intrusion.score, 5);
    assert_eq!(intrusion.max, 20);
}

#[test]
fn skipped_items_are_excluded_not_zeroed() {
    let instrument = get_instrument("phq9").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..9 {
        if position == 4 {
            responses.skip(position);
        } else {
            responses.record(position, Response::Rating(3));
        }
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 24);
    assert_eq!(score.answered, 8);
    assert_eq!(score.unanswered, 1);
}

#[test]
fn insertion_order_does_not_change_the_total() {
    let instrument = get_instrument("gad7").unwrap();
    let values = [3u8, 0, 2, 1, 3, 0, 2];

    let forward = ratings(&values);
    let mut reverse = ResponseSet::new();
    for position in (0..values.len()).rev() {
        reverse.record(position, Response::Rating(values[position]));
    }

    let a = compute_score(instrument.as_ref(), &forward).unwrap();
    let b = compute_score(instrument.as_ref(), &reverse).unwrap();
    assert_eq!(a.total, b.total);
    assert_eq!(a.answered, b.answered);
}

#[test]
fn ace_counts_sometimes_and_often_as_affirmative() {
    let instrument = get_instrument("ace").unwrap();
    let mut responses = ResponseSet::new();
    let answers = [
        Frequency::Often,
        Frequency::Never,
        Frequency::Sometimes,
        Frequency::Never,
        Frequency::Often,
        Frequency::Rarely,
        Frequency::Never,
        Frequency::Never,
        Frequency::Rarely,
        Frequency::Never,
    ];
    for (position, f) in answers.iter().enumerate() {
        responses.record(position, Response::Frequency(*f));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 3);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Low to Moderate ACE Score");
}

#[test]
fn tsq_counts_yes_answers() {
    let instrument = get_instrument("tsq").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..10 {
        responses.record(position, Response::YesNo(position < 6));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 6);
    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "High Risk for PTSD");
}

#[test]
fn negative_gate_short_circuits_to_zero() {
    let instrument = get_instrument("pc_ptsd5").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(0, Response::YesNo(false));
    // Symptom answers after a negative gate must not count.
    responses.record(1, Response::YesNo(true));
    responses.record(2, Response::YesNo(true));

    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 0);
    assert_eq!(score.answered, 1);
    assert_eq!(score.unanswered, 5);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Negative Screen");
}

#[test]
fn positive_gate_counts_symptom_items_only() {
    let instrument = get_instrument("pc_ptsd5").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(0, Response::YesNo(true));
    for position in 1..6 {
        responses.record(position, Response::YesNo(position <= 3));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    // The gate itself never contributes to the total.
    assert_eq!(score.total, 3);
    assert_eq!(score.max_score, 5);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Positive Screen");
    assert_eq!(interpretation.risk, Some(RiskLevel::High));
}

#[test]
fn lec5_totals_the_criterion_a_count() {
    let instrument = get_instrument("lec5").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..17 {
        let answer = match position {
            0..=2 => Exposure::HappenedToMe,
            3 | 4 => Exposure::Witnessed,
            5 => Exposure::LearnedAbout,
            _ => Exposure::DoesNotApply,
        };
        responses.record(position, Response::Exposure(answer));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    let exposure = score.exposure.as_ref().unwrap();
    assert_eq!(exposure.happened, 3);
    assert_eq!(exposure.witnessed, 2);
    assert_eq!(exposure.learned, 1);
    assert_eq!(exposure.total_exposures, 6);
    assert_eq!(exposure.criterion_a, 5);
    assert_eq!(score.total, 5);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Multiple Direct Trauma Exposures");
}

#[test]
fn lec5_with_no_endorsed_events_uses_the_no_exposure_band() {
    let instrument = get_instrument("lec5").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..17 {
        responses.record(position, Response::Exposure(Exposure::DoesNotApply));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.exposure.as_ref().unwrap().total_exposures, 0);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(
        interpretation.category,
        "No Potentially Traumatic Events Reported"
    );
}

#[test]
fn lec5_indirect_only_is_distinct_from_no_exposure() {
    let instrument = get_instrument("lec5").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(0, Response::Exposure(Exposure::LearnedAbout));
    for position in 1..17 {
        responses.record(position, Response::Exposure(Exposure::DoesNotApply));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 0);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Indirect Trauma Exposure Only");
}

#[test]
fn cd_risc10_maximum_is_high_resilience() {
    let instrument = get_instrument("cd_risc10").unwrap();
    let responses = ratings(&[4; 10]);
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 40);

    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "High Resilience");
    assert_eq!(interpretation.risk, None);
}

#[test]
fn phq9_item_nine_raises_the_self_harm_alert() {
    let instrument = get_instrument("phq9").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..9 {
        responses.record(position, Response::Rating(if position == 8 { 1 } else { 0 }));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 1);
    assert!(score.item_alert);

    // Alert fires even when the total is in the minimal band.
    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.category, "Minimal or No Depression");
    let alert = interpretation.clinical_alert.unwrap();
    assert!(alert.contains("suicide risk assessment"));
}

#[test]
fn phq9_zero_on_item_nine_raises_no_alert() {
    let instrument = get_instrument("phq9").unwrap();
    let responses = ratings(&[3, 3, 3, 3, 3, 3, 3, 3, 0]);
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    assert_eq!(score.total, 24);
    assert!(!score.item_alert);
    let interpretation = interpret(instrument.as_ref(), &score).unwrap();
    assert_eq!(interpretation.clinical_alert, None);
}

#[test]
fn out_of_range_rating_is_a_validation_error() {
    let instrument = get_instrument("gad7").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(0, Response::Rating(7));
    let errors = instrument.validate_responses(&responses);
    assert_eq!(errors.len(), 1);
}

#[test]
fn wrong_scale_variant_is_rejected_by_validation_and_scoring() {
    let instrument = get_instrument("tsq").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(0, Response::Rating(1));
    let errors = instrument.validate_responses(&responses);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("yes/no"));
    assert!(compute_score(instrument.as_ref(), &responses).is_err());
}

#[test]
fn out_of_range_position_is_a_validation_error() {
    let instrument = get_instrument("phq9").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(40, Response::Rating(1));
    let errors = instrument.validate_responses(&responses);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("out of range"));
}

#[test]
fn empty_response_set_scores_zero_with_full_unanswered_count() {
    let instrument = get_instrument("iesr").unwrap();
    let score = compute_score(instrument.as_ref(), &ResponseSet::new()).unwrap();
    assert_eq!(score.total, 0);
    assert_eq!(score.answered, 0);
    assert_eq!(score.unanswered, 22);
}

#[test]
fn structured_input_lists_answered_items_with_labels() {
    let instrument = get_instrument("gad7").unwrap();
    let mut responses = ResponseSet::new();
    responses.record(0, Response::Rating(2));
    let text = instrument.to_structured_input(&responses);
    assert!(text.starts_with("## GAD-7"));
    assert!(text.contains("1. "));
    assert!(text.contains("More than half the days"));
}

#[test]
fn unknown_instrument_lookup_returns_none() {
    assert!(get_instrument("mmpi").is_none());
}

mod cluster_bands {
    //! Per-cluster interpretation, exercised through a minimal instrument
    //! that configures a band table for one of its clusters.

    use std::sync::LazyLock;

    use pulsepoint_core::risk::{RiskLevel, Severity};
    use pulsepoint_instruments::interpret::{band, interpret, Band};
    use pulsepoint_instruments::scoring::{
        compute_score, Cluster, Item, Response, ResponseScale, ResponseSet, ScalePoint,
        ScoringKind,
    };
    use pulsepoint_instruments::Instrument;

    struct TwoClusterScale;

    static SCALE: LazyLock<ResponseScale> = LazyLock::new(|| {
        ResponseScale::Ordinal(vec![
            ScalePoint {
                value: 0,
                label: "Absent".to_string(),
            },
            ScalePoint {
                value: 1,
                label: "Present".to_string(),
            },
        ])
    });

    static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
        (0..4)
            .map(|position| Item {
                position,
                prompt: format!("Symptom {}", position + 1),
                cluster: None,
                client_friendly: None,
            })
            .collect()
    });

    static CLUSTERS: LazyLock<Vec<Cluster>> = LazyLock::new(|| {
        vec![
            Cluster {
                id: "somatic".to_string(),
                name: "Somatic".to_string(),
                items: vec![0, 1],
            },
            Cluster {
                id: "cognitive".to_string(),
                name: "Cognitive".to_string(),
                items: vec![2, 3],
            },
        ]
    });

    static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
        vec![
            band(0, 1, "Subclinical", Severity::Green, Some(RiskLevel::Low), "None."),
            band(2, 4, "Clinical", Severity::Red, Some(RiskLevel::High), "Refer."),
        ]
    });

    static SOMATIC_BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
        vec![
            band(0, 0, "Clear", Severity::Green, None, "None."),
            band(1, 2, "Elevated", Severity::Orange, None, "Assess."),
        ]
    });

    impl Instrument for TwoClusterScale {
        fn id(&self) -> &str {
            "two_cluster"
        }

        fn name(&self) -> &str {
            "Two-Cluster Scale"
        }

        fn scoring_kind(&self) -> ScoringKind {
            ScoringKind::OrdinalSum
        }

        fn items(&self) -> &[Item] {
            &ITEMS
        }

        fn scale(&self) -> &ResponseScale {
            &SCALE
        }

        fn bands(&self) -> &[Band] {
            &BANDS
        }

        fn clusters(&self) -> &[Cluster] {
            &CLUSTERS
        }

        fn cluster_bands(&self, cluster_id: &str) -> Option<&[Band]> {
            (cluster_id == "somatic").then(|| SOMATIC_BANDS.as_slice())
        }
    }

    #[test]
    fn configured_clusters_get_their_own_interpretation() {
        let instrument = TwoClusterScale;
        let mut responses = ResponseSet::new();
        responses.record(0, Response::Rating(1));
        responses.record(1, Response::Rating(1));
        responses.record(2, Response::Rating(0));
        responses.record(3, Response::Rating(0));

        let score = compute_score(&instrument, &responses).unwrap();
        let interpretation = interpret(&instrument, &score).unwrap();

        assert_eq!(interpretation.category, "Clinical");
        // Only the cluster with a configured table produces an entry.
        assert_eq!(interpretation.clusters.len(), 1);
        let somatic = &interpretation.clusters[0];
        assert_eq!(somatic.cluster_id, "somatic");
        assert_eq!(somatic.score, 2);
        assert_eq!(somatic.category, "Elevated");
    }
}
