//! Print-view rendering from both report paths: a scored in-app
//! administration and a manual-entry result.

use std::collections::BTreeMap;

use jiff::civil::date;
use pulsepoint_core::models::Client;
use pulsepoint_instruments::get_instrument;
use pulsepoint_instruments::interpret::interpret;
use pulsepoint_instruments::manual::interpret_manual;
use pulsepoint_instruments::scoring::{compute_score, Response, ResponseSet};
use pulsepoint_report::print::{render_print_view, PrintReport};
use pulsepoint_report::render::render_template;

fn client(name: &str) -> Client {
    Client {
        id: uuid::Uuid::new_v4(),
        name: name.to_string(),
        created_at: jiff::Timestamp::now(),
        updated_at: jiff::Timestamp::now(),
    }
}

#[test]
fn assessment_print_view_includes_score_result_and_items() {
    let instrument = get_instrument("phq9").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..9 {
        responses.record(position, Response::Rating(2));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    let interpretation = interpret(instrument.as_ref(), &score).unwrap();

    let report = PrintReport::from_assessment(
        instrument.as_ref(),
        &responses,
        &score,
        &interpretation,
        Some(&client("Jordan Avery")),
        date(2025, 4, 2),
        Some("Initial intake screening.".to_string()),
    );
    let html = render_print_view(&report).unwrap();

    assert!(html.contains("PHQ-9"));
    assert!(html.contains("Jordan Avery"));
    assert!(html.contains("2025-04-02"));
    assert!(html.contains("18 / 27"));
    assert!(html.contains("Moderately Severe Depression"));
    assert!(html.contains("Initial intake screening."));
    // All nine answered items appear with their scale labels.
    assert!(html.contains("More than half the days"));
}

#[test]
fn self_harm_alert_is_rendered_prominently() {
    let instrument = get_instrument("phq9").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..9 {
        responses.record(position, Response::Rating(if position == 8 { 2 } else { 0 }));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    let interpretation = interpret(instrument.as_ref(), &score).unwrap();

    let report = PrintReport::from_assessment(
        instrument.as_ref(),
        &responses,
        &score,
        &interpretation,
        None,
        date(2025, 4, 2),
        None,
    );
    let html = render_print_view(&report).unwrap();
    assert!(html.contains("class=\"alert\""));
    assert!(html.contains("suicide risk assessment"));
}

#[test]
fn cluster_table_is_rendered_for_clustered_instruments() {
    let instrument = get_instrument("pcl5").unwrap();
    let mut responses = ResponseSet::new();
    for position in 0..20 {
        responses.record(position, Response::Rating(1));
    }
    let score = compute_score(instrument.as_ref(), &responses).unwrap();
    let interpretation = interpret(instrument.as_ref(), &score).unwrap();

    let report = PrintReport::from_assessment(
        instrument.as_ref(),
        &responses,
        &score,
        &interpretation,
        None,
        date(2025, 4, 2),
        None,
    );
    let html = render_print_view(&report).unwrap();
    assert!(html.contains("Symptom Clusters"));
    assert!(html.contains("Intrusion"));
    assert!(html.contains("5 / 20"));
}

#[test]
fn manual_print_view_lists_subscales_and_recommendations() {
    let mut scores = BTreeMap::new();
    scores.insert("Suicide Ideation".to_string(), 3.0);
    scores.insert("Angry-Irritable".to_string(), 6.0);
    let result = interpret_manual("maysi2", &scores, date(2025, 2, 10), None).unwrap();

    let report = PrintReport::from_manual(&result, Some(&client("Casey Nguyen")));
    let html = render_print_view(&report).unwrap();

    assert!(html.contains("Massachusetts Youth Screening Instrument-2"));
    assert!(html.contains("Casey Nguyen"));
    assert!(html.contains("Subscale Results"));
    assert!(html.contains("Suicide Ideation"));
    assert!(html.contains("IMMEDIATE SUICIDE RISK ASSESSMENT AND SAFETY PLANNING REQUIRED"));
    assert!(html.contains("Very High"));
}

#[test]
fn custom_templates_render_with_any_context() {
    #[derive(serde::Serialize)]
    struct Context {
        instrument: String,
        total: u32,
    }
    let rendered = render_template(
        "summary.txt",
        "{{ instrument }}: {{ total }}",
        &Context {
            instrument: "GAD-7".to_string(),
            total: 12,
        },
    )
    .unwrap();
    assert_eq!(rendered, "GAD-7: 12");
}

#[test]
fn malformed_template_is_a_parse_error() {
    #[derive(serde::Serialize)]
    struct Empty {}
    let err = render_template("bad.txt", "{% if %}", &Empty {}).unwrap_err();
    assert!(matches!(
        err,
        pulsepoint_report::error::ReportError::TemplateParse(_)
    ));
}
