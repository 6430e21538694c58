// File: crates/chart-core/tests/samples.rs
// Purpose: Sample construction at the ingestion boundary (negatives, non-finite, parsing, serde).

use chart_core::sample::{from_static, max_value, min_value};
use chart_core::{ingest, NegativePolicy, Sample, SampleError};

#[test]
fn negative_values_are_rejected_by_default() {
    let err = Sample::new("Mon", -5.0).unwrap_err();
    assert_eq!(err, SampleError::Negative { label: "Mon".into(), value: -5.0 });
}

#[test]
fn clamp_policy_turns_negatives_into_zero() {
    let s = Sample::with_policy("Mon", -5.0, NegativePolicy::Clamp).expect("clamped");
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.label(), "Mon");
}

#[test]
fn non_finite_values_are_always_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            Sample::with_policy("x", v, NegativePolicy::Clamp),
            Err(SampleError::NonFinite { .. })
        ));
    }
}

#[test]
fn negative_zero_is_normalized() {
    let s = Sample::new("z", -0.0).expect("zero is valid");
    assert!(s.value().is_sign_positive());
}

#[test]
fn parse_trims_and_reports_bad_cells() {
    assert_eq!(Sample::parse("a", " 12.5 ", NegativePolicy::Reject).expect("ok").value(), 12.5);
    let err = Sample::parse("a", "twelve", NegativePolicy::Reject).unwrap_err();
    assert_eq!(err, SampleError::Unparseable { label: "a".into(), raw: "twelve".into() });
    assert!(Sample::parse("a", "", NegativePolicy::Reject).is_err());
}

#[test]
fn ingest_stops_at_first_rejection() {
    let ok = ingest(vec![("a", 1.0), ("b", 2.0)], NegativePolicy::Reject).expect("valid");
    assert_eq!(ok.len(), 2);

    let err = ingest(vec![("a", 1.0), ("b", -2.0), ("c", f64::NAN)], NegativePolicy::Reject).unwrap_err();
    assert!(matches!(err, SampleError::Negative { ref label, .. } if label == "b"));
}

#[test]
fn static_tables_drop_invalid_entries() {
    let samples = from_static(&[("a", 3.0), ("bad", -1.0), ("b", 7.0)]);
    assert_eq!(samples.iter().map(Sample::label).collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(max_value(&samples), Some(7.0));
    assert_eq!(min_value(&samples), Some(3.0));
    assert_eq!(max_value(&[]), None);
}

#[test]
fn deserialization_validates_values() {
    let good: Vec<Sample> =
        serde_json::from_str(r#"[{"label":"Mon","value":210},{"label":"Tue","value":245.5}]"#).expect("parse");
    assert_eq!(good[1].value(), 245.5);

    let bad = serde_json::from_str::<Sample>(r#"{"label":"Mon","value":-1}"#);
    assert!(bad.is_err());
    assert!(bad.unwrap_err().to_string().contains("negative"));
}

#[test]
fn policy_parses_from_config_strings() {
    let p: NegativePolicy = serde_json::from_str(r#""clamp-to-zero""#).expect("alias");
    assert_eq!(p, NegativePolicy::Clamp);
    let p: NegativePolicy = serde_json::from_str(r#""reject""#).expect("reject");
    assert_eq!(p, NegativePolicy::Reject);
    assert_eq!(NegativePolicy::default(), NegativePolicy::Reject);
}
