//! Boundary behavior: missing fields, empty batches, ties, and bad rules.
//!
//! Absent content and non-positive boosts are deliberate design boundaries:
//! absent content matches nothing, and boosts must be finite and positive.

use super::common::{contents, make_doc, make_empty, make_unscored, scores};
use regex_booster::{BoostError, Document, RegexBooster};

#[test]
fn test_empty_batch() {
    let booster = RegexBooster::new([("anything", 2.0)]).unwrap();
    assert!(booster.run(Vec::new()).documents.is_empty());
}

#[test]
fn test_empty_rule_set_only_sorts() {
    let booster = RegexBooster::new(Vec::<(&str, f64)>::new()).unwrap();
    let output = booster.run(vec![make_doc("low", 0.1), make_doc("high", 0.9)]);
    assert_eq!(contents(&output.documents), vec!["high", "low"]);
    assert_eq!(scores(&output.documents), vec![Some(0.9), Some(0.1)]);
}

#[test]
fn test_absent_content_matches_nothing() {
    // Even a pattern that matches the empty string leaves it alone.
    let booster = RegexBooster::new([("^", 10.0)]).unwrap();
    let output = booster.run(vec![make_empty(0.5), make_doc("", 0.4)]);

    assert_eq!(output.documents[0].content.as_deref(), Some(""));
    assert_eq!(output.documents[0].score, Some(4.0));
    assert_eq!(output.documents[1].content, None);
    assert_eq!(output.documents[1].score, Some(0.5));
}

#[test]
fn test_unscored_sorts_as_zero() {
    let booster = RegexBooster::new([("python", 1.5)]).unwrap();
    let output = booster.run(vec![
        make_doc("negative", -0.2),
        make_unscored("python unscored"),
        make_doc("positive", 0.1),
        make_doc("zero", 0.0),
    ]);

    assert_eq!(
        contents(&output.documents),
        vec!["positive", "python unscored", "zero", "negative"]
    );
    assert_eq!(output.documents[1].score, None);
}

#[test]
fn test_ties_keep_input_order() {
    let booster = RegexBooster::new([("boost", 2.0)]).unwrap();
    let output = booster.run(vec![
        make_doc("a", 1.0),
        make_doc("b boost", 0.5),
        make_doc("c", 1.0),
        make_unscored("d"),
        make_doc("e", 0.0),
    ]);
    assert_eq!(contents(&output.documents), vec!["a", "b boost", "c", "d", "e"]);
}

#[test]
fn test_other_fields_untouched() {
    let mut doc = make_doc("Python", 1.0).with_id("doc-1");
    doc.meta.insert("source".to_string(), "wiki".into());
    let expected_meta = doc.meta.clone();

    let booster = RegexBooster::new([("python", 2.0)]).unwrap();
    let output = booster.run(vec![doc]);

    let Document {
        id, content, meta, ..
    } = &output.documents[0];
    assert_eq!(id, "doc-1");
    assert_eq!(content.as_deref(), Some("Python"));
    assert_eq!(meta, &expected_meta);
}

#[test]
fn test_duplicate_patterns_compound() {
    let booster = RegexBooster::new([("python", 1.5), ("python", 1.5)]).unwrap();
    assert_eq!(booster.rules().len(), 2);
    let output = booster.run(vec![make_doc("python", 1.0)]);
    assert_eq!(output.documents[0].score, Some(2.25));
}

#[test]
fn test_booster_is_reusable() {
    let booster = RegexBooster::new([("python", 2.0)]).unwrap();
    let first = booster.run(vec![make_doc("python", 1.0)]);
    let second = booster.run(vec![make_doc("python", 1.0)]);
    assert_eq!(first, second);
    assert_eq!(booster.rules().len(), 1);
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let err = RegexBooster::new([(r"\bPython\b", 1.5), (r"[unterminated", 1.2)]).unwrap_err();
    match err {
        BoostError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unterminated"),
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_zero_boost_is_rejected() {
    let err = RegexBooster::new([("python", 0.0)]).unwrap_err();
    assert!(matches!(err, BoostError::InvalidBoost { boost, .. } if boost == 0.0));
}

#[test]
fn test_negative_boost_is_rejected() {
    let err = RegexBooster::new([("python", -1.5)]).unwrap_err();
    assert!(err.to_string().contains("'python'"));
}

#[test]
fn test_unit_boost_is_a_no_op() {
    let booster = RegexBooster::new([("python", 1.0)]).unwrap();
    let output = booster.run(vec![make_doc("python", 0.3)]);
    assert_eq!(output.documents[0].score, Some(0.3));
}
