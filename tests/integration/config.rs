//! Building boosters from serialized init parameters.

use super::common::{contents, make_doc, make_unscored};
use regex_booster::{BoostError, BoosterConfig, RegexBooster};

const CONFIG: &str = r#"{
    "regex_boosts": {
        "\\bpython\\b": 1.5,
        "machine\\s+learning": 1.3,
        "\\bsql\\b": 0.8
    }
}"#;

#[test]
fn test_booster_from_config_json() {
    let booster = RegexBooster::from_json(CONFIG).unwrap();
    assert_eq!(booster.rules().len(), 3);

    let output = booster.run(vec![
        make_doc("SQL in practice", 1.0),
        make_doc("Python for machine learning", 1.0),
        make_unscored("Python, unscored"),
        make_doc("Go concurrency", 1.0),
    ]);

    assert_eq!(
        contents(&output.documents),
        vec![
            "Python for machine learning",
            "Go concurrency",
            "SQL in practice",
            "Python, unscored",
        ]
    );
}

#[test]
fn test_config_round_trips_through_booster() {
    let config = BoosterConfig::from_json(CONFIG).unwrap();
    let booster = RegexBooster::from_config(&config).unwrap();
    assert_eq!(booster.to_config(), config);

    let json = booster.to_config().to_json().unwrap();
    assert_eq!(BoosterConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_config_with_invalid_pattern_fails_at_construction() {
    let err = RegexBooster::from_json(r#"{"regex_boosts": {"(?<": 1.5}}"#).unwrap_err();
    assert!(matches!(err, BoostError::InvalidPattern { .. }));
}

#[test]
fn test_config_with_invalid_boost_fails_at_construction() {
    let err = RegexBooster::from_json(r#"{"regex_boosts": {"python": -2}}"#).unwrap_err();
    assert!(matches!(err, BoostError::InvalidBoost { .. }));
}

#[test]
fn test_malformed_config_json() {
    let err = RegexBooster::from_json("not json").unwrap_err();
    assert!(matches!(err, BoostError::Config(_)));
}
