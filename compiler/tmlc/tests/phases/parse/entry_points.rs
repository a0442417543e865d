use pretty_assertions::assert_eq;
use tmlc::{default_config, parse, parse_with_output, Config, ErrorCode, Exercise, TokenKind, Workout};

use crate::common::row;

#[test]
fn default_config_values() {
    let config = default_config();
    assert_eq!(config.default_unit, "kg");
    assert_eq!(config.sorted_units(), vec!["count", "kg", "lbs", "min", "s"]);
    assert_eq!(config.rpe_range, (0.0, 11.0));
    assert_eq!(config, Config::default());
}

#[test]
fn squat_example() {
    let workout = parse("# Squat\n150kg x 5 @ 7\n", &default_config()).unwrap();
    assert_eq!(
        workout,
        Workout {
            comment: None,
            exercises: vec![Exercise {
                name: "Squat".into(),
                rows: vec![row(1, 5, 150.0, "kg", Some(7.0))],
                comment: None,
            }],
        }
    );
}

#[test]
fn count_example() {
    let config = Config::new("count", ["count"], (0.0, 11.0));
    let workout = parse("# Chin-up\n5 x 3\n", &config).unwrap();
    assert_eq!(workout.exercises[0].rows, vec![row(3, 5, 1.0, "count", None)]);
}

#[test]
fn sets_and_rpe_example() {
    let workout = parse("# Row\n60kg x 3 x 5 @ 6.5\n", &default_config()).unwrap();
    assert_eq!(workout.exercises[0].rows, vec![row(5, 3, 60.0, "kg", Some(6.5))]);
}

#[test]
fn empty_name_is_an_error() {
    let err = parse("# \n", &default_config()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn partial_output() {
    let output = parse_with_output("# A\n1 x 1\n# B\n1 x 1 @ 99\n", &default_config());
    assert!(output.has_error());
    assert_eq!(output.workout.exercises.len(), 1);
    assert_eq!(output.error.unwrap().code(), ErrorCode::E1003);
}

#[test]
fn lex_entry_point() {
    let tokens = tmlc::lex("# A\n");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Hash, TokenKind::Ident, TokenKind::Delimiter, TokenKind::Eof]
    );
}

#[test]
fn workout_json_shape() {
    let workout = parse("Notes\n# Squat\n100 x 5 @ 8\n90 x 5\n", &default_config()).unwrap();
    let value = serde_json::to_value(&workout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "comment": "Notes\n",
            "exercises": [{
                "name": "Squat",
                "rows": [
                    {"sets": 1, "reps": 5, "rpe": 8.0, "weight": 100.0, "unit": "kg"},
                    {"sets": 1, "reps": 5, "weight": 90.0, "unit": "kg"}
                ]
            }]
        })
    );
}
