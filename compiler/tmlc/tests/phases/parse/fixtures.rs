use pretty_assertions::assert_eq;
use tmlc::{default_config, parse, parse_with_output, Config, ErrorCode, ParseErrorKind};

use crate::common::{fixture, row};

#[test]
fn week1_fixture() {
    let workout = parse(&fixture("week1.tml"), &default_config()).unwrap();

    assert_eq!(
        workout.comment.as_deref(),
        Some("Week 1, day 1\nFelt rested, gym was quiet\n")
    );

    let names: Vec<_> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Back Squat", "Bench Press", "Pull-up", "Farmer Carry"]);

    let squat = &workout.exercises[0];
    assert_eq!(
        squat.rows,
        vec![
            row(1, 5, 60.0, "kg", Some(5.0)),
            row(3, 5, 100.0, "kg", Some(7.5)),
            row(1, 3, 110.0, "kg", Some(9.0)),
        ]
    );
    assert_eq!(squat.comment.as_deref(), Some("Depth was good on every rep\n"));

    assert_eq!(
        workout.exercises[1].rows,
        vec![row(3, 8, 80.0, "kg", None), row(1, 6, 85.0, "kg", Some(8.0))]
    );
    assert_eq!(workout.exercises[1].comment, None);

    assert_eq!(
        workout.exercises[2].rows,
        vec![
            row(3, 10, 1.0, "count", None),
            row(1, 8, 1.0, "count", Some(9.5)),
        ]
    );

    let carry = &workout.exercises[3];
    assert_eq!(carry.rows, vec![row(3, 1, 40.0, "kg", None)]);
    assert_eq!(carry.comment.as_deref(), Some("Grip gave out on the last set\n"));

    assert_eq!(workout.row_count(), 8);
}

#[test]
fn bodyweight_fixture_with_count_default() {
    let config = Config::new("count", ["count", "s"], (0.0, 10.0));
    let workout = parse(&fixture("bodyweight.tml"), &config).unwrap();
    assert_eq!(
        workout.exercises[0].rows,
        vec![row(3, 20, 1.0, "count", None), row(2, 15, 1.0, "count", Some(8.0))]
    );
    assert_eq!(workout.exercises[1].rows, vec![row(1, 3, 60.0, "s", None)]);
}

#[test]
fn bodyweight_fixture_default_config() {
    let workout = parse(&fixture("bodyweight.tml"), &default_config()).unwrap();
    assert_eq!(workout.exercises[0].rows[0], row(1, 3, 20.0, "kg", None));
}

#[test]
fn broken_fixture_keeps_nothing_from_failing_exercise() {
    let output = parse_with_output(&fixture("broken.tml"), &default_config());
    let error = output.error.unwrap();
    assert_eq!(error.code(), ErrorCode::E1002);
    assert_eq!(
        error.kind,
        ParseErrorKind::InvalidUnit {
            unit: "kgs".into()
        }
    );
    assert!(output.workout.exercises.is_empty());
}
