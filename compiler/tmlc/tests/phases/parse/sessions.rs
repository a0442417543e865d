//! Multi-exercise sessions with comments between the blocks.

use pretty_assertions::assert_eq;
use tmlc::{parse, Config, Exercise, TokenKind, Workout};

use crate::common::row;

const SHORT_SESSION: &str = "
some comments about the workout
# Squat
60kg x 3 x 5 @ 6.5
60kg x 3 x 5 @ 6
good squat session

# Deadlift
60kg x 3 x 5 @ 6
60kg x 3 x 5 @ 6.4
good deadlift session

# Push-up
5 x 3
";

const SPACED_SESSION: &str = "
some comments about the workout
some comments about the workout
some comments about the workout
some comments about the workout


# Squat



60kg x 3 x 5 @ 6.5
60kg x 3 x 5 @ 6
60kg x 3 x 5
60kg x 3 @ 6



good squat session
good squat session
good squat session
good squat session



# Deadlift



60kg x 3 x 5 @ 6
60kg x 3 x 5 @ 6.4


good deadlift session
good deadlift session
good deadlift session
good deadlift session

# Push-up

5x3


";

#[test]
fn short_session_tokens() {
    use TokenKind::{At, Cross, Delimiter, Eof, Hash, Ident, Label, Number, Text};

    let row = |rpe: &'static str| {
        vec![
            (Number, "60"),
            (Label, "kg"),
            (Cross, "x"),
            (Number, "3"),
            (Cross, "x"),
            (Number, "5"),
            (At, "@"),
            (Number, rpe),
            (Delimiter, "\n"),
        ]
    };

    let mut expected = vec![
        (Delimiter, "\n"),
        (Text, "some comments about the workout\n"),
        (Hash, "#"),
        (Ident, "Squat"),
        (Delimiter, "\n"),
    ];
    expected.extend(row("6.5"));
    expected.extend(row("6"));
    expected.extend([
        (Text, "good squat session\n"),
        (Delimiter, "\n"),
        (Hash, "#"),
        (Ident, "Deadlift"),
        (Delimiter, "\n"),
    ]);
    expected.extend(row("6"));
    expected.extend(row("6.4"));
    expected.extend([
        (Text, "good deadlift session\n"),
        (Delimiter, "\n"),
        (Hash, "#"),
        (Ident, "Push-up"),
        (Delimiter, "\n"),
        (Number, "5"),
        (Cross, "x"),
        (Number, "3"),
        (Delimiter, "\n"),
        (Eof, ""),
    ]);

    let tokens = tmlc::lex(SHORT_SESSION);
    let actual: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.literal.as_str()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn spaced_session_with_count_default() {
    let config = Config::new("count", ["kg", "count"], (0.0, 11.0));
    let workout = parse(SPACED_SESSION, &config).unwrap();

    let comment = "some comments about the workout\n".repeat(4);
    let squat_comment = "good squat session\n".repeat(4);
    let deadlift_comment = "good deadlift session\n".repeat(4);

    assert_eq!(
        workout,
        Workout {
            comment: Some(comment),
            exercises: vec![
                Exercise {
                    name: "Squat".into(),
                    rows: vec![
                        row(5, 3, 60.0, "kg", Some(6.5)),
                        row(5, 3, 60.0, "kg", Some(6.0)),
                        row(5, 3, 60.0, "kg", None),
                        row(1, 3, 60.0, "kg", Some(6.0)),
                    ],
                    comment: Some(squat_comment),
                },
                Exercise {
                    name: "Deadlift".into(),
                    rows: vec![
                        row(5, 3, 60.0, "kg", Some(6.0)),
                        row(5, 3, 60.0, "kg", Some(6.4)),
                    ],
                    comment: Some(deadlift_comment),
                },
                Exercise {
                    name: "Push-up".into(),
                    rows: vec![row(3, 5, 1.0, "count", None)],
                    comment: None,
                },
            ],
        }
    );
}

#[test]
fn short_session_with_default_config() {
    let workout = parse(SHORT_SESSION, &tmlc::default_config()).unwrap();
    assert_eq!(workout.exercises.len(), 3);
    assert_eq!(workout.exercises[2].rows, vec![row(1, 3, 5.0, "kg", None)]);
    assert_eq!(
        workout.exercises[0].comment.as_deref(),
        Some("good squat session\n")
    );
}
