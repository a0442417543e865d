//! The `parse` command: parse a workout and print it.

use std::io::Write;

use tml_ir::{Row, Workout};

use super::{read_or_report, report_parse_error, Options, EXIT_FAILURE, EXIT_OK};

/// Parse a file and print a summary of the workout, or JSON with `--json`.
pub fn parse_file(path: &str, options: &Options, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let Some(source) = read_or_report(path, err) else {
        return EXIT_FAILURE;
    };

    let workout = match crate::parse(&source, &options.config) {
        Ok(workout) => workout,
        Err(error) => {
            report_parse_error(&error, path, &source, options, err);
            return EXIT_FAILURE;
        }
    };

    if options.json {
        match serde_json::to_string_pretty(&workout) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => {
                let _ = writeln!(err, "error: cannot serialize workout: {e}");
                return EXIT_FAILURE;
            }
        }
    } else {
        write_summary(&workout, out);
    }

    EXIT_OK
}

fn write_summary(workout: &Workout, out: &mut dyn Write) {
    if let Some(comment) = &workout.comment {
        for line in comment.lines() {
            let _ = writeln!(out, "// {line}");
        }
        let _ = writeln!(out);
    }

    for exercise in &workout.exercises {
        let _ = writeln!(out, "{}", exercise.name);
        for row in &exercise.rows {
            let _ = writeln!(out, "  {}", format_row(row));
        }
        if let Some(comment) = &exercise.comment {
            for line in comment.lines() {
                let _ = writeln!(out, "  // {line}");
            }
        }
    }
}

/// `3 x 5 @ 100kg, RPE 8`
fn format_row(row: &Row) -> String {
    let mut text = format!("{} x {} @ {}{}", row.sets, row.reps, row.weight, row.unit);
    if let Some(rpe) = row.rpe {
        text.push_str(&format!(", RPE {rpe}"));
    }
    text
}
