//! The `check` command: validate a workout without printing it.

use std::io::Write;

use super::{read_or_report, report_parse_error, Options, EXIT_FAILURE, EXIT_OK};

pub fn check_file(path: &str, options: &Options, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let Some(source) = read_or_report(path, err) else {
        return EXIT_FAILURE;
    };

    let output = crate::parse_with_output(&source, &options.config);
    match &output.error {
        None => {
            let _ = writeln!(
                out,
                "OK: {} exercises, {} rows",
                output.workout.exercises.len(),
                output.workout.row_count()
            );
            EXIT_OK
        }
        Some(error) => {
            report_parse_error(error, path, &source, options, err);
            if !output.workout.exercises.is_empty() {
                let _ = writeln!(
                    err,
                    "note: {} exercises parsed before the error",
                    output.workout.exercises.len()
                );
            }
            EXIT_FAILURE
        }
    }
}
