//! Command handler tests: run `tml` commands against fixture files.

use pretty_assertions::assert_eq;
use tmlc::commands::{
    check_file, lex_file, parse_args, parse_file, ErrorFormat, Options, EXIT_FAILURE, EXIT_OK,
};

use crate::common::fixture_path;

struct Run {
    code: i32,
    out: String,
    err: String,
}

fn run(f: impl FnOnce(&mut Vec<u8>, &mut Vec<u8>) -> i32) -> Run {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = f(&mut out, &mut err);
    Run {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn options(flags: &[&str]) -> Options {
    let args: Vec<String> = flags.iter().map(|s| (*s).to_owned()).collect();
    parse_args(&args).unwrap().options
}

#[test]
fn parse_prints_summary() {
    let path = fixture_path("bodyweight.tml");
    let opts = options(&["--default-unit=count", "--units=count,s"]);
    let result = run(|out, err| parse_file(&path, &opts, out, err));
    assert_eq!(result.code, EXIT_OK);
    assert_eq!(
        result.out,
        "Push-up\n  3 x 20 @ 1count\n  2 x 15 @ 1count, RPE 8\nPlank\n  1 x 3 @ 60s\n"
    );
    assert!(result.err.is_empty());
}

#[test]
fn parse_summary_includes_comments() {
    let path = fixture_path("week1.tml");
    let result = run(|out, err| parse_file(&path, &Options::default(), out, err));
    assert_eq!(result.code, EXIT_OK);
    assert!(result.out.starts_with("// Week 1, day 1\n// Felt rested, gym was quiet\n\nBack Squat\n"));
    assert!(result.out.contains("  3 x 5 @ 100kg, RPE 7.5\n"));
    assert!(result.out.contains("  // Grip gave out on the last set\n"));
}

#[test]
fn parse_json_output() {
    let path = fixture_path("week1.tml");
    let opts = options(&["--json"]);
    let result = run(|out, err| parse_file(&path, &opts, out, err));
    assert_eq!(result.code, EXIT_OK);
    let value: serde_json::Value = serde_json::from_str(&result.out).unwrap();
    assert_eq!(value["exercises"].as_array().unwrap().len(), 4);
    assert_eq!(value["exercises"][2]["rows"][0]["unit"], "count");
}

#[test]
fn parse_reports_diagnostic() {
    let path = fixture_path("broken.tml");
    let result = run(|out, err| parse_file(&path, &Options::default(), out, err));
    assert_eq!(result.code, EXIT_FAILURE);
    assert!(result.out.is_empty());
    assert!(result.err.starts_with("error[E1002]: invalid unit `kgs`\n"));
    assert!(result.err.contains("broken.tml:3:4\n"));
    assert!(result.err.contains("3 | 180kgs x 3\n"));
    assert!(result.err.contains("  = note: valid units are: count, kg, lbs, min, s\n"));
}

#[test]
fn check_ok_and_failure() {
    let path = fixture_path("week1.tml");
    let result = run(|out, err| check_file(&path, &Options::default(), out, err));
    assert_eq!(result.code, EXIT_OK);
    assert_eq!(result.out, "OK: 4 exercises, 8 rows\n");

    let path = fixture_path("week1.tml");
    let opts = options(&["--rpe=0,9"]);
    let result = run(|out, err| check_file(&path, &opts, out, err));
    assert_eq!(result.code, EXIT_FAILURE);
    assert!(result.err.contains("error[E1003]"));
    assert!(result.err.contains("note: 2 exercises parsed before the error"));
}

#[test]
fn check_json_errors() {
    let path = fixture_path("broken.tml");
    let opts = options(&["--error-format=json"]);
    assert_eq!(opts.error_format, ErrorFormat::Json);
    let result = run(|out, err| check_file(&path, &opts, out, err));
    assert_eq!(result.code, EXIT_FAILURE);
    let json_part = result.err.split("note:").next().unwrap();
    let value: serde_json::Value = serde_json::from_str(json_part).unwrap();
    assert_eq!(value[0]["code"], "E1002");
    assert_eq!(value[0]["labels"][0]["line"], 3);
}

#[test]
fn lex_lists_tokens() {
    let path = fixture_path("bodyweight.tml");
    let result = run(|out, err| lex_file(&path, out, err));
    assert_eq!(result.code, EXIT_OK);
    let mut lines = result.out.lines();
    assert!(lines.next().unwrap().ends_with("bodyweight.tml' (22 tokens):"));
    assert_eq!(lines.next().unwrap(), "  #         \"#\" @ 0..1");
    assert_eq!(lines.next().unwrap(), "  IDENT     \"Push-up\" @ 2..9");
    assert_eq!(result.out.lines().last().unwrap(), "  EOF       \"\" @ 44..44");
}
