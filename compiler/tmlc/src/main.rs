//! TML command-line tool.

use std::io::{self, IsTerminal};

use tmlc::commands::{
    check_file, explain_error, lex_file, parse_args, parse_file, show_config, Invocation,
    EXIT_USAGE,
};

fn main() {
    tmlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let code = match command {
        "parse" | "check" | "lex" | "config" => run_command(command, &args[2..]),
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: tml explain <ERROR_CODE>");
                eprintln!("Example: tml explain E1002");
                EXIT_USAGE
            } else {
                explain_error(&args[2], &mut io::stdout(), &mut io::stderr())
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("tml {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_USAGE
        }
    };

    std::process::exit(code);
}

fn run_command(command: &str, rest: &[String]) -> i32 {
    let Invocation { path, mut options } = match parse_args(rest) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run `tml help` for usage.");
            return EXIT_USAGE;
        }
    };
    options.stderr_is_tty = io::stderr().is_terminal();

    let (mut out, mut err) = (io::stdout(), io::stderr());

    if command == "config" {
        return show_config(&options.config, &mut out);
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        eprintln!("Usage: tml {command} <file.tml> [options]");
        return EXIT_USAGE;
    };

    match command {
        "parse" => parse_file(&path, &options, &mut out, &mut err),
        "check" => check_file(&path, &options, &mut out, &mut err),
        _ => lex_file(&path, &mut out, &mut err),
    }
}

fn print_usage() {
    println!("TML workout log parser");
    println!();
    println!("Usage: tml <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file.tml>     Parse and print the workout");
    println!("  check <file.tml>     Validate a workout and report OK or the error");
    println!("  lex <file.tml>       Tokenize and display tokens");
    println!("  config               Show the effective configuration");
    println!("  explain <code>       Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Use `-` as the file to read standard input.");
    println!();
    println!("Options:");
    println!("  --json                  Print the parsed workout as JSON (parse)");
    println!("  --color=<when>          auto (default), always, never");
    println!("  --error-format=<fmt>    human (default), json");
    println!("  --default-unit=<unit>   Unit for rows without one (default: kg)");
    println!("  --units=<u1,u2,...>     Valid units (default: kg,lbs,s,min,count)");
    println!("  --rpe=<min>,<max>       Inclusive RPE range (default: 0,11)");
    println!();
    println!("Examples:");
    println!("  tml parse monday.tml");
    println!("  tml parse monday.tml --json");
    println!("  cat monday.tml | tml check -");
    println!("  tml check bodyweight.tml --default-unit=count --units=count");
    println!("  tml explain E1003");
}
