//! Arglistc CLI
//!
//! Validates call descriptions against their declared parameters.

use arglist_check::{CheckConfig, ARITY_ENV, STRICT_TYPES_ENV};
use arglistc::commands::{check_file, explain_error, parse_check_args};

fn main() {
    arglistc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let config = match CheckConfig::from_env() {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let (path, options) = match parse_check_args(&args[2..], config) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: arglistc check <file.json> [options]");
                    std::process::exit(1);
                }
            };
            check_file(&path, &options);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: arglistc explain <ERROR_CODE>");
                eprintln!("Example: arglistc explain A0002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("arglistc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Argument list checker");
    println!();
    println!("Usage: arglistc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.json>    Validate every call in a call description");
    println!("  explain <code>       Explain an error code (e.g., A0002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --strict             Report surplus arguments (default)");
    println!("  --lenient            Report surplus arguments as warnings only");
    println!("  --strict-types       Do not accept int values for float parameters");
    println!("  --format=<fmt>       Output format: text (default), json");
    println!("  --color=<when>       Colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  {ARITY_ENV:<20} Default arity policy: strict, lenient");
    println!("  {STRICT_TYPES_ENV:<20} Set to 1 to enable --strict-types");
    println!("  RUST_LOG             Enable tracing output (e.g., arglist_check=debug)");
    println!();
    println!("Examples:");
    println!("  arglistc check calls.json");
    println!("  arglistc check calls.json --lenient --format=json");
    println!("  arglistc explain A0003");
}
