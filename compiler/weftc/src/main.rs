//! Weft CLI
//!
//! Binds interface specifications and reports what they contain.

use weftc::{check, dump, init_tracing, parse_args, CommandError, Invocation};

/// Exit status for malformed command lines.
const USAGE_ERROR: i32 = 2;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(USAGE_ERROR);
    }

    let command = args[1].as_str();
    let run: fn(&Invocation) -> Result<String, CommandError> = match command {
        "check" => check,
        "dump" => dump,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(USAGE_ERROR);
        }
    };

    let invocation = match parse_args(&args[2..]) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: weft {command} <spec.json> [options]");
            std::process::exit(USAGE_ERROR);
        }
    };

    match run(&invocation) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Weft - interface specification binder");
    println!();
    println!("Usage: weft <command> <spec.json> [options]");
    println!();
    println!("Commands:");
    println!("  check <spec.json>   Bind a specification and print a summary");
    println!("  dump <spec.json>    Bind a specification and print every entity");
    println!("  help                Show this message");
    println!();
    println!("Options:");
    println!("  --shared-template=<name>   Template for shared wrappers (default: std::shared_ptr)");
    println!("  --void=<name>              Return type constructors declare (default: void)");
    println!();
    println!("Set WEFT_LOG (or RUST_LOG) to trace the bind, e.g. WEFT_LOG=debug.");
}
