//! Animation script CLI.

use std::io::{self, IsTerminal, Write};

use anim_diagnostic::emitter::{ColorMode, DiagnosticEmitter, SourceInfo, TerminalEmitter};
use anim_eval::ScriptError;
use animc::commands::{check, explain, lex, parse, run, DEFAULT_CHECK_LIMIT};
use animc::RunConfig;

fn main() {
    animc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let path = require_path(&args, "Usage: anim lex <file>");
            let source = read_file(path);
            let mut stdout = io::stdout().lock();
            if let Err(err) = lex(&source, &mut stdout) {
                report(path, &source, &err);
            }
        }
        "parse" => {
            let path = require_path(&args, "Usage: anim parse <file>");
            let source = read_file(path);
            let mut stdout = io::stdout().lock();
            if let Err(err) = parse(&source, &mut stdout) {
                report(path, &source, &err);
            }
        }
        "check" => {
            let path = require_path(&args, "Usage: anim check <file> [--limit=N]");
            let limit = match RunConfig::from_args(&args[3..]) {
                Ok(config) => config.limit.unwrap_or(DEFAULT_CHECK_LIMIT),
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: anim check <file> [--limit=N]");
                    std::process::exit(1);
                }
            };
            let source = read_file(path);
            match check(&source, limit) {
                Ok(found) => {
                    println!(
                        "{path}: ok ({} statements, {} commands, {} objects left)",
                        found.statements, found.applied, found.objects
                    );
                    if found.limited {
                        eprintln!(
                            "stopped after {} of {} commands (--limit)",
                            found.applied, found.expanded
                        );
                    }
                }
                Err(err) => report(path, &source, &err),
            }
        }
        "run" => {
            let path = require_path(&args, "Usage: anim run <file> [--limit=N] [--step=F] [--quiet]");
            let config = match RunConfig::from_args(&args[3..]) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: anim run <file> [--limit=N] [--step=F] [--quiet]");
                    std::process::exit(1);
                }
            };
            let source = read_file(path);
            let mut stdout = io::stdout().lock();
            match run(&source, &config, &mut stdout) {
                Ok(summary) => {
                    let _ = stdout.flush();
                    if summary.limited {
                        eprintln!("stopped after {} commands (--limit)", summary.applied);
                    }
                }
                Err(err) => {
                    let _ = stdout.flush();
                    report(path, &source, &err);
                }
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: anim explain <ERROR_CODE>");
                eprintln!("Example: anim explain E1001");
                std::process::exit(1);
            }
            match explain(&args[2]) {
                Ok(doc) => println!("{doc}"),
                Err(err) => {
                    eprintln!("{err}");
                    eprintln!();
                    eprintln!("Codes have the format EXXXX where X is a digit.");
                    eprintln!("Examples: E0001, E1001, E6001");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("anim {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn require_path<'a>(args: &'a [String], usage: &str) -> &'a str {
    match args.get(2) {
        Some(path) => path,
        None => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn report(path: &str, source: &str, err: &ScriptError) -> ! {
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, io::stderr().is_terminal())
        .with_source(SourceInfo::new(path, source));
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    std::process::exit(1);
}

fn print_usage() {
    println!("Animation script interpreter");
    println!();
    println!("Usage: anim <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens with positions");
    println!("  parse <file>         Parse and print statements in canonical form");
    println!("  check <file>         Parse and execute without output (--limit applies)");
    println!("  run <file>           Execute, printing one line per world event");
    println!("  explain <code>       Explain an error code (e.g., E1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --limit=<n>          Stop after n commands (check defaults to 10000000)");
    println!("  --step=<f>           Distance moved by one shift (default: 1)");
    println!("  --quiet, -q          Do not print world events");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=anim_eval=debug) for trace output on stderr.");
}
