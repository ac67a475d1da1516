//! Command-line interface for knobex
//! This binary extracts knob-set metadata from a packed admin bundle and
//! prints it as JSON on stdout.
//!
//! Usage:
//!   knobex extract `<path>` [--pretty]      - Full pipeline (knobs joined with identifiers)
//!   knobex knobs `<path>` [--pretty]        - Knob-set dataset only
//!   knobex identifiers `<path>` [--pretty]  - Identifier dataset only
//!   knobex tokens `<path>`                  - Dump the literal-bearing token stream

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::path::Path;

use knobex::lexer::TokenStream;
use knobex::processor;

fn main() {
    let matches = Command::new("knobex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts knob-set metadata from packed admin bundles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Extract knobs joined with their identifiers")
                .arg(bundle_arg())
                .arg(pretty_arg()),
        )
        .subcommand(
            Command::new("knobs")
                .about("Extract the knob-set dataset only")
                .arg(bundle_arg())
                .arg(pretty_arg()),
        )
        .subcommand(
            Command::new("identifiers")
                .about("Extract the identifier dataset only")
                .arg(bundle_arg())
                .arg(pretty_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the literal-bearing token stream, one literal per line")
                .arg(bundle_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", sub)) => {
            let source = read_source(sub);
            print_json(&processor::extract(&source), is_pretty(sub));
        }
        Some(("knobs", sub)) => {
            let source = read_source(sub);
            print_json(&processor::extract_knobs(&source), is_pretty(sub));
        }
        Some(("identifiers", sub)) => {
            let source = read_source(sub);
            print_json(&processor::extract_identifiers(&source), is_pretty(sub));
        }
        Some(("tokens", sub)) => {
            let source = read_source(sub);
            let mut stream = TokenStream::new(&source);
            while let Some(literal) = stream.next_literal() {
                println!("{}", literal);
            }
        }
        _ => unreachable!(),
    }
}

fn bundle_arg() -> Arg {
    Arg::new("path")
        .help("Path to the packed bundle")
        .required(true)
        .index(1)
}

fn pretty_arg() -> Arg {
    Arg::new("pretty")
        .long("pretty")
        .help("Pretty-print the JSON output")
        .action(ArgAction::SetTrue)
}

fn is_pretty(matches: &ArgMatches) -> bool {
    matches.get_flag("pretty")
}

/// Read the bundle named by the subcommand's path argument, or exit
fn read_source(matches: &ArgMatches) -> String {
    let path = matches.get_one::<String>("path").unwrap();
    processor::read_bundle(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

/// Serialize a dataset to stdout, or exit
fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let encoded = if pretty {
        processor::to_json_pretty(value)
    } else {
        processor::to_json(value)
    };
    match encoded {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
