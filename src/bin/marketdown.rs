//! Command-line interface for marketdown
//! Renders reply text into the presentable node tree and prints it in a
//! machine- or human-readable format.
//!
//! Usage:
//!   marketdown render `<path>` [--format `<format>`]  - Render a reply to a node tree
//!   marketdown blocks `<path>` [--format `<format>`]  - Dump the block segmentation only
//!
//! A path of `-` reads from stdin.

use clap::{Arg, Command};
use std::io::Read;

use marketdown::markdown::blocks::segment;
use marketdown::markdown::compose::render;
use marketdown::markdown::outline::outline;

fn main() {
    let matches = Command::new("marketdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting marketdown reply rendering")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a reply into the presentable node tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the reply text, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'yaml', 'outline')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("blocks")
                .about("Dump the block segmentation without inline parsing")
                .arg(
                    Arg::new("path")
                        .help("Path to the reply text, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'yaml')")
                        .default_value("json"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            let source = read_source(path);
            let tree = render(&source);
            let output = match format.as_str() {
                "json" => serialize_json(&tree),
                "yaml" => serialize_yaml(&tree),
                "outline" => outline(&tree),
                other => {
                    eprintln!("Unknown format: {}", other);
                    std::process::exit(1);
                }
            };
            println!("{}", output);
        }
        Some(("blocks", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            let source = read_source(path);
            let blocks = segment(&source);
            let output = match format.as_str() {
                "json" => serialize_json(&blocks),
                "yaml" => serialize_yaml(&blocks),
                other => {
                    eprintln!("Unknown format: {}", other);
                    std::process::exit(1);
                }
            };
            println!("{}", output);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}

fn serialize_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    })
}

fn serialize_yaml<T: serde::Serialize>(value: &T) -> String {
    serde_yaml::to_string(value).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    })
}
