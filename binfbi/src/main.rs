//! FBI command-line tool for validating and transcoding FBI documents.
//!
//! Usage: fbi [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --to <FORMAT>      Output format (json, yaml, toml, outline)
//!                          [default: json]
//!   -o, --output <FILE>    Write output to specified file
//!   --check                Check if the document is valid (exit 0 if valid,
//!                          1 if invalid)
//!   --lenient              Tolerate stray ";" terminators at content scope
//!   --lower                Lowercase section headers and field names
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! Reads from FILE, or from stdin when FILE is "-" or absent.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use libfbi::{parse_with_options, ParserOptions, RawMap};

mod transcode;

/// Check whether a string is a recognized format name for -t.
fn is_format_name(s: &str) -> bool {
    matches!(s, "json" | "yaml" | "yml" | "toml" | "outline")
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut to_format: Option<&str> = None;
    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut lenient = false;
    let mut lower = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("fbi {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-t" | "--to" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -t requires a format argument");
                    process::exit(1);
                }
                if !is_format_name(&args[i]) {
                    eprintln!("Error: Unknown format: {}", args[i]);
                    process::exit(1);
                }
                to_format = Some(&args[i]);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "--lenient" => {
                lenient = true;
            }
            "--lower" => {
                lower = true;
            }
            "-" => {
                // Explicit stdin; input_path stays None.
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    let input = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let mut options = ParserOptions::default();
    if lenient {
        options = options.lenient();
    }
    if lower {
        options = options
            .format_header(|s| s.to_lowercase())
            .format_field_name(|s| s.to_lowercase());
    }

    let root = match parse_with_options(&input, &options) {
        Ok(root) => root,
        Err(err) => {
            match input_path {
                Some(path) => eprintln!("Error in {}: {}", path, err),
                None => eprintln!("Error: {}", err),
            }
            process::exit(1);
        }
    };

    if check_only {
        println!("ok");
        return;
    }

    let rendered = match render(&root.to_raw(), &root, to_format.unwrap_or("json")) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing {}: {}", path, e);
                process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if handle.write_all(rendered.as_bytes()).is_err() {
                process::exit(1);
            }
            if !rendered.ends_with('\n') && handle.write_all(b"\n").is_err() {
                process::exit(1);
            }
        }
    }
}

/// Render the parsed document in the requested output format.
fn render(raw: &RawMap, root: &libfbi::Section, format: &str) -> Result<String, String> {
    match format {
        "json" => Ok(libfbi::encode_json(raw)),
        "yaml" | "yml" => transcode::yaml::encode(raw),
        "toml" => transcode::toml::encode(raw),
        "outline" => Ok(root.outline()),
        other => Err(format!("Unknown format: {}", other)),
    }
}

fn print_help() {
    println!("fbi - validate and transcode FBI configuration documents");
    println!();
    println!("Usage: fbi [OPTIONS] [FILE]");
    println!();
    println!("Reads from FILE, or from stdin when FILE is \"-\" or absent.");
    println!();
    println!("Options:");
    println!("  -t, --to <FORMAT>    Output format (json, yaml, toml, outline) [default: json]");
    println!("  -o, --output <FILE>  Write output to specified file");
    println!("  --check              Check if the document is valid (exit 0 if valid, 1 if invalid)");
    println!("  --lenient            Tolerate stray \";\" terminators at content scope");
    println!("  --lower              Lowercase section headers and field names");
    println!("  -h, --help           Print help");
    println!("  -V, --version        Print version");
}
