//! The single mode of the binary: demangle symbols given on the command
//! line or read line-wise from stdin.

use std::io::{self, BufRead};

use cxxfilt_lib::Demangler;
use serde::Serialize;

pub struct FilterArgs {
    pub symbols: Vec<String>,
    pub json: bool,
    pub strict: bool,
    pub output_limit: usize,
}

#[derive(Serialize)]
struct Record<'a> {
    mangled: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    demangled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: FilterArgs) {
    let mut failures = 0usize;
    if args.symbols.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let symbol = line.trim();
            if symbol.is_empty() {
                continue;
            }
            if !emit(symbol, &args) {
                failures += 1;
            }
        }
    } else {
        for symbol in &args.symbols {
            if !emit(symbol, &args) {
                failures += 1;
            }
        }
    }
    if args.strict && failures > 0 {
        std::process::exit(1);
    }
}

fn emit(symbol: &str, args: &FilterArgs) -> bool {
    let (line, ok) = render(symbol, args.json, args.output_limit);
    println!("{line}");
    ok
}

/// Demangles one symbol into its printable line. In plain mode a failed
/// symbol echoes back unchanged, matching c++filt.
fn render(symbol: &str, json: bool, output_limit: usize) -> (String, bool) {
    let result = Demangler::new(symbol).with_output_limit(output_limit).run();
    if json {
        let record = match &result {
            Ok(plain) => Record {
                mangled: symbol,
                demangled: Some(plain.clone()),
                error: None,
            },
            Err(err) => Record {
                mangled: symbol,
                demangled: None,
                error: Some(err.to_string()),
            },
        };
        let line = serde_json::to_string(&record).expect("record always serializes");
        (line, result.is_ok())
    } else {
        match result {
            Ok(plain) => (plain, true),
            Err(_) => (symbol.to_owned(), false),
        }
    }
}
