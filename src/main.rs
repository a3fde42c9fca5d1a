//! Thin driver: parse a segment-sequence file and render its records
//!
//! Reads the whole file named by the first argument, applies the document
//! grammar, and prints each record's marker (hex) and declared length
//! (decimal). A mismatch surfaces as a single generic parse-failed line
//! and a nonzero exit; no structured diagnostics are produced.

use parsimony::try_decode;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: byte-combinator-model <file>");
        return ExitCode::FAILURE;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("cannot read '{}': {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    match try_decode(bytes) {
        Ok(records) => {
            for record in &records {
                println!("Type={:04X}", record.marker);
                println!("Len={}", record.length);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
