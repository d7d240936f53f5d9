pub mod cli;
pub mod commands;
pub mod dto;

use std::fs;
use std::io::Read;

use commands::analyze::{self, Rejection};
use dto::Response;

use crate::cli::Args;

/// Read the input selected by `args`, analyze it, and build the response.
///
/// `stdin` is only read when neither a sequence argument nor an input file is given.
pub fn execute(args: &Args, stdin: impl Read) -> Response {
    let outcome = read_input(args, stdin).and_then(|text| {
        if args.json {
            let request = analyze::parse_request(&text)?;
            analyze::analyze_request(&request)
        } else {
            analyze::analyze_text(&text)
        }
    });
    analyze::respond(outcome, args.pretty)
}

fn read_input(args: &Args, mut stdin: impl Read) -> Result<String, Rejection> {
    if let Some(sequence) = &args.sequence {
        return Ok(sequence.clone());
    }

    if let Some(path) = &args.input {
        log::debug!("reading input from {}", path.display());
        return fs::read_to_string(path)
            .map_err(|e| Rejection::bad_request(format!("Failed to read file: {}", e)));
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|e| Rejection::bad_request(format!("Failed to read stdin: {}", e)))?;
    Ok(text)
}
