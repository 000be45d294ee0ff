//! Interactive stdin prompts for values missing from the command line.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Ask until the answer parses as `T`.
///
/// Fails only when stdin is closed or unreadable.
pub fn ask<T: FromStr>(prompt: &str) -> io::Result<T> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if lines.read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed while waiting for input"));
        }
        match input.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => tracing::debug!(input = input.trim(), "could not parse answer, asking again"),
        }
    }
}

/// Use `value` when given on the command line, otherwise ask for it.
pub fn or_ask<T: FromStr>(value: Option<T>, prompt: &str) -> io::Result<T> {
    match value {
        Some(value) => Ok(value),
        None => ask(prompt),
    }
}
