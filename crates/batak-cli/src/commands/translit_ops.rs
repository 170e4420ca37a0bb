use std::io::{self, BufRead, Write};
use std::process;

use batak_engine::Variant;

/// Apply `convert` to every line of `input`, writing one result per line.
pub fn convert_lines<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    convert: impl Fn(&str) -> String,
) -> io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        writeln!(out, "{}", convert(&line?))?;
        count += 1;
    }
    Ok(count)
}

/// Convert `text` if given, otherwise every line on stdin.
fn run(text: Option<&str>, convert: impl Fn(&str) -> String) {
    match text {
        Some(text) => println!("{}", convert(text)),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            die!(
                convert_lines(stdin.lock(), &mut stdout.lock(), convert),
                "Error reading stdin: {}"
            );
        }
    }
}

pub fn latin(text: Option<&str>) {
    run(text, batak_engine::to_latin);
}

pub fn native(text: Option<&str>, variant: Option<&str>) {
    let variant = match variant {
        Some(name) => die!(name.parse::<Variant>(), "Error: {}"),
        None => Variant::default(),
    };
    run(text, |line| batak_engine::to_native_variant(line, variant));
}

pub fn normalize(text: Option<&str>) {
    run(text, batak_engine::normalize);
}

/// Outcome of comparing a script text against its expected reading.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Match,
    Mismatch { actual: String },
}

pub fn check_pair(native: &str, latin: &str) -> CheckOutcome {
    if batak_engine::validate_roundtrip(native, latin) {
        CheckOutcome::Match
    } else {
        CheckOutcome::Mismatch {
            actual: batak_engine::to_latin(native),
        }
    }
}

pub fn check(native: &str, latin: &str) {
    match check_pair(native, latin) {
        CheckOutcome::Match => println!("OK: {native} → {latin}"),
        CheckOutcome::Mismatch { actual } => {
            println!("MISMATCH: {native} reads as {actual:?}, expected {latin:?}");
            process::exit(1);
        }
    }
}
