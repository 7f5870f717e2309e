mod error;
pub mod input;

pub use {
    error::Error,
    primality::verdict::{Primality, Verdict},
};

use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter a number: ";

/// Prompts for a number on `stdout`, reads it from `stdin` and writes the verdict.
pub fn run(stdin: &mut impl BufRead, stdout: &mut impl Write) -> Result<Verdict, Error> {
    write!(stdout, "{PROMPT}")
        .and_then(|()| stdout.flush())
        .map_err(Error::Write)?;
    let n = input::read_integer(stdin)?;
    check(n, stdout)
}

pub fn check(n: i64, stdout: &mut impl Write) -> Result<Verdict, Error> {
    let verdict = Verdict::of(n);
    writeln!(stdout, "{verdict}").map_err(Error::Write)?;
    Ok(verdict)
}
