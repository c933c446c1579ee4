//! Interactive prompting with validation.
//!
//! Input is read a line at a time and handed to a parser that either accepts
//! it or rejects it with a reason. Rejected input is reported and the prompt
//! repeats in a loop until a valid answer or end of input.

use std::io::{self, BufRead, Write};

/// Result of parsing one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// The input was accepted.
    Valid(T),
    /// The input was rejected, with a message for the user.
    Rejected(String),
}

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

impl Decision {
    /// Parses a decision. Only `h` and `s` are accepted, exactly as typed;
    /// the trailing line ending is ignored.
    ///
    /// ```
    /// use simplejack::prompt::{Decision, Reply};
    ///
    /// assert_eq!(Decision::parse("h\n"), Reply::Valid(Decision::Hit));
    /// assert!(matches!(Decision::parse("H"), Reply::Rejected(_)));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Reply<Self> {
        match input.trim_end_matches(['\r', '\n']) {
            "h" => Reply::Valid(Self::Hit),
            "s" => Reply::Valid(Self::Stand),
            _ => Reply::Rejected("Invalid response. Answer must be one of: h, s".to_string()),
        }
    }
}

/// Asks `prompt` until `parse` accepts the answer.
///
/// Each rejection is written to `output` before asking again. Returns
/// `Ok(None)` if `input` ends before a valid answer is given.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn ask<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: F,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Reply<T>,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse(&line) {
            Reply::Valid(value) => return Ok(Some(value)),
            Reply::Rejected(reason) => {
                log::debug!("rejected input {:?}", line.trim_end());
                writeln!(output, "{reason}")?;
                writeln!(output)?;
            }
        }
    }
}
