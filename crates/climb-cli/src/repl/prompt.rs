use std::fmt::Display;
use std::io::{self, BufRead, Write};

use climb_core::CoreError;

/// Line-oriented prompt over any reader/writer pair.
///
/// Every `ask*` method returns `Ok(None)` once input is exhausted, so callers
/// can abandon the current operation and shut down cleanly.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `label` and read one trimmed line.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for a field until `parse` accepts the answer.
    ///
    /// Rejected input is echoed back with the reason and the same label is
    /// shown again. Only validation failures re-prompt.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, CoreError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(CoreError::Validation(reason)) => {
                    tracing::debug!(%reason, "field rejected");
                    self.say(format_args!("invalid input: `{answer}` ({reason})"))?;
                }
                Err(other) => {
                    self.say(format_args!("invalid input: `{answer}` ({other})"))?;
                }
            }
        }
    }

    /// `proceed [y/n]`, repeated until answered. End of input counts as no.
    pub fn confirm(&mut self) -> io::Result<bool> {
        Ok(self
            .ask_until("proceed [y/n]: ", parse_yes_no)?
            .unwrap_or(false))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn parse_yes_no(answer: &str) -> Result<bool, CoreError> {
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(CoreError::Validation(String::from("answer y or n")))
    }
}
