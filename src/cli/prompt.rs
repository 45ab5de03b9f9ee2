//! Line-oriented prompting over arbitrary reader/writer pairs.

use std::io::{self, BufRead, Write};

/// Reads answers from `input` after writing prompts to `output`.
///
/// End of input is reported as `io::ErrorKind::UnexpectedEof` so a session
/// can unwind out of any nested prompt with `?`.
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Write `label` without a newline and read one line.
    ///
    /// The trailing line terminator is stripped; other whitespace is kept.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask repeatedly until `parse` accepts the answer.
    ///
    /// Each rejection is written as `Error: {error}` before asking again.
    pub fn ask_until<T, E, F>(&mut self, label: &str, mut parse: F) -> io::Result<T>
    where
        E: std::fmt::Display,
        F: FnMut(String) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(label)?;
            match parse(answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&format!("Error: {}", e))?,
            }
        }
    }

    /// Write one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Consume the prompter and return the output sink.
    pub fn into_output(self) -> O {
        self.output
    }
}
