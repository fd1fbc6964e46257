//! Line-oriented prompting on top of any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// What the user typed in answer to a numeric prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput<T> {
    /// Nothing but whitespace
    Empty,
    Value(T),
    /// Not a number
    Invalid,
}

pub fn parse_number_input<T: FromStr>(input: &str) -> NumberInput<T> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return NumberInput::Empty;
    }
    match trimmed.parse() {
        Ok(value) => NumberInput::Value(value),
        Err(_) => NumberInput::Invalid,
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`Console::ask`], but blank answers become `None` too.
    pub fn ask_optional(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.ask(prompt)?.filter(|answer| !answer.trim().is_empty()))
    }
}
