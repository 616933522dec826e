//! Line-oriented prompts over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use stockroom_core::InventoryError;

/// Why a menu action did not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The inventory rejected the operation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The user typed something that could not be parsed.
    #[error("invalid input: {0}")]
    Input(String),

    /// Input ended while a prompt was waiting.
    #[error("end of input")]
    EndOfInput,

    /// The terminal itself failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one line, without its line ending.
    pub fn ask(&mut self, label: &str) -> Result<String, CommandError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CommandError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask and parse the answer; `expected` describes a valid answer in errors.
    pub fn ask_parsed<T: FromStr>(&mut self, label: &str, expected: &str) -> Result<T, CommandError> {
        let raw = self.ask(label)?;
        raw.trim()
            .parse()
            .map_err(|_| CommandError::Input(format!("expected {expected}, got {raw:?}")))
    }
}
