//! Line-based prompting over any reader/writer pair, so the demos can be run against stdin and
//! stdout or against in-memory buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

/// A prompt-and-answer channel with the user.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Wrap the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` (without a newline) and reads one line of input. The line ending is
    /// stripped. Running out of input reads as an empty answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Gives back the output, e.g. to inspect what was written to a buffer.
    pub fn into_output(self) -> W {
        self.output
    }
}
