//! Console shell: collects `x`, `y` and `z`, then prints the combined result.
//!
//! Transcript of a session:
//! ```text
//! Enter x: 5
//! Enter y: 10
//! Enter z: 3
//! Processing...
//! Final Output = 189
//! ```

mod editor;
pub mod input;
pub mod print;

use crate::accumulator::{Breakdown, Width, Word};
use crate::config::Config;
use crate::error::Error;
use input::InputSource;
use log::debug;
use print::style::{ErrorView, LabelView, ValueView};
use std::collections::VecDeque;
use std::io::Write;

pub const VARIABLES: [&str; 3] = ["x", "y", "z"];
const PROCESSING_TEXT: &str = "Processing...";
const RESULT_LABEL: &str = "Final Output = ";

/// Parse a single input value at the width of `W`.
pub fn parse_word<W: Word>(input: &str) -> Result<W, Error> {
    input
        .trim()
        .parse::<W>()
        .map_err(|source| Error::InvalidInteger {
            input: input.to_string(),
            width: W::WIDTH,
            source,
        })
}

pub struct Session<I: InputSource, O: Write> {
    input: I,
    out: O,
    config: Config,
    /// Tokens of the last read line that are not consumed yet.
    pending: VecDeque<String>,
}

impl<I: InputSource, O: Write> Session<I, O> {
    pub fn new(input: I, out: O, config: Config) -> Self {
        Self {
            input,
            out,
            config,
            pending: VecDeque::new(),
        }
    }

    /// Run a session at the configured width.
    ///
    /// If `preset` is set, its values are used instead of asking the user.
    pub fn run(&mut self, preset: Option<&[String; 3]>) -> Result<(), Error> {
        debug!(target: "trisum", "run session with {:?}", self.config);
        match self.config.width {
            Width::W32 => self.run_with::<i32>(preset).map(drop),
            Width::W64 => self.run_with::<i64>(preset).map(drop),
        }
    }

    pub fn run_with<W: Word>(
        &mut self,
        preset: Option<&[String; 3]>,
    ) -> Result<Breakdown<W>, Error> {
        let [x, y, z] = match preset {
            Some(values) => {
                let [x, y, z] = values;
                [parse_word(x)?, parse_word(y)?, parse_word(z)?]
            }
            None => self.read_inputs()?,
        };
        debug!(target: "trisum", "inputs: x = {x}, y = {y}, z = {z}");

        writeln!(self.out, "{PROCESSING_TEXT}")?;
        self.out.flush()?;

        let breakdown = Breakdown::compute(x, y, z);
        debug!(target: "trisum", "result: {breakdown:?}");

        if self.config.breakdown {
            self.print_part(format!("factorial({x})"), breakdown.factorial)?;
            self.print_part(format!("fibonacci({y})"), breakdown.fibonacci)?;
            self.print_part(format!("sum_of_squares({z})"), breakdown.squares)?;
        }
        writeln!(
            self.out,
            "{}{}",
            LabelView::from(RESULT_LABEL),
            ValueView::from(breakdown.total)
        )?;
        self.out.flush()?;

        Ok(breakdown)
    }

    fn print_part<W: Word>(&mut self, label: String, value: W) -> Result<(), Error> {
        writeln!(
            self.out,
            "{} = {}",
            LabelView::from(label),
            ValueView::from(value)
        )?;
        Ok(())
    }

    /// Ask for `x`, `y` and `z` in order.
    ///
    /// Values are whitespace separated tokens, so one line may hold several of them; the
    /// rest of a line is kept for the next variables. Variables still unread when input
    /// ends (or is interrupted) keep the zero value, their prompts are shown anyway.
    pub fn read_inputs<W: Word>(&mut self) -> Result<[W; 3], Error> {
        let mut values = [W::ZERO; 3];
        let mut ended = false;
        for (value, name) in values.iter_mut().zip(VARIABLES) {
            let prompt = format!("Enter {name}: ");
            if ended {
                self.input.echo_prompt(&prompt)?;
                continue;
            }

            match self.read_value(&prompt)? {
                Some(v) => *value = v,
                None => {
                    debug!(target: "trisum", "input ended before `{name}` was read");
                    ended = true;
                }
            }
        }
        Ok(values)
    }

    /// Ask for a value until a valid one is entered. Return `None` at the end of input.
    fn read_value<W: Word>(&mut self, prompt: &str) -> Result<Option<W>, Error> {
        loop {
            let Some(token) = self.next_token(prompt)? else {
                return Ok(None);
            };

            match parse_word(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(err) if err.is_recoverable() => {
                    self.pending.clear();
                    writeln!(self.out, "{}", ErrorView::from(format!("error: {err:#}")))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Take a token left from a previous line or read lines until one holds a token.
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        if let Some(token) = self.pending.pop_front() {
            self.input.echo_prompt(prompt)?;
            return Ok(Some(token));
        }

        loop {
            let line = match self.input.read_line(prompt) {
                Ok(Some(line)) => line,
                Ok(None) | Err(Error::Interrupted) => return Ok(None),
                Err(err) => return Err(err),
            };
            self.pending
                .extend(line.split_whitespace().map(ToString::to_string));
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
        }
    }
}
