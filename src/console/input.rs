use crate::console::editor::{create_editor, RLHelper};
use crate::error::Error;
use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::Editor;
use std::io::{self, BufRead, Write};

/// Source of user input lines.
pub trait InputSource {
    /// Show `prompt` and read a single line without the trailing line break.
    /// Return `None` at the end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error>;

    /// Show `prompt` without reading anything.
    fn echo_prompt(&mut self, prompt: &str) -> Result<(), Error>;
}

/// Interactive terminal input with line editing and in-memory history.
pub struct Terminal {
    editor: Editor<RLHelper, MemHistory>,
}

impl Terminal {
    pub fn new(colored: bool) -> anyhow::Result<Self> {
        Ok(Self {
            editor: create_editor(colored)?,
        })
    }
}

impl InputSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(Error::Interrupted),
            Err(err) => Err(err.into()),
        }
    }

    fn echo_prompt(&mut self, prompt: &str) -> Result<(), Error> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Line oriented input from any reader (pipes, files, in-memory buffers).
/// Prompts are written into `prompt_out`.
pub struct Lines<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> Lines<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    #[cfg(test)]
    pub(crate) fn prompt_out(&self) -> &W {
        &self.prompt_out
    }
}

impl<R: BufRead, W: Write> InputSource for Lines<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        self.echo_prompt(prompt)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn echo_prompt(&mut self, prompt: &str) -> Result<(), Error> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;
        Ok(())
    }
}
