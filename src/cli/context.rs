use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::book::ContactBook;
use crate::error::BookResult;

/// State shared by the menu handlers: the book, where it is saved, and the
/// input/output the user talks through.
pub struct Session<R, W> {
    pub book: ContactBook,
    pub data_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: ContactBook, data_file: PathBuf, input: R, output: W) -> Self {
        Self {
            book,
            data_file,
            input,
            output,
        }
    }

    /// Prompt and read a line. Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> BookResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = String::new();
        match self.input.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(
                buf.trim_end_matches('\n').trim_end_matches('\r').to_string(),
            )),
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&mut self, prompt: &str) -> BookResult<Option<String>> {
        Ok(self.read_line(prompt)?.map(|s| s.trim().to_string()))
    }

    /// Print one line of output.
    pub fn say(&mut self, message: &str) -> BookResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn into_parts(self) -> (ContactBook, W) {
        (self.book, self.output)
    }
}
