//! Line-oriented terminal I/O for the menu.
//!
//! Generic over the reader and writer so the whole menu can be driven from a
//! byte buffer in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CliError, CliResult};

/// Prompts on `output`, reads answers from `input`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `prompt` (no newline) and returns the next line without its
    /// line terminator. Surrounding spaces are kept.
    pub fn prompt(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompts for a number. Surrounding whitespace is ignored; anything
    /// else that does not parse is a fatal [`CliError::InvalidNumber`].
    pub fn prompt_number<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> CliResult<T> {
        let line = self.prompt(prompt)?;
        line.trim().parse().map_err(|_| CliError::InvalidNumber { field, input: line })
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_strips_line_ending_only() {
        let mut c = console(" Milk \r\nnext\n");
        assert_eq!(c.prompt("Name: ").unwrap(), " Milk ");
        assert_eq!(c.prompt("Again: ").unwrap(), "next");
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "Name: Again: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = console("tail");
        assert_eq!(c.prompt("> ").unwrap(), "tail");
    }

    #[test]
    fn test_eof_is_error() {
        let mut c = console("");
        assert!(matches!(c.prompt("> "), Err(CliError::UnexpectedEof)));
    }

    #[test]
    fn test_numbers_are_trimmed() {
        let mut c = console("  42 \n2.5\n");
        assert_eq!(c.prompt_number::<i64>("q: ", "quantity").unwrap(), 42);
        assert_eq!(c.prompt_number::<f64>("p: ", "price").unwrap(), 2.5);
    }

    #[test]
    fn test_non_numeric_is_fatal() {
        let mut c = console("ten\n");
        match c.prompt_number::<i64>("q: ", "quantity") {
            Err(CliError::InvalidNumber { field, input }) => {
                assert_eq!(field, "quantity");
                assert_eq!(input, "ten");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        let mut c = console("1.5\n");
        assert!(c.prompt_number::<i64>("q: ", "quantity").is_err());
    }
}
