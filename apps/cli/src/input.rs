//! # Line Input
//!
//! Where the menu reads its answers from.
//!
//! ```text
//! stdin is a terminal ──► TerminalInput  (rustyline: editing, history)
//! stdin is a pipe     ──► ReaderInput    (plain lines, prompts echoed)
//! tests               ──► ReaderInput    (scripted bytes)
//! ```
//!
//! `Ok(None)` means the input has ended. An interrupt (Ctrl-C) is
//! [`InputError::Interrupted`]; the session treats both as "stop without
//! saving".

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

/// Input stream failures.
#[derive(Debug, Error)]
pub enum InputError {
    /// The user pressed Ctrl-C at a prompt.
    #[error("interrupted")]
    Interrupted,

    #[error("terminal error: {0}")]
    Terminal(#[from] ReadlineError),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// A source of answers to prompts.
pub trait LineSource {
    /// Shows `prompt` and reads one line, without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError>;
}

// =============================================================================
// Terminal
// =============================================================================

/// Interactive input through rustyline.
pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    pub fn new() -> Result<Self, InputError> {
        Ok(TerminalInput {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Err(InputError::Interrupted),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Buffered Reader
// =============================================================================

/// Line input from any buffered reader, with prompts written to `echo`.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so a garbled
/// answer reaches the menu as an unparseable entry rather than an error.
pub struct ReaderInput<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> ReaderInput<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        ReaderInput { reader, echo }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        self.echo.write_all(prompt.as_bytes())?;
        self.echo.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_input_lines_then_eof() {
        let mut prompts = Vec::new();
        let mut input = ReaderInput::new("1\r\n  two \n".as_bytes(), &mut prompts);

        assert_eq!(input.read_line("a? ").unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line("b? ").unwrap().as_deref(), Some("  two "));
        assert_eq!(input.read_line("c? ").unwrap(), None);

        assert_eq!(String::from_utf8(prompts).unwrap(), "a? b? c? ");
    }

    #[test]
    fn test_invalid_utf8_line_is_replaced_not_fatal() {
        let mut input = ReaderInput::new(&b"7\n\xff\xfe2\r\n3\n"[..], io::sink());

        assert_eq!(input.read_line("").unwrap().as_deref(), Some("7"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("\u{fffd}\u{fffd}2"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("3"));
        assert_eq!(input.read_line("").unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = ReaderInput::new("5".as_bytes(), io::sink());
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("5"));
        assert_eq!(input.read_line("").unwrap(), None);
    }
}
