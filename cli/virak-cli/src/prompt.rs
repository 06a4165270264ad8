// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Interactive prompts
//!
//! Every prompt runs the same small state machine:
//!
//! ```text
//! Prompting --line--> Validating --ok--> Confirmed
//!     ^                   |
//!     +-----invalid-------+
//! Prompting --empty line or end of input--> Aborted
//! ```
//!
//! Invalid input is reported and asked for again; it never ends the command.
//! Input comes from the terminal through dialoguer when stdin is a TTY, and
//! line by line from stdin otherwise, so scripted input works the same way.

use std::io::{self, BufRead, IsTerminal, Write};

/// Source of prompt answers
pub trait LineReader {
    /// Show `prompt` and read one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads answers from a terminal
pub struct TerminalReader;

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(io::Error::other)
    }
}

/// Reads answers from any buffered input, one per line
pub struct PipeReader<R> {
    input: R,
}

impl<R: BufRead> PipeReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for PipeReader<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        eprint!("{prompt}: ");
        io::stderr().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Reader for the current process
pub fn stdin_reader() -> Box<dyn LineReader> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        Box::new(TerminalReader)
    } else {
        Box::new(PipeReader::new(stdin.lock()))
    }
}

enum State<T> {
    Prompting,
    Validating(String),
    Confirmed(T),
    Aborted,
}

/// Ask until `check` accepts the answer. Returns `None` if the user aborts
/// with an empty answer or input ends.
pub fn ask<T>(
    reader: &mut dyn LineReader,
    prompt: &str,
    mut check: impl FnMut(&str) -> Result<T, String>,
) -> io::Result<Option<T>> {
    let mut state = State::Prompting;
    loop {
        state = match state {
            State::Prompting => match reader.read_line(prompt)? {
                Some(line) if !line.trim().is_empty() => State::Validating(line.trim().to_string()),
                _ => State::Aborted,
            },
            State::Validating(input) => match check(&input) {
                Ok(value) => State::Confirmed(value),
                Err(message) => {
                    eprintln!("{message}");
                    State::Prompting
                }
            },
            State::Confirmed(value) => return Ok(Some(value)),
            State::Aborted => {
                tracing::debug!(prompt, "prompt aborted");
                return Ok(None);
            }
        };
    }
}

/// Numbered menu; returns the index of the chosen item
pub fn select<T>(
    reader: &mut dyn LineReader,
    title: &str,
    items: &[T],
    label: impl Fn(&T) -> String,
) -> io::Result<Option<usize>> {
    if items.is_empty() {
        eprintln!("No {title} available");
        return Ok(None);
    }
    eprintln!("{title}:");
    for (i, item) in items.iter().enumerate() {
        eprintln!("  {:>2}) {}", i + 1, label(item));
    }
    let prompt = format!("Select {title} [1-{}]", items.len());
    ask(reader, &prompt, |input| match input.parse::<usize>() {
        Ok(n) if (1..=items.len()).contains(&n) => Ok(n - 1),
        _ => Err(format!(
            "invalid selection '{input}', enter a number between 1 and {}",
            items.len()
        )),
    })
}

/// Require the user to type `expected` exactly; false if they abort
pub fn confirm_typed(reader: &mut dyn LineReader, prompt: &str, expected: &str) -> io::Result<bool> {
    let answer = ask(reader, prompt, |input| {
        if input == expected {
            Ok(())
        } else {
            Err(format!("'{input}' does not match '{expected}'"))
        }
    })?;
    Ok(answer.is_some())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> PipeReader<Cursor<Vec<u8>>> {
        PipeReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_select_retries_until_valid() {
        let mut r = reader("0\nabc\n7\n2\n");
        let choice = select(&mut r, "image", &["a", "b", "c"], |s| s.to_string()).unwrap();
        assert_eq!(choice, Some(1));
    }

    #[test]
    fn test_select_empty_line_aborts() {
        let mut r = reader("\n2\n");
        let choice = select(&mut r, "image", &["a", "b"], |s| s.to_string()).unwrap();
        assert_eq!(choice, None);
    }

    #[test]
    fn test_select_without_items() {
        let mut r = reader("1\n");
        let items: [&str; 0] = [];
        assert_eq!(select(&mut r, "image", &items, |s| s.to_string()).unwrap(), None);
    }

    #[test]
    fn test_end_of_input_aborts() {
        let mut r = reader("wrong\n");
        assert!(!confirm_typed(&mut r, "Type the name", "web-1").unwrap());
    }

    #[test]
    fn test_confirm_after_mismatch() {
        let mut r = reader("web-2\r\nweb-1\r\n");
        assert!(confirm_typed(&mut r, "Type the name", "web-1").unwrap());
    }

    #[test]
    fn test_ask_trims_input() {
        let mut r = reader("  hello  \n");
        let value = ask(&mut r, "Name", |s| Ok::<_, String>(s.to_string())).unwrap();
        assert_eq!(value.as_deref(), Some("hello"));
    }
}
