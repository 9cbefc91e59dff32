//! Line input for room choices.
//!
//! The game loop reads one line per turn through [`InputSource`]. The console
//! implementation wraps rustyline when stdin is a terminal and plain stdin otherwise.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// A sequential, single-consumer source of input lines.
pub trait InputSource {
    /// Read one line. `Ok(None)` means the channel is closed and no more input will come.
    ///
    /// # Errors
    /// Underlying I/O failures.
    fn read_choice(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console input: a line editor with history on a terminal, plain stdin otherwise.
pub enum InputManager {
    Editor {
        editor: DefaultEditor,
        history: Option<PathBuf>,
    },
    Plain,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; using plain input");
            return InputManager::Plain;
        }
        match DefaultEditor::new() {
            Ok(mut editor) => {
                let history = history_file();
                if let Some(path) = &history {
                    load_history(&mut editor, path);
                }
                InputManager::Editor { editor, history }
            },
            Err(err) => {
                warn!("line editor unavailable ({err}); using plain input");
                InputManager::Plain
            },
        }
    }
}

impl InputSource for InputManager {
    fn read_choice(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self {
            InputManager::Editor { editor, history } => {
                let line = editor_line(editor.readline(prompt))?;
                if let Some(line) = line.as_deref().filter(|l| !l.trim().is_empty()) {
                    let _ = editor.add_history_entry(line);
                    if let Some(path) = history.as_deref()
                        && let Err(err) = editor.save_history(path)
                    {
                        warn!("failed to save input history to {}: {err}", path.display());
                    }
                }
                Ok(line)
            },
            InputManager::Plain => plain_line(prompt),
        }
    }
}

/// Map a line editor result onto the [`InputSource`] contract.
fn editor_line(result: Result<String, ReadlineError>) -> io::Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
            info!("input closed");
            Ok(None)
        },
        Err(ReadlineError::Io(err)) => Err(err),
        Err(other) => Err(io::Error::other(other)),
    }
}

fn plain_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        info!("input closed (EOF)");
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn load_history(editor: &mut DefaultEditor, path: &Path) {
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("failed to create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => {},
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("no input history at {} yet", path.display());
        },
        Err(err) => warn!("failed to load input history from {}: {err}", path.display()),
    }
}

fn history_file() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("quest_engine").join("history.txt"))
}

/// Pre-recorded input lines, consumed in order. Closed once empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts_seen: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts_seen: 0,
        }
    }

    /// Number of times input was requested.
    pub fn prompts_seen(&self) -> usize {
        self.prompts_seen
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_choice(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts_seen += 1;
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_and_eof_close_the_channel() {
        assert_eq!(editor_line(Err(ReadlineError::Interrupted)).unwrap(), None);
        assert_eq!(editor_line(Err(ReadlineError::Eof)).unwrap(), None);
        assert_eq!(editor_line(Ok("3".into())).unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn editor_io_errors_surface() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert!(editor_line(Err(ReadlineError::Io(err))).is_err());
    }

    #[test]
    fn history_lives_under_engine_dir() {
        if let Some(path) = history_file() {
            assert!(path.ends_with(Path::new("quest_engine/history.txt")));
        }
    }

    #[test]
    fn scripted_input_drains_then_closes() {
        let mut input = ScriptedInput::new(["2", "x"]);
        assert_eq!(input.read_choice("> ").unwrap().as_deref(), Some("2"));
        assert_eq!(input.read_choice("> ").unwrap().as_deref(), Some("x"));
        assert_eq!(input.read_choice("> ").unwrap(), None);
        assert_eq!(input.prompts_seen(), 3);
        assert_eq!(input.remaining(), 0);
    }
}
