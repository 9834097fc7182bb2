//! Application shell owning the board state.

use crate::commands::{Command, CommandHelp};
use textboard_core::{Board, BoardConfig, BoardError, TextItem};
use thiserror::Error;

/// Shell errors.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Holds the only copy of business state; the presentation layer just prints
/// what [`Shell::execute`] returns.
#[derive(Debug, Default)]
pub struct Shell {
    board: Board,
    quit_requested: bool,
}

impl Shell {
    /// Create a shell with the default board configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            board: Board::with_config(config),
            quit_requested: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a `quit` command has been executed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Parse and run one input line. Blank lines and `#` comments are ignored.
    pub fn handle_line(&mut self, line: &str) -> ShellResult<Option<String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        self.execute(command).map(Some)
    }

    /// Run a command against the board and describe the result.
    pub fn execute(&mut self, command: Command) -> ShellResult<String> {
        log::debug!("Executing {:?}", command);

        match command {
            Command::Add {
                font_size,
                font_style,
                color,
                content,
            } => {
                let defaults = self.board.config().default_style;
                let item = self.board.add_text(
                    &content,
                    font_size.unwrap_or(defaults.font_size),
                    font_style.unwrap_or(defaults.font_style),
                    color.unwrap_or(defaults.color),
                )?;
                Ok(format!("added {}", describe(&item)))
            }
            Command::Move { id, x, y } => {
                self.board.move_text(id, x, y);
                Ok(match self.board.get(id) {
                    Some(item) => format!("moved {}", describe(item)),
                    None => format!("no item #{id}"),
                })
            }
            Command::Drag { id, path } => {
                if !self.board.begin_drag(id) {
                    return Ok(format!("no item #{id}"));
                }
                for (x, y) in path {
                    self.board.move_text(id, x, y);
                }
                self.board.end_drag();
                Ok(match self.board.get(id) {
                    Some(item) => format!("dragged {}", describe(item)),
                    None => format!("no item #{id}"),
                })
            }
            Command::Remove(id) => {
                let existed = self.board.get(id).is_some();
                self.board.remove_text(id);
                Ok(if existed {
                    format!("removed #{id}")
                } else {
                    format!("no item #{id}")
                })
            }
            Command::Undo => Ok(if self.board.undo() {
                self.status()
            } else {
                "nothing to undo".to_string()
            }),
            Command::Redo => Ok(if self.board.redo() {
                self.status()
            } else {
                "nothing to redo".to_string()
            }),
            Command::List => Ok(self.render()),
            Command::Help => Ok(CommandHelp::render_all()),
            Command::Quit => {
                self.quit_requested = true;
                Ok("bye".to_string())
            }
        }
    }

    /// One line per item, back to front, followed by the history status.
    pub fn render(&self) -> String {
        let items = self.board.current_items();
        if items.is_empty() {
            return format!("(empty canvas)\n{}", self.status());
        }
        let mut out = String::new();
        for item in items {
            out.push_str(&describe(item));
            out.push('\n');
        }
        out.push_str(&self.status());
        out
    }

    fn status(&self) -> String {
        let history = self.board.history();
        format!(
            "{} item(s), undo: {}, redo: {}",
            self.board.current_items().len(),
            history.undo_depth(),
            history.redo_depth()
        )
    }
}

fn describe(item: &TextItem) -> String {
    let position = item.position();
    format!(
        "#{} {:?} at ({}, {}) {}px {} {}",
        item.id(),
        item.content(),
        position.x,
        position.y,
        item.font_size(),
        item.font_style(),
        item.color()
    )
}
