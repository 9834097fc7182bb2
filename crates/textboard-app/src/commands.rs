//! Line commands and their help registry.

use crate::shell::ShellError;
use std::str::FromStr;
use textboard_core::{FontStyle, ItemId, TextColor};

/// A user action, as the UI layer would report it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Place new text. Unset style fields fall back to the board defaults.
    Add {
        font_size: Option<f64>,
        font_style: Option<FontStyle>,
        color: Option<TextColor>,
        content: String,
    },
    /// Set an item's position directly.
    Move { id: ItemId, x: f64, y: f64 },
    /// One drag gesture through the given waypoints.
    Drag { id: ItemId, path: Vec<(f64, f64)> },
    Remove(ItemId),
    Undo,
    Redo,
    /// Print the current items.
    List,
    Help,
    Quit,
}

fn parse_id(token: Option<&str>) -> Result<ItemId, ShellError> {
    let token = token.ok_or_else(|| ShellError::Parse("missing item id".to_string()))?;
    token
        .parse()
        .map_err(|_| ShellError::Parse(format!("invalid item id: {token}")))
}

fn parse_coord(token: &str) -> Result<f64, ShellError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ShellError::Parse(format!("invalid coordinate: {token}")))
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(ShellError::Parse("empty command".to_string()));
        };

        match name.to_ascii_lowercase().as_str() {
            "add" => {
                let mut font_size = None;
                let mut font_style = None;
                let mut color = None;
                let mut words = Vec::new();

                for token in tokens {
                    // Options are only recognized before the text starts
                    let option = if words.is_empty() { token.split_once('=') } else { None };
                    match option {
                        Some(("size", value)) => {
                            font_size = Some(value.parse::<f64>().map_err(|_| {
                                ShellError::Parse(format!("invalid font size: {value}"))
                            })?);
                        }
                        Some(("style", value)) => font_style = Some(value.parse::<FontStyle>()?),
                        Some(("color", value)) => color = Some(value.parse::<TextColor>()?),
                        _ => words.push(token),
                    }
                }

                Ok(Command::Add {
                    font_size,
                    font_style,
                    color,
                    content: words.join(" "),
                })
            }
            "move" => {
                let id = parse_id(tokens.next())?;
                let coords: Vec<&str> = tokens.collect();
                let [x, y] = coords.as_slice() else {
                    return Err(ShellError::Parse("usage: move <id> <x> <y>".to_string()));
                };
                Ok(Command::Move {
                    id,
                    x: parse_coord(x)?,
                    y: parse_coord(y)?,
                })
            }
            "drag" => {
                let id = parse_id(tokens.next())?;
                let coords = tokens.map(parse_coord).collect::<Result<Vec<_>, _>>()?;
                if coords.is_empty() || coords.len() % 2 != 0 {
                    return Err(ShellError::Parse(
                        "usage: drag <id> <x> <y> [<x> <y> ...]".to_string(),
                    ));
                }
                let path = coords.chunks_exact(2).map(|p| (p[0], p[1])).collect();
                Ok(Command::Drag { id, path })
            }
            "remove" | "rm" => Ok(Command::Remove(parse_id(tokens.next())?)),
            "undo" => Ok(Command::Undo),
            "redo" => Ok(Command::Redo),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

/// Usage line for a command.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }

    /// Get all command help entries.
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new(
                "add [size=N] [style=S] [color=#RGB] <text>",
                "Place text at the default position",
            ),
            CommandHelp::new("move <id> <x> <y>", "Move an item (not undoable)"),
            CommandHelp::new("drag <id> <x> <y> ...", "Drag an item through waypoints"),
            CommandHelp::new("remove <id>", "Remove an item"),
            CommandHelp::new("undo", "Undo the last add or remove"),
            CommandHelp::new("redo", "Redo the last undone change"),
            CommandHelp::new("list", "Show placed items"),
            CommandHelp::new("help", "Show this help"),
            CommandHelp::new("quit", "Exit"),
        ]
    }

    /// Format every entry, one per line.
    pub fn render_all() -> String {
        let mut out = String::from("Commands:\n");
        for help in Self::all() {
            out.push_str(&format!("  {:44} {}\n", help.usage, help.description));
        }
        out
    }
}
