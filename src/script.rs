//! Line-based input scripts for the headless host.
//!
//! Each non-empty line is one command. A word starting with `#` begins a
//! comment, except as the argument of `color`.
//!
//! ```text
//! down 10 10
//! move 40 60
//! up 40 60
//! color #FF0000
//! brush 12
//! preset 2
//! undo
//! redo
//! clear
//! resize 800 600
//! export
//! ```

use crate::input::{Action, TouchEvent};
use std::str::FromStr;
use thiserror::Error;

/// One step of a script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Touch(TouchEvent),
    Action(Action),
    Resize { width: i32, height: i32 },
}

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected} argument(s), got {found}")]
    WrongArgumentCount {
        line: usize,
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// Parses a whole script.
///
/// Stops at the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, raw)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parses one line; comments and blank lines yield `None`.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let mut words: Vec<&str> = Vec::new();
    for word in raw.split_whitespace() {
        // The color argument may itself start with '#'
        let color_argument = words.len() == 1 && words[0].eq_ignore_ascii_case("color");
        if word.starts_with('#') && !color_argument {
            break;
        }
        words.push(word);
    }

    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };
    let command = name.to_ascii_lowercase();

    let expect = |expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptError::WrongArgumentCount {
                line,
                command: command.clone(),
                expected,
                found: args.len(),
            })
        }
    };

    let parsed = match command.as_str() {
        "down" | "move" | "up" => {
            expect(2)?;
            let x: f64 = number(line, args[0])?;
            let y: f64 = number(line, args[1])?;
            let event = match command.as_str() {
                "down" => TouchEvent::start(x, y),
                "move" => TouchEvent::move_to(x, y),
                _ => TouchEvent::end(x, y),
            };
            ScriptCommand::Touch(event)
        }
        "color" => {
            expect(1)?;
            ScriptCommand::Action(Action::SetColor(args[0].to_string()))
        }
        "brush" => {
            expect(1)?;
            ScriptCommand::Action(Action::SetBrushSize(number(line, args[0])?))
        }
        "preset" => {
            expect(1)?;
            ScriptCommand::Action(Action::SelectBrushPreset(number(line, args[0])?))
        }
        "undo" => {
            expect(0)?;
            ScriptCommand::Action(Action::Undo)
        }
        "redo" => {
            expect(0)?;
            ScriptCommand::Action(Action::Redo)
        }
        "clear" => {
            expect(0)?;
            ScriptCommand::Action(Action::Clear)
        }
        "export" => {
            expect(0)?;
            ScriptCommand::Action(Action::Export)
        }
        "resize" => {
            expect(2)?;
            ScriptCommand::Resize {
                width: number(line, args[0])?,
                height: number(line, args[1])?,
            }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: name.to_string(),
            });
        }
    };

    Ok(Some(parsed))
}

fn number<T: FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}
