
use std::mem;

use itertools::Itertools;

use crate::{
    command::{Command, CommandKind, Group, Parameter, Position},
    error::PathError,
};

/// Parse path data into a sequence of commands holding the raw text of their parameters.
///
/// Numbers are scanned left to right:
/// - whitespace and commas are optional separators
/// - a sign always starts a new number
/// - a `.` starts a new number when the current one already has one, ie. `1.2.3` reads as `1.2` and `0.3`
/// - arc flags are exactly one digit, ie. `11` reads as two flags
///
/// # Failures
/// - an unknown command letter, or a character which is neither a number nor a separator
/// - a command whose parameter count does not fit its arity
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
///
/// let commands = parse("M0 0L1.2.3").unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[1].kind(), CommandKind::Line);
/// assert_eq!(commands[1].groups()[0].get(Parameter::X), Some("1.2"));
/// assert_eq!(commands[1].groups()[0].get(Parameter::Y), Some("0.3"));
/// ```
pub fn parse(text: &str) -> Result<Vec<Command>, PathError> {
    let mut commands = vec![];
    let mut scanner: Option<ParameterScanner> = None;

    for (position, character) in text.chars().enumerate() {
        if character.is_ascii_alphabetic() {
            let (kind, variant) =
                CommandKind::from_letter(character).ok_or(PathError::Grammar {
                    character,
                    position,
                })?;
            if let Some(previous) = scanner.take() {
                commands.push(previous.finish()?);
            }
            scanner = Some(ParameterScanner::new(kind, variant));
            continue;
        }

        match scanner.as_mut() {
            Some(scanner) => scanner.push(character, position)?,
            None if is_separator(character) => {}
            None => {
                return Err(PathError::Grammar {
                    character,
                    position,
                })
            }
        }
    }

    if let Some(last) = scanner {
        commands.push(last.finish()?);
    }

    Ok(commands)
}

fn is_separator(character: char) -> bool {
    character.is_whitespace() || character == ','
}

/// Accumulates the parameter region of a single command
struct ParameterScanner {
    kind: CommandKind,
    position: Position,
    numbers: Vec<String>,
    token: String,
}

impl ParameterScanner {
    fn new(kind: CommandKind, position: Position) -> Self {
        Self {
            kind,
            position,
            numbers: vec![],
            token: String::new(),
        }
    }

    /// Parameter slot the current token is filling
    fn parameter(&self) -> Option<Parameter> {
        let parameters = self.kind.parameters();
        if parameters.is_empty() {
            None
        } else {
            Some(parameters[self.numbers.len() % parameters.len()])
        }
    }

    fn flush(&mut self) {
        if !self.token.is_empty() {
            self.numbers.push(mem::take(&mut self.token));
        }
    }

    /// Flags are a single `0` or `1` digit, without sign or decimal point
    fn reject_in_flag(&self, character: char, position: usize) -> Result<(), PathError> {
        if self.parameter().is_some_and(|p| p.is_flag()) {
            Err(PathError::Grammar {
                character,
                position,
            })
        } else {
            Ok(())
        }
    }

    fn push(&mut self, character: char, position: usize) -> Result<(), PathError> {
        match character {
            c if is_separator(c) => self.flush(),
            '-' | '+' => {
                self.flush();
                self.reject_in_flag(character, position)?;
                self.token.push(character);
            }
            '.' => {
                if self.token.contains('.') {
                    self.flush();
                    self.reject_in_flag(character, position)?;
                    self.token.push_str("0.");
                } else {
                    self.reject_in_flag(character, position)?;
                    self.token.push('.');
                }
            }
            '0'..='9' => {
                self.token.push(character);
                if self.parameter().is_some_and(|p| p.is_flag()) {
                    self.flush();
                }
            }
            _ => {
                return Err(PathError::Grammar {
                    character,
                    position,
                })
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Command, PathError> {
        self.flush();

        let arity = self.kind.segment_arity();
        let found = self.numbers.len();
        let fits = if arity == 0 {
            found == 0
        } else {
            found > 0 && found % arity == 0
        };
        if !fits {
            return Err(PathError::Arity {
                command: self.kind.letter(self.position),
                expected: arity,
                found,
            });
        }

        let (kind, position) = (self.kind, self.position);
        let groups = if arity == 0 {
            vec![]
        } else {
            self.numbers
                .chunks(kind.parameters().len())
                .map(|values| Group::new(kind, position, values.to_vec()))
                .collect_vec()
        };

        Ok(Command::new(kind, position, groups))
    }
}
