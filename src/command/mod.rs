
use crate::error::PathError;

/// Whether the parameters of a command are absolute coordinates or offsets from the current point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Absolute,
    Relative,
}

/// Kind of a path command, independent of its absolute or relative variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    Cubic,
    SmoothCubic,
    Quadratic,
    SmoothQuadratic,
    Arc,
    Close,
}

/// Named slot of a parameter group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    X,
    Y,
    RadiusX,
    RadiusY,
    Angle,
    LargeArcFlag,
    SweepFlag,
}

impl Parameter {
    /// Flags are single digits which do not need a separator
    pub fn is_flag(&self) -> bool {
        matches!(self, Parameter::LargeArcFlag | Parameter::SweepFlag)
    }
}

const POSITION: &[Parameter] = &[Parameter::X, Parameter::Y];
const HORIZONTAL: &[Parameter] = &[Parameter::X];
const VERTICAL: &[Parameter] = &[Parameter::Y];
const ARC: &[Parameter] = &[
    Parameter::RadiusX,
    Parameter::RadiusY,
    Parameter::Angle,
    Parameter::LargeArcFlag,
    Parameter::SweepFlag,
    Parameter::X,
    Parameter::Y,
];

impl CommandKind {
    /// Resolve a command letter, the letter case encoding the position
    pub fn from_letter(letter: char) -> Option<(Self, Position)> {
        let position = if letter.is_ascii_lowercase() {
            Position::Relative
        } else {
            Position::Absolute
        };
        let kind = match letter.to_ascii_lowercase() {
            'm' => CommandKind::Move,
            'l' => CommandKind::Line,
            'h' => CommandKind::HorizontalLine,
            'v' => CommandKind::VerticalLine,
            'c' => CommandKind::Cubic,
            's' => CommandKind::SmoothCubic,
            'q' => CommandKind::Quadratic,
            't' => CommandKind::SmoothQuadratic,
            'a' => CommandKind::Arc,
            'z' => CommandKind::Close,
            _ => return None,
        };
        Some((kind, position))
    }

    /// Command letter for the given position
    pub fn letter(&self, position: Position) -> char {
        let letter = match self {
            CommandKind::Move => 'm',
            CommandKind::Line => 'l',
            CommandKind::HorizontalLine => 'h',
            CommandKind::VerticalLine => 'v',
            CommandKind::Cubic => 'c',
            CommandKind::SmoothCubic => 's',
            CommandKind::Quadratic => 'q',
            CommandKind::SmoothQuadratic => 't',
            CommandKind::Arc => 'a',
            CommandKind::Close => 'z',
        };
        match position {
            Position::Absolute => letter.to_ascii_uppercase(),
            Position::Relative => letter,
        }
    }

    /// Parameters of a single group, in textual order
    pub fn parameters(&self) -> &'static [Parameter] {
        match self {
            CommandKind::Move
            | CommandKind::Line
            | CommandKind::Cubic
            | CommandKind::SmoothCubic
            | CommandKind::Quadratic
            | CommandKind::SmoothQuadratic => POSITION,
            CommandKind::HorizontalLine => HORIZONTAL,
            CommandKind::VerticalLine => VERTICAL,
            CommandKind::Arc => ARC,
            CommandKind::Close => &[],
        }
    }

    /// Number of groups drawing one segment
    pub fn groups_per_segment(&self) -> usize {
        match self {
            CommandKind::Cubic => 3,
            CommandKind::SmoothCubic | CommandKind::Quadratic => 2,
            _ => 1,
        }
    }

    /// Number of numeric parameters drawing one segment
    pub fn segment_arity(&self) -> usize {
        self.parameters().len() * self.groups_per_segment()
    }
}

/// One parameter tuple of a command, holding the raw decimal text of each parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    kind: CommandKind,
    position: Position,
    values: Vec<String>,
}

impl Group {
    pub(crate) fn new(kind: CommandKind, position: Position, values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), kind.parameters().len());
        Self {
            kind,
            position,
            values,
        }
    }

    /// Raw text of a parameter, `None` if the command kind does not carry it
    pub fn get(&self, parameter: Parameter) -> Option<&str> {
        self.kind
            .parameters()
            .iter()
            .position(|p| *p == parameter)
            .map(|i| self.values[i].as_str())
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Numeric value of a parameter
    /// # Failures
    /// - if the command kind does not carry the parameter
    /// - if its text is not a decimal number
    pub fn value(&self, parameter: Parameter) -> Result<f64, PathError> {
        let command = self.kind.letter(self.position);
        let raw = self
            .get(parameter)
            .ok_or(PathError::MissingParameter { command, parameter })?;
        raw.parse::<f64>().map_err(|_| PathError::InvalidNumber {
            command,
            value: raw.to_string(),
        })
    }

    /// Numeric value of a flag parameter, any non-zero value being `true`
    pub fn flag(&self, parameter: Parameter) -> Result<bool, PathError> {
        self.value(parameter).map(|v| v != 0.)
    }
}

/// A parsed path command with its raw parameter groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    kind: CommandKind,
    position: Position,
    groups: Vec<Group>,
}

impl Command {
    pub fn new(kind: CommandKind, position: Position, groups: Vec<Group>) -> Self {
        Self {
            kind,
            position,
            groups,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_relative(&self) -> bool {
        self.position == Position::Relative
    }

    pub fn letter(&self) -> char {
        self.kind.letter(self.position)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterate over the groups drawing each segment of the command
    pub fn segments(&self) -> impl Iterator<Item = &[Group]> {
        self.groups.chunks(self.kind.groups_per_segment())
    }
}
