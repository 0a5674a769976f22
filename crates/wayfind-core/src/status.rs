//! Terminal classifications for planning and loading.
//!
//! [`PlanStatus`] codes double as process exit codes and as the C ABI
//! status values. Code `1` is deliberately unused: it is left for generic
//! failures at a higher layer (e.g. a CLI that could not load its map).

use std::fmt;

/// Terminal classification of a single `plan` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanStatus {
    /// A path was found.
    Ok,
    /// The request was well-formed but no route connects start and goal.
    NoPath,
    /// Start or goal lies on a blocked cell.
    InvalidArg,
    /// Start or goal lies outside the grid.
    OutOfBounds,
    /// The grid itself is malformed.
    MapError,
}

impl PlanStatus {
    /// All statuses, in code order.
    pub const ALL: [PlanStatus; 5] = [
        PlanStatus::Ok,
        PlanStatus::NoPath,
        PlanStatus::InvalidArg,
        PlanStatus::OutOfBounds,
        PlanStatus::MapError,
    ];

    /// Stable numeric code, usable as a process exit code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::NoPath => 2,
            Self::InvalidArg => 3,
            Self::OutOfBounds => 4,
            Self::MapError => 5,
        }
    }

    /// Inverse of [`code`](Self::code). Returns `None` for unknown codes.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            2 => Some(Self::NoPath),
            3 => Some(Self::InvalidArg),
            4 => Some(Self::OutOfBounds),
            5 => Some(Self::MapError),
            _ => None,
        }
    }

    /// Short snake_case name, used in JSON output and C diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoPath => "no_path",
            Self::InvalidArg => "invalid_arg",
            Self::OutOfBounds => "out_of_bounds",
            Self::MapError => "map_error",
        }
    }

    /// `true` only for [`PlanStatus::Ok`].
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal classification of an occupancy-table load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    /// The table parsed into a grid.
    Ok,
    /// The resource could not be opened or read.
    FileOpenFailed,
    /// The resource contained no usable rows.
    EmptyFile,
    /// A row's token count differs from the first row's.
    RowLengthMismatch,
    /// A token is not a plain decimal integer.
    NonIntegerToken,
    /// A token is an integer outside `[0, 100]`.
    OutOfRangeToken,
}

impl LoadStatus {
    /// Short snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::FileOpenFailed => "file_open_failed",
            Self::EmptyFile => "empty_file",
            Self::RowLengthMismatch => "row_length_mismatch",
            Self::NonIntegerToken => "non_integer_token",
            Self::OutOfRangeToken => "out_of_range_token",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
