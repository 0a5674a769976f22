//! Comma-separated occupancy table loader.
//!
//! Format: one grid row per line, values separated by `,`, each value a
//! plain decimal integer in `[0, 100]`. Surrounding spaces, tabs and
//! carriage returns around a value are ignored. A line containing only
//! whitespace and commas is skipped and does not count as a row. A single
//! comma ending the line is tolerated; anything after it, even a space or
//! carriage return, is a token.
//!
//! Errors carry 1-based positions. Token errors report the physical line
//! in the file and the token's position within that line.
//! [`LoadError::RowLengthMismatch`] reports the 1-based index of the
//! offending row among rows that were not skipped.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;
use wayfind_core::LoadStatus;

use crate::grid::{Grid, MAX_OCCUPANCY};

/// Why a table could not be turned into a [`Grid`].
#[derive(Debug)]
pub enum LoadError {
    /// The path could not be opened.
    FileOpenFailed {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The resource opened but a read failed part way through.
    ReadFailed {
        /// 1-based line being read.
        line: usize,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// No usable rows.
    EmptyFile,
    /// A row's token count differs from the first row's.
    RowLengthMismatch {
        /// 1-based index of the offending row, not counting skipped lines.
        line: usize,
        /// Token count of the first row.
        expected: usize,
        /// Token count of the offending row.
        found: usize,
    },
    /// A token is not made solely of decimal digits.
    NonIntegerToken {
        /// 1-based line.
        line: usize,
        /// 1-based token position within the line.
        column: usize,
        /// The trimmed token.
        token: String,
    },
    /// A token is an integer outside `[0, 100]`.
    OutOfRangeToken {
        /// 1-based line.
        line: usize,
        /// 1-based token position within the line.
        column: usize,
        /// The trimmed token.
        token: String,
    },
}

impl LoadError {
    /// Status classification.
    pub fn status(&self) -> LoadStatus {
        match self {
            Self::FileOpenFailed { .. } | Self::ReadFailed { .. } => LoadStatus::FileOpenFailed,
            Self::EmptyFile => LoadStatus::EmptyFile,
            Self::RowLengthMismatch { .. } => LoadStatus::RowLengthMismatch,
            Self::NonIntegerToken { .. } => LoadStatus::NonIntegerToken,
            Self::OutOfRangeToken { .. } => LoadStatus::OutOfRangeToken,
        }
    }

    /// 1-based line, where one can be attributed.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ReadFailed { line, .. }
            | Self::RowLengthMismatch { line, .. }
            | Self::NonIntegerToken { line, .. }
            | Self::OutOfRangeToken { line, .. } => Some(*line),
            Self::FileOpenFailed { .. } | Self::EmptyFile => None,
        }
    }

    /// 1-based column, where one can be attributed.
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::NonIntegerToken { column, .. } | Self::OutOfRangeToken { column, .. } => {
                Some(*column)
            }
            _ => None,
        }
    }

    /// Line as a signed code: `-1` when not attributable.
    pub fn line_code(&self) -> i64 {
        self.line().map_or(-1, |l| l as i64)
    }

    /// Column as a signed code: `-1` when not attributable.
    pub fn column_code(&self) -> i64 {
        self.column().map_or(-1, |c| c as i64)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpenFailed { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::ReadFailed { line, source } => {
                write!(f, "read failed at line {line}: {source}")
            }
            Self::EmptyFile => write!(f, "no occupancy rows found"),
            Self::RowLengthMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "row length mismatch at line {line}: {found} values, expected {expected}"
            ),
            Self::NonIntegerToken {
                line,
                column,
                token,
            } => write!(
                f,
                "non-integer token {token:?} at line {line}, column {column}"
            ),
            Self::OutOfRangeToken {
                line,
                column,
                token,
            } => write!(
                f,
                "value {token} outside [0, {MAX_OCCUPANCY}] at line {line}, column {column}"
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileOpenFailed { source, .. } | Self::ReadFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load an occupancy table from `path`.
pub fn load_occupancy_csv(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::FileOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_occupancy_csv(BufReader::new(file))
}

/// Like [`load_occupancy_csv`] but discards the diagnostic.
pub fn try_load_occupancy_csv(path: impl AsRef<Path>) -> Option<Grid> {
    load_occupancy_csv(path).ok()
}

/// Parse an occupancy table from any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so
/// they surface as [`LoadError::NonIntegerToken`] at their position.
pub fn parse_occupancy_csv<R: BufRead>(reader: R) -> Result<Grid, LoadError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for (i, raw) in reader.split(b'\n').enumerate() {
        let line_no = i + 1;
        let raw = raw.map_err(|source| LoadError::ReadFailed {
            line: line_no,
            source,
        })?;
        let line = String::from_utf8_lossy(&raw);

        if is_skippable(&line) {
            debug!(line = line_no, "skipping blank line");
            continue;
        }

        rows.push(parse_row(&line, line_no)?);
    }

    let Some(first) = rows.first() else {
        return Err(LoadError::EmptyFile);
    };
    let cols = first.len();
    for (r, row) in rows.iter().enumerate().skip(1) {
        if row.len() != cols {
            return Err(LoadError::RowLengthMismatch {
                line: r + 1,
                expected: cols,
                found: row.len(),
            });
        }
    }

    let n_rows = rows.len();
    let occupancy: Vec<u8> = rows.into_iter().flatten().collect();
    debug!(rows = n_rows, cols, "loaded occupancy table");
    Ok(Grid::from_raw_parts(n_rows, cols, occupancy))
}

fn is_skippable(line: &str) -> bool {
    line.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | ','))
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r'))
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<u8>, LoadError> {
    let mut tokens: Vec<&str> = line.split(',').collect();
    // "a,b," yields a trailing empty piece that is not a token.
    if tokens.last() == Some(&"") {
        tokens.pop();
    }

    let mut row = Vec::with_capacity(tokens.len());
    for (j, raw) in tokens.into_iter().enumerate() {
        let column = j + 1;
        let token = trim_token(raw);
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LoadError::NonIntegerToken {
                line: line_no,
                column,
                token: token.to_string(),
            });
        }
        // Digit runs too long for an i32 do not parse at all.
        let Ok(value) = token.parse::<i32>() else {
            return Err(LoadError::NonIntegerToken {
                line: line_no,
                column,
                token: token.to_string(),
            });
        };
        match u8::try_from(value) {
            Ok(v) if v <= MAX_OCCUPANCY => row.push(v),
            _ => {
                return Err(LoadError::OutOfRangeToken {
                    line: line_no,
                    column,
                    token: token.to_string(),
                })
            }
        }
    }
    Ok(row)
}
