//! Rendering plan outcomes.

use std::io::{self, Write};

use serde::Serialize;
use wayfind_core::Point;
use wayfind_search::{outcome_status, PlanOutcome};

/// Line-oriented output. Success goes to `out`; failure to `err`.
pub struct TextReport<'a> {
    pub outcome: &'a PlanOutcome,
    pub print_path: bool,
    pub explain: bool,
}

impl TextReport<'_> {
    pub fn write(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        match self.outcome {
            Ok(result) => {
                writeln!(out, "found: yes")?;
                if self.print_path {
                    for &cell in &result.path {
                        let p = Point::from(cell);
                        writeln!(out, "{} {}", p.x, p.y)?;
                    }
                }
                if self.explain {
                    writeln!(out, "expanded: {}", result.stats.expanded)?;
                    writeln!(out, "cost: {}", result.stats.cost)?;
                    writeln!(out, "time_ms: {}", result.stats.elapsed_ms)?;
                    writeln!(out, "length_cells: {}", result.path.len())?;
                }
            }
            Err(e) => {
                if self.explain {
                    writeln!(err, "{e}")?;
                }
                writeln!(err, "found: no")?;
            }
        }
        Ok(())
    }
}

/// Single-object JSON output.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    status: &'static str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expanded: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length_cells: Option<usize>,
    /// `[x, y]` pairs, start first.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<[i32; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl JsonReport {
    pub fn new(outcome: &PlanOutcome, include_path: bool) -> Self {
        let status = outcome_status(outcome).name();
        match outcome {
            Ok(r) => Self {
                status,
                found: true,
                cost: Some(r.stats.cost),
                expanded: Some(r.stats.expanded),
                time_ms: Some(r.stats.elapsed_ms),
                length_cells: Some(r.path.len()),
                path: include_path.then(|| {
                    r.path
                        .iter()
                        .map(|&c| {
                            let p = Point::from(c);
                            [p.x, p.y]
                        })
                        .collect()
                }),
                message: None,
            },
            Err(e) => Self {
                status,
                found: false,
                cost: None,
                expanded: None,
                time_ms: None,
                length_cells: None,
                path: None,
                message: Some(e.to_string()),
            },
        }
    }
}
