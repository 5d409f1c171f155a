//! Period Engine
//!
//! Parses the weekday/period field into occupancy grids (see [`parsing`]) and renders
//! them back into compact tokens (see [`rendering`]). Each space-separated clause is
//! parsed and rendered on its own; a failing clause fails the whole field.

pub mod grid;
pub mod parsing;
pub mod rendering;

pub use grid::{Grid, PeriodBlock, PeriodFlags};
pub use parsing::{parse_clause, parse_periods, PeriodSpec};
pub use rendering::{blank_marker, render_block, render_chart, render_periods};

use crate::schedule::error::ScheduleResult;

/// Parse and render a raw period field.
pub fn periods(raw: &str) -> ScheduleResult<Vec<String>> {
    Ok(render_periods(&parse_periods(raw)?))
}
