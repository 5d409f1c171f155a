//! Period clause parsing
//!
//! A raw period field is a space-separated list of clauses, each a comma-separated
//! list of spans:
//!
//!     月1,2 水・金3-4 集中
//!
//! Each span contributes a weekday part (everything but digits and hyphens, split on
//! `・`) and a period part (only digits and hyphens). A span without a recognized
//! weekday reuses the day set of the previous span in the same clause, so `月1,2`
//! covers Monday periods 1 and 2.

use once_cell::sync::Lazy;
use regex::Regex;

use super::grid::{Grid, PeriodBlock, PeriodFlags};
use crate::schedule::error::{ScheduleError, ScheduleResult};
use crate::schedule::vocab::{
    Weekday, AS_NEEDED_MARKER, DAY_SEPARATOR, GROUP_SEPARATOR, INTENSIVE_MARKER,
    NEGOTIABLE_MARKER, PERIOD_COUNT, SPAN_SEPARATOR,
};

static PERIOD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9\-]").unwrap());
static NON_PERIOD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9\-]").unwrap());

/// The period part of a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSpec {
    /// No digits in the span; the grid is left alone.
    Unspecified,
    /// Explicit period numbers, ranges already expanded.
    Periods(Vec<u32>),
}

/// Weekdays named in a span, in order of appearance. Unknown pieces are dropped.
pub fn span_days(span: &str) -> Vec<Weekday> {
    PERIOD_CHARS
        .replace_all(span, "")
        .split(DAY_SEPARATOR)
        .filter_map(|piece| {
            let day = Weekday::from_glyph(piece);
            if day.is_none() && !piece.is_empty() {
                tracing::debug!(piece, in_span = span, "dropping unrecognized weekday");
            }
            day
        })
        .collect()
}

/// Period numbers named in a span. `3-5` expands inclusively to `[3, 4, 5]`.
///
/// Numbers are checked against the grid width before any range is expanded, so a
/// number outside `1..=8` is `PeriodOutOfRange` even when no weekday is in scope.
/// A descending range names nothing.
pub fn span_periods(span: &str) -> ScheduleResult<PeriodSpec> {
    let digits = NON_PERIOD_CHARS.replace_all(span, "");
    if digits.is_empty() {
        return Ok(PeriodSpec::Unspecified);
    }

    if digits.contains('-') {
        let mut bounds = digits.split('-');
        let start = parse_number(bounds.next().unwrap_or_default(), span)?;
        let end = parse_number(bounds.next().unwrap_or_default(), span)?;
        if start > end {
            return Ok(PeriodSpec::Periods(Vec::new()));
        }
        check_period(start)?;
        check_period(end)?;
        return Ok(PeriodSpec::Periods((start..=end).collect()));
    }

    let period = parse_number(&digits, span)?;
    check_period(period)?;
    Ok(PeriodSpec::Periods(vec![period]))
}

fn check_period(period: u32) -> ScheduleResult<()> {
    if (1..=PERIOD_COUNT as u32).contains(&period) {
        Ok(())
    } else {
        Err(ScheduleError::PeriodOutOfRange { period })
    }
}

fn parse_number(text: &str, span: &str) -> ScheduleResult<u32> {
    text.parse()
        .map_err(|source| ScheduleError::InvalidPeriodNumber {
            span: span.to_string(),
            source,
        })
}

/// Marker flags by substring search over the whole clause.
pub fn clause_flags(clause: &str) -> PeriodFlags {
    PeriodFlags {
        intensive: clause.contains(INTENSIVE_MARKER),
        negotiable: clause.contains(NEGOTIABLE_MARKER),
        as_needed: clause.contains(AS_NEEDED_MARKER),
    }
}

/// State carried from span to span inside one clause.
#[derive(Debug, Default)]
struct ClauseScan {
    days: Vec<Weekday>,
    grid: Grid,
}

impl ClauseScan {
    fn step(mut self, span: &str) -> ScheduleResult<Self> {
        let days = span_days(span);
        if !days.is_empty() {
            self.days = days;
        }
        if let PeriodSpec::Periods(periods) = span_periods(span)? {
            for &day in &self.days {
                for &period in &periods {
                    self.grid.set(day, period)?;
                }
            }
        }
        Ok(self)
    }
}

/// Parse one clause into a grid and its flags.
///
/// The day set starts empty, so periods in a leading span with no weekday mark nothing.
pub fn parse_clause(clause: &str) -> ScheduleResult<PeriodBlock> {
    let flags = clause_flags(clause);
    let scan = clause
        .split(SPAN_SEPARATOR)
        .try_fold(ClauseScan::default(), ClauseScan::step)?;
    tracing::trace!(clause, ?flags, "parsed period clause");
    Ok(PeriodBlock {
        grid: scan.grid,
        flags,
    })
}

/// Parse a raw period field into one block per space-separated clause.
pub fn parse_periods(raw: &str) -> ScheduleResult<Vec<PeriodBlock>> {
    raw.split(GROUP_SEPARATOR).map(parse_clause).collect()
}
