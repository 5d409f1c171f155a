//! Error types for schedule parsing and course assembly

use crate::schedule::vocab::Season;
use std::num::ParseIntError;

/// Errors that abort the conversion of a single course.
///
/// Unknown weekday glyphs and unknown term characters are not errors: they are
/// dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A season token was requested for a table with no sub-term set.
    #[error("no module found in the {season} table")]
    EmptySeasonTable { season: Season },

    /// The digit residue of a period span is not an integer.
    #[error("invalid period number in span '{span}': {source}")]
    InvalidPeriodNumber {
        span: String,
        #[source]
        source: ParseIntError,
    },

    /// A period number that does not fit the eight-slot grid.
    #[error("period {period} is outside 1..=8")]
    PeriodOutOfRange { period: u32 },

    /// A flat record lacks one of the catalog columns the adapter reads.
    #[error("missing catalog field '{field}'")]
    MissingField { field: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
