//! Schedule parsing for course catalog rows.
//!
//! Two engines share the [`vocab`] module and never call each other:
//!
//! - [`term`] turns the term field (`春AB 秋C`) into canonical term token groups.
//! - [`period`] turns the weekday/period field (`月1,2 集中`) into occupancy grids and
//!   renders them as tokens (`月1`, `月2`, `集中`).
//!
//! [`course`] assembles both outputs with the remaining fields of a flat catalog record.
//! All functions are pure; records can be processed on any thread.

pub mod course;
pub mod error;
pub mod period;
pub mod term;
pub mod vocab;

pub use course::{Course, Lang, RecordOptions};
pub use error::{ScheduleError, ScheduleResult};
pub use period::periods;
pub use term::terms;
