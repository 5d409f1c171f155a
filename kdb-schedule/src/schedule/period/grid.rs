//! Occupancy grid and clause flags

use crate::schedule::error::{ScheduleError, ScheduleResult};
use crate::schedule::vocab::{Weekday, PERIOD_COUNT, WEEKDAY_COUNT};

/// Weekday × period occupancy. Rows are [`Weekday::ordinal`], columns are the
/// 1-based period number minus one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[bool; PERIOD_COUNT]; WEEKDAY_COUNT],
}

impl Grid {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| !cell)
    }

    /// Whether `day` meets at 1-based `period`. Out-of-range periods are never occupied.
    pub fn get(&self, day: Weekday, period: u32) -> bool {
        column(period).is_some_and(|col| self.cells[day.ordinal()][col])
    }

    /// Mark `day` at 1-based `period`.
    pub fn set(&mut self, day: Weekday, period: u32) -> ScheduleResult<()> {
        let col = column(period).ok_or(ScheduleError::PeriodOutOfRange { period })?;
        self.cells[day.ordinal()][col] = true;
        Ok(())
    }

    /// Occupied cells in row-major order (weekday ascending, then period ascending).
    pub fn occupied(&self) -> impl Iterator<Item = (Weekday, u32)> + '_ {
        Weekday::ALL.into_iter().flat_map(move |day| {
            (1..=PERIOD_COUNT as u32).filter_map(move |period| {
                self.get(day, period).then_some((day, period))
            })
        })
    }

    pub fn row(&self, day: Weekday) -> &[bool; PERIOD_COUNT] {
        &self.cells[day.ordinal()]
    }
}

fn column(period: u32) -> Option<usize> {
    let col = (period as usize).checked_sub(1)?;
    (col < PERIOD_COUNT).then_some(col)
}

/// Marker flags found in a clause. Independent of each other at this level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodFlags {
    pub intensive: bool,
    pub negotiable: bool,
    pub as_needed: bool,
}

/// The parsed form of one period clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodBlock {
    pub grid: Grid,
    pub flags: PeriodFlags,
}
