//! Period rendering
//!
//! Turns parsed blocks back into compact tokens (`月1`, `水3`), or a single marker
//! token when a block's grid is blank.

use super::grid::{PeriodBlock, PeriodFlags};
use crate::schedule::vocab::{
    Weekday, AS_NEEDED_MARKER, INTENSIVE_MARKER, NEGOTIABLE_MARKER, PERIOD_COUNT,
};

/// Marker for a blank grid: intensive, then negotiable, otherwise as-needed.
pub fn blank_marker(flags: &PeriodFlags) -> &'static str {
    if flags.intensive {
        INTENSIVE_MARKER
    } else if flags.negotiable {
        NEGOTIABLE_MARKER
    } else {
        AS_NEEDED_MARKER
    }
}

/// Tokens for one block, weekday ascending then period ascending.
pub fn render_block(block: &PeriodBlock) -> Vec<String> {
    if block.grid.is_blank() {
        return vec![blank_marker(&block.flags).to_string()];
    }
    block
        .grid
        .occupied()
        .map(|(day, period)| format!("{}{}", day.glyph(), period))
        .collect()
}

/// Tokens for every block, concatenated in clause order.
pub fn render_periods(blocks: &[PeriodBlock]) -> Vec<String> {
    blocks.iter().flat_map(render_block).collect()
}

/// Multi-line chart of a block for inspection: a flag line, a period header, then
/// one row per weekday with `#` for occupied cells.
pub fn render_chart(block: &PeriodBlock) -> String {
    let flags = &block.flags;
    let set: Vec<&str> = [
        (flags.intensive, INTENSIVE_MARKER),
        (flags.negotiable, NEGOTIABLE_MARKER),
        (flags.as_needed, AS_NEEDED_MARKER),
    ]
    .into_iter()
    .filter_map(|(on, marker)| on.then_some(marker))
    .collect();

    let mut out = String::new();
    if set.is_empty() {
        out.push_str("flags: -\n");
    } else {
        out.push_str(&format!("flags: {}\n", set.join(" ")));
    }

    out.push_str("   ");
    out.extend((1..=PERIOD_COUNT).map(|period| char::from(b'0' + period as u8)));
    out.push('\n');

    for day in Weekday::ALL {
        out.push_str(day.glyph());
        out.push(' ');
        out.extend(
            block
                .grid
                .row(day)
                .iter()
                .map(|&cell| if cell { '#' } else { '.' }),
        );
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::period::grid::Grid;

    #[test]
    fn test_blank_marker_priority() {
        let all = PeriodFlags {
            intensive: true,
            negotiable: true,
            as_needed: true,
        };
        assert_eq!(blank_marker(&all), "集中");

        let negotiable = PeriodFlags {
            negotiable: true,
            as_needed: true,
            ..PeriodFlags::default()
        };
        assert_eq!(blank_marker(&negotiable), "応談");
        assert_eq!(blank_marker(&PeriodFlags::default()), "随時");
    }

    #[test]
    fn test_occupied_grid_ignores_flags() {
        let mut grid = Grid::blank();
        grid.set(Weekday::Tuesday, 3).unwrap();
        let block = PeriodBlock {
            grid,
            flags: PeriodFlags {
                intensive: true,
                ..PeriodFlags::default()
            },
        };
        assert_eq!(render_block(&block), vec!["火3"]);
    }

    #[test]
    fn test_render_periods_keeps_clause_order() {
        let mut friday = Grid::blank();
        friday.set(Weekday::Friday, 1).unwrap();
        let mut monday = Grid::blank();
        monday.set(Weekday::Monday, 2).unwrap();
        let blocks = [
            PeriodBlock {
                grid: friday,
                flags: PeriodFlags::default(),
            },
            PeriodBlock {
                grid: monday,
                flags: PeriodFlags::default(),
            },
        ];
        assert_eq!(render_periods(&blocks), vec!["金1", "月2"]);
    }
}
