//! Period Engine tests
//!
//! Raw weekday/period fields from the catalog, the grids they parse into, and the
//! tokens those grids render back to.

use kdb_schedule::schedule::period::{
    parse_clause, parse_periods, periods, render_block, render_chart, PeriodBlock, PeriodFlags,
};
use kdb_schedule::schedule::vocab::Weekday;
use kdb_schedule::schedule::ScheduleError;
use rstest::rstest;

#[rstest]
#[case("月1", &["月1"])]
#[case("月1,2", &["月1", "月2"])]
#[case("月1-3", &["月1", "月2", "月3"])]
#[case("月・水3", &["月3", "水3"])]
#[case("月3,水1", &["月3", "水1"])]
#[case("水1,月3", &["月3", "水1"])]
#[case("火3,4 金5,6", &["火3", "火4", "金5", "金6"])]
#[case("金5,6 火3,4", &["金5", "金6", "火3", "火4"])]
#[case("木5-6,金1", &["木5", "木6", "金1"])]
#[case("土1-8", &["土1", "土2", "土3", "土4", "土5", "土6", "土7", "土8"])]
#[case("集中", &["集中"])]
#[case("応談", &["応談"])]
#[case("随時", &["随時"])]
#[case("", &["随時"])]
#[case("月1 集中", &["月1", "集中"])]
#[case("他1,2", &["随時"])]
fn test_periods_render(#[case] raw: &str, #[case] expected: &[&str]) {
    let actual = periods(raw).expect("period field to parse");
    assert_eq!(actual, expected);
}

#[test]
fn test_range_marks_every_period() {
    let block = parse_clause("月1-3").unwrap();
    let cells: Vec<_> = block.grid.occupied().collect();
    assert_eq!(
        cells,
        vec![
            (Weekday::Monday, 1),
            (Weekday::Monday, 2),
            (Weekday::Monday, 3)
        ]
    );
}

#[test]
fn test_blank_grid_as_needed_only() {
    let block = PeriodBlock {
        flags: PeriodFlags {
            as_needed: true,
            ..PeriodFlags::default()
        },
        ..PeriodBlock::default()
    };
    assert_eq!(render_block(&block), vec!["随時"]);
}

#[test]
fn test_unknown_weekday_keeps_previous_day_set() {
    // `他` is not a weekday: the span keeps Monday from the first span.
    let block = parse_clause("月1,他2").unwrap();
    assert!(block.grid.get(Weekday::Monday, 1));
    assert!(block.grid.get(Weekday::Monday, 2));
    assert_eq!(block.grid.occupied().count(), 2);
}

#[test]
fn test_marker_mixed_with_text_sets_flag() {
    let blocks = parse_periods("応談(要相談)").unwrap();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].flags.negotiable);
    assert_eq!(render_block(&blocks[0]), vec!["応談"]);
}

#[rstest]
#[case("月0", 0)]
#[case("月9", 9)]
#[case("水7-9", 9)]
#[case("月1-4000000000", 4000000000)]
#[case("1-4294967295,月1", 4294967295)]
fn test_out_of_range_period(#[case] raw: &str, #[case] period: u32) {
    assert_eq!(
        periods(raw),
        Err(ScheduleError::PeriodOutOfRange { period })
    );
}

#[rstest]
#[case("月-")]
#[case("月-2")]
#[case("月99999999999")]
fn test_invalid_period_number(#[case] raw: &str) {
    let err = periods(raw).unwrap_err();
    assert!(
        matches!(err, ScheduleError::InvalidPeriodNumber { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_failing_clause_fails_whole_field() {
    assert!(periods("月1 火9").is_err());
}

#[test]
fn test_chart_snapshot() {
    let block = parse_clause("月1,2,水・金3-4").unwrap();
    insta::assert_snapshot!(render_chart(&block).trim_end(), @r"
    flags: -
       12345678
    月 ##......
    火 ........
    水 ..##....
    木 ........
    金 ..##....
    土 ........
    日 ........
    ");
}

#[test]
fn test_chart_snapshot_flags() {
    let block = parse_clause("集中・随時").unwrap();
    insta::assert_snapshot!(render_chart(&block).lines().next().unwrap(), @"flags: 集中 随時");
}
