//! Vocabulary
//!
//! The fixed glyph sets shared by the term and period engines. Everything here is
//! read-only and ordinal-indexed: the ordinals double as array indices into the
//! season tables and the occupancy grid, and they fix the order tokens are rendered in.

use std::fmt;

/// Number of weekday rows in an occupancy grid.
pub const WEEKDAY_COUNT: usize = 7;
/// Number of period columns in an occupancy grid.
pub const PERIOD_COUNT: usize = 8;
/// Number of sub-terms (A, B, C) per season.
pub const SUBTERM_COUNT: usize = 3;

/// Marker for intensive (block) courses.
pub const INTENSIVE_MARKER: &str = "集中";
/// Marker for courses scheduled by arrangement.
pub const NEGOTIABLE_MARKER: &str = "応談";
/// Marker for courses held as needed. Also the fallback for blank grids.
pub const AS_NEEDED_MARKER: &str = "随時";
/// Sentinel term token for courses with no term information.
pub const YEAR_ROUND_MARKER: &str = "通年";
/// Character that marks a vacation slot inside a term group.
pub const VACATION_MARKER: char = '休';
/// Separator between weekdays sharing the same periods, as in `月・水3`.
pub const DAY_SEPARATOR: char = '・';
/// Separator between term groups and between period clauses.
pub const GROUP_SEPARATOR: char = ' ';
/// Separator between spans inside a period clause.
pub const SPAN_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; WEEKDAY_COUNT] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Weekday::Monday => "月",
            Weekday::Tuesday => "火",
            Weekday::Wednesday => "水",
            Weekday::Thursday => "木",
            Weekday::Friday => "金",
            Weekday::Saturday => "土",
            Weekday::Sunday => "日",
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Exact match against the weekday glyphs; anything else is not a weekday.
    pub fn from_glyph(text: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|day| day.glyph() == text)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Fall,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Spring, Season::Fall];

    pub fn glyph(self) -> &'static str {
        match self {
            Season::Spring => "春",
            Season::Fall => "秋",
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Offset of this season's first sub-term in the module-slot vocabulary.
    pub fn slot_offset(self) -> usize {
        self.ordinal() * SUBTERM_COUNT
    }

    pub fn from_char(c: char) -> Option<Season> {
        match c {
            '春' => Some(Season::Spring),
            '秋' => Some(Season::Fall),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Sub-term letter within a season. Declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubTerm {
    A,
    B,
    C,
}

impl SubTerm {
    pub const ALL: [SubTerm; SUBTERM_COUNT] = [SubTerm::A, SubTerm::B, SubTerm::C];

    pub fn letter(self) -> char {
        match self {
            SubTerm::A => 'A',
            SubTerm::B => 'B',
            SubTerm::C => 'C',
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<SubTerm> {
        match c {
            'A' => Some(SubTerm::A),
            'B' => Some(SubTerm::B),
            'C' => Some(SubTerm::C),
            _ => None,
        }
    }
}

/// Where a module slot lands when a term group is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    SeasonLetter(Season, SubTerm),
    Special,
}

/// One of the eight canonical term symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleSlot {
    SpringA,
    SpringB,
    SpringC,
    FallA,
    FallB,
    FallC,
    SummerBreak,
    SpringBreak,
}

impl ModuleSlot {
    pub const ALL: [ModuleSlot; 8] = [
        ModuleSlot::SpringA,
        ModuleSlot::SpringB,
        ModuleSlot::SpringC,
        ModuleSlot::FallA,
        ModuleSlot::FallB,
        ModuleSlot::FallC,
        ModuleSlot::SummerBreak,
        ModuleSlot::SpringBreak,
    ];

    /// Ordinal of the first break slot; break slots are addressed as this plus a season ordinal.
    pub const BREAK_OFFSET: usize = 6;

    pub fn from_ordinal(ordinal: usize) -> Option<ModuleSlot> {
        ModuleSlot::ALL.get(ordinal).copied()
    }

    pub fn from_season_letter(season: Season, letter: SubTerm) -> ModuleSlot {
        ModuleSlot::ALL[season.slot_offset() + letter.ordinal()]
    }

    /// The break slot addressed from inside a group whose current season is `season`.
    ///
    /// Spring lands on the summer break and Fall on the spring break. A group such as
    /// `春季休業中` sets the season to Spring before reaching `休`, so it comes out as
    /// `夏季休業中`. The pairing is preserved as found and has not been confirmed.
    pub fn vacation_for(season: Season) -> ModuleSlot {
        ModuleSlot::ALL[ModuleSlot::BREAK_OFFSET + season.ordinal()]
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ModuleSlot::SpringA => "春A",
            ModuleSlot::SpringB => "春B",
            ModuleSlot::SpringC => "春C",
            ModuleSlot::FallA => "秋A",
            ModuleSlot::FallB => "秋B",
            ModuleSlot::FallC => "秋C",
            ModuleSlot::SummerBreak => "夏季休業中",
            ModuleSlot::SpringBreak => "春季休業中",
        }
    }

    pub fn kind(self) -> SlotKind {
        match self {
            ModuleSlot::SpringA => SlotKind::SeasonLetter(Season::Spring, SubTerm::A),
            ModuleSlot::SpringB => SlotKind::SeasonLetter(Season::Spring, SubTerm::B),
            ModuleSlot::SpringC => SlotKind::SeasonLetter(Season::Spring, SubTerm::C),
            ModuleSlot::FallA => SlotKind::SeasonLetter(Season::Fall, SubTerm::A),
            ModuleSlot::FallB => SlotKind::SeasonLetter(Season::Fall, SubTerm::B),
            ModuleSlot::FallC => SlotKind::SeasonLetter(Season::Fall, SubTerm::C),
            ModuleSlot::SummerBreak | ModuleSlot::SpringBreak => SlotKind::Special,
        }
    }
}

impl fmt::Display for ModuleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
