//! Term Engine
//!
//! Turns the raw term field of a catalog row (e.g. `春AB 秋C`) into canonical term
//! tokens. Parsing and normalization are separate passes:
//!
//! 1. [`parse_terms`] splits the field into space-separated groups and scans each
//!    group's characters left to right, carrying the current season. Every sub-term
//!    letter or vacation marker seen while a season is active becomes a [`ModuleSlot`].
//! 2. [`normalize_terms`] folds each group's slots into per-season tables and renders
//!    one combined token per season (`春AC`), followed by the break slots verbatim.
//!
//! Characters outside the vocabulary are skipped during the scan.

use crate::schedule::error::{ScheduleError, ScheduleResult};
use crate::schedule::vocab::{
    ModuleSlot, Season, SlotKind, SubTerm, GROUP_SEPARATOR, SUBTERM_COUNT, VACATION_MARKER,
    YEAR_ROUND_MARKER,
};

/// The module slots parsed from one raw group, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermGroup {
    slots: Vec<ModuleSlot>,
}

impl TermGroup {
    pub fn new(slots: Vec<ModuleSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[ModuleSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.slots.iter().map(|slot| slot.label()).collect()
    }
}

/// Scan state carried across the characters of a single group.
#[derive(Debug, Default)]
struct GroupScan {
    season: Option<Season>,
    slots: Vec<ModuleSlot>,
}

impl GroupScan {
    fn step(mut self, c: char) -> Self {
        if let Some(season) = Season::from_char(c) {
            self.season = Some(season);
        }
        let Some(season) = self.season else {
            return self;
        };
        if let Some(letter) = SubTerm::from_char(c) {
            self.slots.push(ModuleSlot::from_season_letter(season, letter));
        } else if c == VACATION_MARKER {
            self.slots.push(ModuleSlot::vacation_for(season));
        }
        self
    }
}

/// Parse a single group. The season starts unset, so letters before the first
/// season glyph are dropped.
pub fn parse_group(group: &str) -> TermGroup {
    let scan = group.chars().fold(GroupScan::default(), GroupScan::step);
    tracing::trace!(group, slots = scan.slots.len(), "parsed term group");
    TermGroup::new(scan.slots)
}

/// Parse a raw term field into one [`TermGroup`] per space-separated group.
///
/// Empty groups (from leading, trailing or doubled spaces) are kept.
pub fn parse_terms(raw: &str) -> Vec<TermGroup> {
    raw.split(GROUP_SEPARATOR).map(parse_group).collect()
}

/// Which sub-terms of one season a group covers, indexed by [`SubTerm::ordinal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonTable([bool; SUBTERM_COUNT]);

impl SeasonTable {
    pub fn new(entries: [bool; SUBTERM_COUNT]) -> Self {
        Self(entries)
    }

    pub fn mark(&mut self, letter: SubTerm) {
        self.0[letter.ordinal()] = true;
    }

    pub fn contains(&self, letter: SubTerm) -> bool {
        self.0[letter.ordinal()]
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&set| set)
    }

    /// Render the combined token: the season glyph followed by the set letters in A, B, C order.
    ///
    /// `[true, false, true]` for Fall renders `秋AC`. An all-false table is an error.
    pub fn render(&self, season: Season) -> ScheduleResult<String> {
        if !self.any() {
            return Err(ScheduleError::EmptySeasonTable { season });
        }
        let mut token = String::from(season.glyph());
        token.extend(
            SubTerm::ALL
                .into_iter()
                .filter(|&letter| self.contains(letter))
                .map(SubTerm::letter),
        );
        Ok(token)
    }
}

/// Normalize one group: `[spring token] [fall token] [break slots...]`.
pub fn normalize_group(group: &TermGroup) -> ScheduleResult<Vec<String>> {
    let mut spring = SeasonTable::default();
    let mut fall = SeasonTable::default();
    let mut specials = Vec::new();

    for slot in group.slots() {
        match slot.kind() {
            SlotKind::SeasonLetter(Season::Spring, letter) => spring.mark(letter),
            SlotKind::SeasonLetter(Season::Fall, letter) => fall.mark(letter),
            SlotKind::Special => specials.push(slot.label().to_string()),
        }
    }

    let mut tokens = Vec::with_capacity(2 + specials.len());
    if spring.any() {
        tokens.push(spring.render(Season::Spring)?);
    }
    if fall.any() {
        tokens.push(fall.render(Season::Fall)?);
    }
    tokens.extend(specials);
    Ok(tokens)
}

/// Normalize every group. When no group yields a token the field collapses to
/// the single year-round sentinel `[["通年"]]`.
pub fn normalize_terms(groups: &[TermGroup]) -> ScheduleResult<Vec<Vec<String>>> {
    let normalized = groups
        .iter()
        .map(normalize_group)
        .collect::<ScheduleResult<Vec<_>>>()?;

    if normalized.iter().all(Vec::is_empty) {
        return Ok(vec![vec![YEAR_ROUND_MARKER.to_string()]]);
    }
    Ok(normalized)
}

/// Parse and normalize a raw term field.
pub fn terms(raw: &str) -> ScheduleResult<Vec<Vec<String>>> {
    normalize_terms(&parse_terms(raw))
}
