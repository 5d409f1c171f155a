//! Course records
//!
//! Glue between a flat catalog record (column label → text) and the two engines.
//! A [`Course`] is built once per catalog row and never modified afterwards.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::schedule::error::{ScheduleError, ScheduleResult};
use crate::schedule::{period, term};

/// Column labels of the catalog export, in file order.
pub const CATALOG_COLUMNS: [&str; 19] = [
    "科目番号",
    "科目名",
    "授業方法",
    "単位数",
    "標準履修年次",
    "実施学期",
    "曜時限",
    "教室",
    "担当教員",
    "授業概要",
    "備考",
    "科目等履修生申請可否",
    "申請条件",
    "短期留学生申請可否",
    "申請条件",
    "英語(日本語)科目名",
    "科目コード",
    "要件科目名",
    "データ更新日",
];

/// Labels of the columns a [`Course`] is assembled from.
pub mod labels {
    pub const CLASS_ID: &str = "科目番号";
    pub const NAME: &str = "科目名";
    pub const ENGLISH_NAME: &str = "英語(日本語)科目名";
    pub const TERM: &str = "実施学期";
    pub const PERIOD: &str = "曜時限";
    pub const ROOM: &str = "教室";
    pub const REMARKS: &str = "備考";
}

/// Anything that can hand out catalog fields by column label.
pub trait Record {
    fn field(&self, label: &str) -> Option<&str>;
}

impl Record for HashMap<String, String> {
    fn field(&self, label: &str) -> Option<&str> {
        self.get(label).map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, label: &str) -> Option<&str> {
        self.get(label).map(String::as_str)
    }
}

/// Which name column a course takes its name from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ja,
    En,
}

impl Lang {
    pub fn name_label(self) -> &'static str {
        match self {
            Lang::Ja => labels::NAME,
            Lang::En => labels::ENGLISH_NAME,
        }
    }
}

/// How [`Course::from_record`] treats a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOptions {
    pub lang: Lang,
    /// Skip rows with an empty required field; the catalog leaves courses not
    /// offered this year partially blank.
    pub skip_incomplete: bool,
    /// Stand-in for an empty room field.
    pub blank_room: String,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            lang: Lang::Ja,
            skip_incomplete: true,
            blank_room: " ".to_string(),
        }
    }
}

/// The raw text fields of one course, before either engine has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCourse<'a> {
    pub class_id: &'a str,
    pub name: &'a str,
    pub term: &'a str,
    pub period: &'a str,
    pub room: &'a str,
    pub remarks: &'a str,
}

impl<'a> RawCourse<'a> {
    /// Read the six fields from `record`, choosing the name column by `lang`.
    pub fn from_record<R: Record + ?Sized>(record: &'a R, lang: Lang) -> ScheduleResult<Self> {
        let get = |label: &str| {
            record.field(label).ok_or_else(|| ScheduleError::MissingField {
                field: label.to_string(),
            })
        };
        Ok(Self {
            class_id: get(labels::CLASS_ID)?,
            name: get(lang.name_label())?,
            term: get(labels::TERM)?,
            period: get(labels::PERIOD)?,
            room: get(labels::ROOM)?,
            remarks: get(labels::REMARKS)?,
        })
    }

    fn has_blank_field(&self) -> bool {
        [
            self.class_id,
            self.name,
            self.term,
            self.period,
            self.room,
            self.remarks,
        ]
        .iter()
        .any(|field| field.is_empty())
    }

    /// Run both engines and build the course.
    pub fn assemble(&self) -> ScheduleResult<Course> {
        Ok(Course {
            class_id: self.class_id.to_string(),
            name: self.name.to_string(),
            module: term::terms(self.term)?,
            period: period::periods(self.period)?,
            room: self.room.to_string(),
            remarks: self.remarks.to_string(),
        })
    }
}

/// A catalog course with structured schedule fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    class_id: String,
    name: String,
    module: Vec<Vec<String>>,
    period: Vec<String>,
    room: String,
    #[serde(rename = "description")]
    remarks: String,
}

impl Course {
    /// Assemble a course from a flat record.
    ///
    /// Returns `Ok(None)` when the row is skipped as incomplete.
    pub fn from_record<R: Record + ?Sized>(
        record: &R,
        options: &RecordOptions,
    ) -> ScheduleResult<Option<Course>> {
        let mut raw = RawCourse::from_record(record, options.lang)?;
        if raw.room.is_empty() {
            raw.room = options.blank_room.as_str();
        }
        if options.skip_incomplete && raw.has_blank_field() {
            tracing::debug!(class_id = raw.class_id, "skipping incomplete catalog row");
            return Ok(None);
        }
        raw.assemble().map(Some)
    }

    pub fn class_id(&self) -> &str {
        &self.class_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical term token groups.
    pub fn module(&self) -> &[Vec<String>] {
        &self.module
    }

    /// Rendered period tokens.
    pub fn period(&self) -> &[String] {
        &self.period
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_row() -> HashMap<String, String> {
        record(&[
            ("科目番号", "GC22201"),
            ("科目名", "プログラム言語論"),
            ("英語(日本語)科目名", "Programming Languages and Methodology"),
            ("実施学期", "春AB"),
            ("曜時限", "木1,2"),
            ("教室", "7C202"),
            ("備考", "対面"),
        ])
    }

    #[test]
    fn test_from_record_japanese_name() {
        let course = Course::from_record(&full_row(), &RecordOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(course.class_id(), "GC22201");
        assert_eq!(course.name(), "プログラム言語論");
        assert_eq!(course.module(), &[vec!["春AB".to_string()]]);
        assert_eq!(course.period(), &["木1".to_string(), "木2".to_string()]);
    }

    #[test]
    fn test_from_record_english_name() {
        let options = RecordOptions {
            lang: Lang::En,
            ..RecordOptions::default()
        };
        let course = Course::from_record(&full_row(), &options).unwrap().unwrap();
        assert_eq!(course.name(), "Programming Languages and Methodology");
    }

    #[test]
    fn test_blank_room_is_replaced() {
        let mut row = full_row();
        row.insert("教室".to_string(), String::new());
        let course = Course::from_record(&row, &RecordOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(course.room(), " ");
    }

    #[test]
    fn test_incomplete_row_is_skipped() {
        let mut row = full_row();
        row.insert("備考".to_string(), String::new());
        assert_eq!(
            Course::from_record(&row, &RecordOptions::default()).unwrap(),
            None
        );

        let keep = RecordOptions {
            skip_incomplete: false,
            ..RecordOptions::default()
        };
        let course = Course::from_record(&row, &keep).unwrap().unwrap();
        assert_eq!(course.remarks(), "");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut row = full_row();
        row.remove("曜時限");
        assert_eq!(
            Course::from_record(&row, &RecordOptions::default()),
            Err(ScheduleError::MissingField {
                field: "曜時限".to_string()
            })
        );
    }

    #[test]
    fn test_engine_error_aborts_course() {
        let mut row = full_row();
        row.insert("曜時限".to_string(), "月12".to_string());
        assert_eq!(
            Course::from_record(&row, &RecordOptions::default()),
            Err(ScheduleError::PeriodOutOfRange { period: 12 })
        );
    }
}
