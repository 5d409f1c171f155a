//! # kdb-schedule
//!
//! Parses the scheduling fields of a university course catalog export.
//!
//! The catalog writes a course's terms and meeting times as free text:
//!
//!     実施学期: 春AB 秋A
//!     曜時限:   月1,2 水・金3-4
//!
//! This crate turns those into structured values and back into compact tokens.
//! Reading the export and writing output files are left to callers; the entry point
//! for a whole row is [`schedule::Course::from_record`].

pub mod schedule;
