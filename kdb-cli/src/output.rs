//! Plain-text rendering of engine results for the terminal

use kdb_schedule::schedule::Course;

/// One line per term group, tokens separated by spaces.
pub fn term_lines(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| group.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn period_line(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// `key: value` lines for a course. Term groups are separated by ` | `.
pub fn course_lines(course: &Course) -> String {
    let module = course
        .module()
        .iter()
        .map(|group| group.join(" "))
        .collect::<Vec<_>>()
        .join(" | ");
    [
        ("class_id", course.class_id().to_string()),
        ("name", course.name().to_string()),
        ("module", module),
        ("period", period_line(course.period())),
        ("room", course.room().to_string()),
        ("description", course.remarks().to_string()),
    ]
    .iter()
    .map(|(key, value)| format!("{}: {}", key, value))
    .collect::<Vec<_>>()
    .join("\n")
}
