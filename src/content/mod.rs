//! Lesson content model - identifiers and companion-file expectations.
//!
//! A lesson is a folder named with exactly three decimal digits
//! ("001", "042", "100") directly under the content root. Lessons are
//! found by scanning that root (see [`discovery`]); advisory completeness
//! checks report missing companion files without ever blocking manifest
//! generation (see [`completeness`]).

pub mod completeness;
pub mod discovery;

pub use completeness::{check_lesson, check_shared_artifacts};
pub use discovery::scan_lessons;

use serde::Serialize;

/// Identifier of a lesson folder: exactly three ASCII digits.
///
/// Ordering is by numeric value, so "002" sorts before "010" and "100".
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LessonId(String);

impl LessonId {
    /// Parse a directory name into a lesson identifier.
    ///
    /// Returns `None` unless the name is exactly three ASCII digits;
    /// "1", "0001", "01a" and "abc" are all rejected.
    pub fn parse(name: &str) -> Option<Self> {
        if name.len() == 3 && name.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(name.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier (0-999).
    pub fn number(&self) -> u16 {
        // Construction guarantees three ASCII digits
        self.0.parse().unwrap_or(0)
    }
}

impl std::fmt::Display for LessonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Ord for LessonId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.number().cmp(&other.number())
    }
}

impl PartialOrd for LessonId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Advisory finding about an absent artifact.
///
/// Warnings are collected during a run and printed after the manifest is
/// written; they never affect manifest contents or the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Lesson the artifact belongs to, or `None` for root-level artifacts
    pub lesson: Option<LessonId>,
    /// Filename of the absent artifact
    pub file: &'static str,
    /// Whether the viewer works without the artifact
    pub optional: bool,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.lesson, self.optional) {
            (Some(lesson), false) => write!(f, "missing {}/{}", lesson, self.file),
            (Some(lesson), true) => write!(f, "optional: {}/{} not found", lesson, self.file),
            // Root-level artifacts always have a viewer fallback
            (None, _) => write!(f, "optional: {} not found", self.file),
        }
    }
}
