//! Advisory completeness checks for lesson content.
//!
//! Missing companion files are reported as warnings and never block
//! manifest generation; a lesson folder with nothing in it still ships.

use std::path::Path;

use super::{LessonId, Warning};
use crate::paths;

/// Check one lesson folder for its expected companion files.
///
/// Returns one warning per absent required companion, plus a softer
/// "optional"-labeled warning when the watch-along notes are absent.
pub fn check_lesson(root: &Path, lesson: &LessonId) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for file in paths::REQUIRED_COMPANIONS {
        if !paths::companion_path(root, lesson.as_str(), file).exists() {
            warnings.push(Warning {
                lesson: Some(lesson.clone()),
                file,
                optional: false,
            });
        }
    }

    if !paths::companion_path(root, lesson.as_str(), paths::WATCH_TOGETHER).exists() {
        warnings.push(Warning {
            lesson: Some(lesson.clone()),
            file: paths::WATCH_TOGETHER,
            optional: true,
        });
    }

    warnings
}

/// Check the root-level artifacts shared by every lesson's Q&A stage.
///
/// The viewer renders a placeholder when these are absent, so absence is
/// only ever reported as optional.
pub fn check_shared_artifacts(root: &Path) -> Vec<Warning> {
    paths::SHARED_ARTIFACTS
        .into_iter()
        .filter(|file| !root.join(file).exists())
        .map(|file| Warning {
            lesson: None,
            file,
            optional: true,
        })
        .collect()
}
