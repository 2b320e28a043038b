//! Content layout functions - single source of truth for all file names.
//!
//! This module centralizes the lesson folder layout so no other module
//! hardcodes filename strings.

use std::path::{Path, PathBuf};

// ==================== Companion Files ====================

/// Teacher-side dialogue document expected in every lesson folder
pub const DIALOGUE_TEACHER: &str = "dialogue_teacher.md";

/// Pupil-side dialogue document expected in every lesson folder
pub const DIALOGUE_PUPIL: &str = "dialogue_pupil.md";

/// Dialogue illustration expected in every lesson folder
pub const DIALOGUE_IMAGE: &str = "dialogue_image.png";

/// Watch-along notes; the viewer skips this stage when absent
pub const WATCH_TOGETHER: &str = "watch_together.txt";

/// Companion files every lesson folder is expected to contain
pub const REQUIRED_COMPANIONS: [&str; 3] = [DIALOGUE_TEACHER, DIALOGUE_PUPIL, DIALOGUE_IMAGE];

// ==================== Shared Artifacts ====================

/// Q&A document shared by all lessons, kept at the content root
pub const QANDA_DOC: &str = "qanda.md";

/// Q&A illustration shared by all lessons, kept at the content root
pub const QANDA_IMAGE: &str = "qanda.png";

/// Root-level files the viewer renders a placeholder for when absent
pub const SHARED_ARTIFACTS: [&str; 2] = [QANDA_DOC, QANDA_IMAGE];

// ==================== Manifest ====================

/// Generated manifest consumed by the lesson picker
pub const MANIFEST_FILE: &str = "lessons.json";

/// Get the manifest path under a content root
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Get the directory of a single lesson under a content root
pub fn lesson_dir(root: &Path, lesson: &str) -> PathBuf {
    root.join(lesson)
}

/// Get the path of one companion file inside a lesson folder
pub fn companion_path(root: &Path, lesson: &str, file: &str) -> PathBuf {
    lesson_dir(root, lesson).join(file)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path_format() {
        let path = manifest_path(Path::new("content"));
        assert!(path.ends_with("lessons.json"));
        assert_eq!(path, Path::new("content/lessons.json"));
    }

    #[test]
    fn test_lesson_dir_format() {
        let dir = lesson_dir(Path::new("content"), "007");
        assert_eq!(dir, Path::new("content/007"));
    }

    #[test]
    fn test_companion_path_format() {
        let path = companion_path(Path::new("content"), "007", DIALOGUE_TEACHER);
        assert_eq!(path, Path::new("content/007/dialogue_teacher.md"));
    }

    #[test]
    fn test_required_companions_exclude_optional() {
        assert!(!REQUIRED_COMPANIONS.contains(&WATCH_TOGETHER));
        assert_eq!(REQUIRED_COMPANIONS.len(), 3);
    }
}
