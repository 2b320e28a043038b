//! Lesson discovery - scanning the content root for lesson folders.

use std::fs;
use std::io;
use std::path::Path;

use super::LessonId;

/// Discover all lesson folders directly under the content root.
///
/// Scans immediate entries only; retains directories whose name parses as
/// a [`LessonId`] and returns them sorted ascending by numeric value.
/// Entries that are not directories, or whose names do not match, are
/// skipped.
///
/// A root that does not exist or cannot be read is an error; no partial
/// result is returned.
pub fn scan_lessons(root: &Path) -> io::Result<Vec<LessonId>> {
    let entries = fs::read_dir(root)?;

    let mut lessons = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        match entry.file_name().to_str().and_then(LessonId::parse) {
            Some(id) => lessons.push(id),
            None => {
                tracing::debug!("Skipping non-lesson entry {}", path.display());
            }
        }
    }

    // Numeric order: "002" before "010" before "100"
    lessons.sort();
    Ok(lessons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_lesson_dirs(root: &Path, names: &[&str]) {
        for name in names {
            fs::create_dir_all(root.join(name)).unwrap();
        }
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();
        let lessons = scan_lessons(temp.path()).unwrap();
        assert!(lessons.is_empty());
    }

    #[test]
    fn test_scan_sorts_numerically() {
        let temp = TempDir::new().unwrap();
        create_lesson_dirs(temp.path(), &["010", "002", "100"]);

        let lessons = scan_lessons(temp.path()).unwrap();
        let names: Vec<&str> = lessons.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["002", "010", "100"]);
    }

    #[test]
    fn test_scan_excludes_non_matching_names() {
        let temp = TempDir::new().unwrap();
        create_lesson_dirs(temp.path(), &["001", "1", "0001", "abc", "01a", "assets"]);

        let lessons = scan_lessons(temp.path()).unwrap();
        let names: Vec<&str> = lessons.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["001"]);
    }

    #[test]
    fn test_scan_excludes_plain_files() {
        let temp = TempDir::new().unwrap();
        create_lesson_dirs(temp.path(), &["002"]);
        fs::write(temp.path().join("003"), "not a folder").unwrap();
        fs::write(temp.path().join("lessons.json"), "[]").unwrap();

        let lessons = scan_lessons(temp.path()).unwrap();
        let names: Vec<&str> = lessons.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["002"]);
    }

    #[test]
    fn test_scan_includes_empty_lesson_folders() {
        // Completeness is advisory; an empty folder is still a lesson
        let temp = TempDir::new().unwrap();
        create_lesson_dirs(temp.path(), &["005"]);

        let lessons = scan_lessons(temp.path()).unwrap();
        assert_eq!(lessons.len(), 1);
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");
        assert!(scan_lessons(&missing).is_err());
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        create_lesson_dirs(temp.path(), &["001", "001/002", "assets/003"]);

        let lessons = scan_lessons(temp.path()).unwrap();
        let names: Vec<&str> = lessons.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["001"]);
    }
}
