//! Manifest emission and the generation pipeline.
//!
//! The manifest is a JSON array of lesson identifiers in ascending
//! numeric order, fully regenerated on every run. Completeness warnings
//! ride along in the [`RunSummary`] and are printed by [`report`]; they
//! never change what gets written.

use std::fs;
use std::path::Path;

use crate::content::{self, LessonId, Warning};
use crate::paths;

/// Result of one generation run.
#[derive(Debug)]
pub struct RunSummary {
    /// Lessons written to the manifest, in manifest order
    pub lessons: Vec<LessonId>,
    /// Advisory warnings collected across all checks
    pub warnings: Vec<Warning>,
}

/// Fatal filesystem failures.
///
/// Missing companion files are never errors; they surface as
/// [`Warning`]s in the run summary.
#[derive(Debug)]
pub enum ManifestError {
    RootUnreadable(String, String),
    WriteFailed(String, String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::RootUnreadable(path, err) => {
                write!(f, "Cannot read content root {}: {}", path, err)
            }
            ManifestError::WriteFailed(path, err) => {
                write!(f, "Cannot write manifest {}: {}", path, err)
            }
        }
    }
}

impl std::error::Error for ManifestError {}

/// Serialize the ordered lesson list and overwrite the manifest file.
///
/// Pretty-printed JSON array of strings, UTF-8, non-ASCII preserved
/// unescaped. Any previous manifest contents are discarded.
pub fn write_manifest(root: &Path, lessons: &[LessonId]) -> Result<(), ManifestError> {
    let out = paths::manifest_path(root);

    let json = serde_json::to_string_pretty(lessons)
        .map_err(|e| ManifestError::WriteFailed(out.display().to_string(), e.to_string()))?;

    fs::write(&out, json)
        .map_err(|e| ManifestError::WriteFailed(out.display().to_string(), e.to_string()))
}

/// Run the full generation pipeline against one content root.
///
/// Scan, order, check, write. Any filesystem failure aborts before the
/// manifest is touched; warnings never do.
pub fn generate(root: &Path) -> Result<RunSummary, ManifestError> {
    let lessons = content::scan_lessons(root)
        .map_err(|e| ManifestError::RootUnreadable(root.display().to_string(), e.to_string()))?;

    tracing::debug!("Discovered {} lessons under {}", lessons.len(), root.display());

    let mut warnings = Vec::new();
    for lesson in &lessons {
        warnings.extend(content::check_lesson(root, lesson));
    }
    // The Q&A stage only renders as part of a lesson, so the shared
    // artifacts are not worth reporting on an empty root
    if !lessons.is_empty() {
        warnings.extend(content::check_shared_artifacts(root));
    }

    write_manifest(root, &lessons)?;

    Ok(RunSummary { lessons, warnings })
}

/// Print the warning block (if any) and the summary line.
pub fn report(summary: &RunSummary) {
    if !summary.warnings.is_empty() {
        let lines: Vec<String> = summary.warnings.iter().map(|w| w.to_string()).collect();
        println!("[gen_lessons] Warnings:\n  - {}", lines.join("\n  - "));
    }
    println!(
        "[gen_lessons] wrote {} with {} lessons",
        paths::MANIFEST_FILE,
        summary.lessons.len()
    );
}
