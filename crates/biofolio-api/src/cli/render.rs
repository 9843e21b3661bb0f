//! Batch rendering: `bfolio render <file.json>`.
//!
//! Replays a JSON array of submissions through one fresh session, in file
//! order, then prints the grouped view. An entry that fails (bad photo or bad
//! birthdate) is reported and skipped; later entries
//! still see any custom field it recorded, exactly as in an interactive
//! session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use serde::Deserialize;

use biofolio_core::service::builder::BiographyBuilder;
use biofolio_core::service::presenter::BiographyPresenter;
use biofolio_core::session::SessionState;
use biofolio_infra::photo::load_photo;
use biofolio_types::biography::BiographySubmission;
use biofolio_types::config::GlobalConfig;

use super::view::print_grouped_view;
use crate::state::AppState;

/// One entry of a batch file: a submission plus an optional photo path.
///
/// `photoPath` is resolved relative to the batch file and takes precedence
/// over inline `photoBytes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    #[serde(flatten)]
    pub submission: BiographySubmission,
    pub photo_path: Option<PathBuf>,
}

/// An entry that did not produce a record.
#[derive(Debug)]
pub struct SkippedEntry {
    /// Zero-based position in the batch file.
    pub index: usize,
    pub reason: String,
}

/// Read and parse a batch file.
pub async fn load_batch(path: &Path) -> Result<Vec<BatchEntry>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse batch file: {}", path.display()))
}

/// Run every entry through the builder of `session`.
///
/// Returns the entries that were skipped.
pub async fn run_batch(
    session: &mut SessionState,
    entries: Vec<BatchEntry>,
    base_dir: &Path,
    config: &GlobalConfig,
) -> Vec<SkippedEntry> {
    let mut skipped = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let mut submission = entry.submission;

        if let Some(photo_path) = entry.photo_path {
            match load_photo(&base_dir.join(&photo_path), config).await {
                Ok(bytes) => submission.photo_bytes = Some(bytes),
                Err(e) => {
                    tracing::warn!(index, "skipping entry: {e}");
                    skipped.push(SkippedEntry {
                        index,
                        reason: format!("{}: {e}", photo_path.display()),
                    });
                    continue;
                }
            }
        }

        if let Err(e) = BiographyBuilder::new(session).submit(submission) {
            tracing::warn!(index, "skipping entry: {e}");
            skipped.push(SkippedEntry {
                index,
                reason: e.to_string(),
            });
        }
    }

    skipped
}

/// Handle `bfolio render`.
pub async fn render_file(state: &AppState, path: &Path, json: bool) -> Result<()> {
    let entries = load_batch(path).await?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut session = SessionState::new();
    let skipped = run_batch(&mut session, entries, base_dir, &state.config).await;

    for entry in &skipped {
        eprintln!(
            "  {} Entry {} skipped: {}",
            style("!").yellow().bold(),
            entry.index + 1,
            entry.reason
        );
    }

    let view = BiographyPresenter::new(&session).grouped_view_today();
    print_grouped_view(&view, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biofolio_core::repository::biography::BiographyStore;
    use tempfile::TempDir;

    const BATCH: &str = r#"[
        {
            "type": "Professional",
            "name": "Ana",
            "birthdate": "1995-04-10",
            "skills": "Rust\n\nSQL",
            "customFieldName": "Certifications",
            "customFieldValue": "TOEFL"
        },
        {
            "type": "Personal",
            "name": "Ben",
            "birthdate": "not-a-date",
            "customFieldName": "Languages",
            "customFieldValue": "English"
        },
        {
            "type": "Athlete",
            "isCustomType": true,
            "name": "Cris",
            "birthdate": "2001-09-01",
            "customFieldName": "Certifications",
            "customFieldValue": "AWS"
        }
    ]"#;

    #[tokio::test]
    async fn test_load_and_run_batch() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bios.json");
        tokio::fs::write(&path, BATCH).await.unwrap();

        let entries = load_batch(&path).await.unwrap();
        assert_eq!(entries.len(), 3);

        let mut session = SessionState::new();
        let skipped = run_batch(&mut session, entries, tmp.path(), &GlobalConfig::default()).await;

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 1);

        let records = session.all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].skills, vec!["Rust", "SQL"]);
        // The skipped entry's custom field was still recorded
        assert_eq!(
            records[1].custom_fields.get("Languages").unwrap(),
            &["English".to_string()]
        );
        assert_eq!(
            records[1].custom_fields.get("Certifications").unwrap(),
            &["TOEFL".to_string(), "AWS".to_string()]
        );
    }

    #[tokio::test]
    async fn test_photo_path_resolved_relative_to_batch() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("ana.jpg"), [0xFFu8, 0xD8, 0xFF, 0xE0])
            .await
            .unwrap();
        let entries: Vec<BatchEntry> = serde_json::from_str(
            r#"[
                {"type": "Personal", "name": "Ana", "birthdate": "1995-04-10", "photoPath": "ana.jpg"},
                {"type": "Personal", "name": "Ben", "birthdate": "1995-04-10", "photoPath": "ben.gif"}
            ]"#,
        )
        .unwrap();

        let mut session = SessionState::new();
        let skipped = run_batch(&mut session, entries, tmp.path(), &GlobalConfig::default()).await;

        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].reason.contains("ben.gif"));
        assert_eq!(
            session.all()[0].photo.as_deref(),
            Some(&[0xFF, 0xD8, 0xFF, 0xE0][..])
        );
    }

    #[tokio::test]
    async fn test_load_batch_rejects_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = load_batch(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse batch file"));
    }
}
