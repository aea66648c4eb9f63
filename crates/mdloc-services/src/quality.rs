use crate::coverage::missing_translations;
use crate::scan::{collect_markdown, TranslationInventory};
use crate::{Result, TranslatedMap};
use mdloc_config::DocConfig;
use mdloc_core::DocName;
use mdloc_validate::{check_document, ValidationMessage};
use std::collections::BTreeMap;
use std::path::Path;

/// Per-file findings collected over one run.
#[derive(Debug, Clone, Default)]
pub struct QualityReport {
    pub checked: usize,
    /// Keyed by file path; files without findings are absent.
    pub files: BTreeMap<String, Vec<ValidationMessage>>,
}

impl QualityReport {
    pub fn record(&mut self, path: &Path, messages: Vec<ValidationMessage>) {
        if !messages.is_empty() {
            self.files
                .entry(path.display().to_string())
                .or_default()
                .extend(messages);
        }
    }

    pub fn issue_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }
}

/// Outcome of the `check` command: file findings plus missing translations.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub quality: QualityReport,
    pub missing: TranslatedMap,
    pub inventory: TranslationInventory,
}

impl AuditReport {
    pub fn has_issues(&self) -> bool {
        !self.quality.files.is_empty() || !self.missing.is_empty()
    }
}

fn read_document(path: &Path) -> std::result::Result<String, ValidationMessage> {
    std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!(event = "read_failed", path = %path.display(), error = %e);
        if e.kind() == std::io::ErrorKind::NotFound {
            ValidationMessage::error("read-error", "File not found")
        } else {
            ValidationMessage::error("read-error", format!("Error reading file: {e}"))
        }
    })
}

/// Check one file and fold its findings into `report`.
///
/// Unreadable files are recorded as a `read-error` finding.
pub fn check_file(path: &Path, cfg: &DocConfig, report: &mut QualityReport) {
    report.checked += 1;
    let doc = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(DocName::parse)
        .unwrap_or(DocName::Unrecognized);
    let messages = match read_document(path) {
        Ok(content) => check_document(&doc, &content, cfg),
        Err(msg) => vec![msg],
    };
    tracing::debug!(event = "file_checked", path = %path.display(), issues = messages.len());
    report.record(path, messages);
}

/// Run the content checks on every Markdown file under `root`.
pub fn scan_quality(root: &Path, cfg: &DocConfig) -> Result<QualityReport> {
    let mut report = QualityReport::default();
    for path in collect_markdown(root)? {
        check_file(&path, cfg, &mut report);
    }
    Ok(report)
}

/// Quality scan plus missing translations, from a single directory walk.
pub fn audit(root: &Path, cfg: &DocConfig) -> Result<AuditReport> {
    let mut quality = QualityReport::default();
    let mut inventory = TranslationInventory::default();
    for path in collect_markdown(root)? {
        check_file(&path, cfg, &mut quality);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            inventory.record(&path, name);
        }
    }
    let missing = missing_translations(&inventory.base, &inventory.translated);
    tracing::info!(
        event = "audit_done",
        checked = quality.checked,
        files_with_issues = quality.files.len(),
        languages_missing = missing.len()
    );
    Ok(AuditReport {
        quality,
        missing,
        inventory,
    })
}
