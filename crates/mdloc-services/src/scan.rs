use crate::{BaseSet, Result, TranslatedMap};
use mdloc_core::{is_markdown_name, DocName, MdLocError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of classifying every Markdown file under a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationInventory {
    pub base: BaseSet,
    pub translated: TranslatedMap,
    /// Markdown files whose name fit neither the base nor the translation shape.
    pub unrecognized: Vec<PathBuf>,
}

impl TranslationInventory {
    /// Fold one file name into the inventory.
    pub fn record(&mut self, path: &Path, file_name: &str) {
        match DocName::parse(file_name) {
            DocName::Base { name } => {
                tracing::debug!(event = "doc_base", path = %path.display());
                self.base.insert(name);
            }
            DocName::Translation { lang, base_name } => {
                tracing::debug!(event = "doc_translation", path = %path.display(), lang = %lang, base = %base_name);
                self.translated.entry(lang).or_default().insert(base_name);
            }
            DocName::Unrecognized => {
                tracing::warn!(event = "doc_name_unrecognized", path = %path.display());
                self.unrecognized.push(path.to_path_buf());
            }
        }
    }
}

pub(crate) fn ensure_dir(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(MdLocError::DocsDirNotFound(root.display().to_string()).into());
    }
    if !root.is_dir() {
        return Err(MdLocError::NotADirectory(root.display().to_string()).into());
    }
    Ok(())
}

/// Every regular `*.md` file under `root`, sorted by path.
pub fn collect_markdown(root: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(root)?;
    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(event = "walk_error", error = %e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let is_md = entry.file_name().to_str().is_some_and(is_markdown_name);
        if is_md {
            out.push(entry.into_path());
        }
    }
    out.sort();
    tracing::debug!(event = "markdown_collected", root = %root.display(), files = out.len());
    Ok(out)
}

/// Walk `root` and split its Markdown files into base and translated sets.
///
/// Only bare file names are classified, so two base files with the same name in
/// different directories count once.
pub fn reconcile(root: &Path) -> Result<TranslationInventory> {
    let mut inv = TranslationInventory::default();
    for path in collect_markdown(root)? {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            inv.record(&path, name);
        }
    }
    tracing::info!(
        event = "reconciled",
        base = inv.base.len(),
        languages = inv.translated.len(),
        unrecognized = inv.unrecognized.len()
    );
    Ok(inv)
}
