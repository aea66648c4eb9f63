//! High-level orchestration layer over the lower-level crates.
//! Exposes the functions the CLI calls; keeps no global state.

pub mod coverage;
pub mod quality;
pub mod scan;

pub use coverage::{coverage, language_stats, missing_translations, LanguageStat};
pub use mdloc_core::{DocName, Result};
pub use mdloc_validate::{Severity, ValidationMessage};
pub use quality::{audit, scan_quality, AuditReport, QualityReport};
pub use scan::{collect_markdown, reconcile, TranslationInventory};

use std::collections::{BTreeMap, BTreeSet};

/// Language-agnostic base document names.
pub type BaseSet = BTreeSet<String>;
/// Language code -> base names translated into that language.
pub type TranslatedMap = BTreeMap<String, BTreeSet<String>>;
