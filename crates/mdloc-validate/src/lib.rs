use mdloc_config::DocConfig;
use mdloc_core::DocName;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static MAIN_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s.+").unwrap());
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```.*\n").unwrap());
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##\s+(.+)$").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*\]\(.*\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Stems that never need a code example.
const NO_CODE_STEMS: [&str; 2] = ["changelog", "license"];
const LINK_PREFIXES: [&str; 4] = ["http", "#", "/", ".."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One finding for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    /// Machine-readable kind: "too-short" | "missing-header" | "no-code-example" |
    /// "missing-sections" | "no-image" | "invalid-link" | "unsupported-language" |
    /// "read-error"
    pub kind: String,
    pub severity: Severity,
    pub message: String,
}

impl ValidationMessage {
    pub fn new(kind: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            severity,
            message: message.into(),
        }
    }

    pub fn warning(kind: &str, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Warning, message)
    }

    pub fn error(kind: &str, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Error, message)
    }
}

/// Run every content check against one document.
pub fn check_document(doc: &DocName, content: &str, cfg: &DocConfig) -> Vec<ValidationMessage> {
    let mut messages = Vec::new();

    let len = content.chars().count();
    if len < cfg.min_length {
        messages.push(ValidationMessage::warning(
            "too-short",
            format!("Content too short ({len} chars)"),
        ));
    }

    if !MAIN_HEADER.is_match(content) {
        messages.push(ValidationMessage::error(
            "missing-header",
            "Missing main header",
        ));
    }

    if cfg.code_example_required && !is_code_exempt(doc) && !CODE_FENCE.is_match(content) {
        messages.push(ValidationMessage::warning(
            "no-code-example",
            "No code examples found",
        ));
    }

    if !cfg.required_sections.is_empty() {
        let found: BTreeSet<&str> = SECTION
            .captures_iter(content)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();
        let missing: Vec<&str> = cfg
            .required_sections
            .iter()
            .map(String::as_str)
            .filter(|s| !found.contains(s))
            .collect();
        if !missing.is_empty() {
            messages.push(ValidationMessage::error(
                "missing-sections",
                format!("Missing required sections: {}", missing.join(", ")),
            ));
        }
    }

    if cfg.image_required && !IMAGE.is_match(content) {
        messages.push(ValidationMessage::warning("no-image", "No images found"));
    }

    for caps in LINK.captures_iter(content) {
        let url = &caps[2];
        if !LINK_PREFIXES.iter().any(|p| url.starts_with(p)) {
            messages.push(ValidationMessage::error(
                "invalid-link",
                format!("Invalid link: {url}"),
            ));
        }
    }

    if let Some(lang) = doc.lang() {
        if !cfg.is_supported(lang) {
            messages.push(ValidationMessage::error(
                "unsupported-language",
                format!("Unsupported language: {lang}"),
            ));
        }
    }

    messages
}

fn is_code_exempt(doc: &DocName) -> bool {
    doc.stem()
        .is_some_and(|stem| NO_CODE_STEMS.iter().any(|s| stem.eq_ignore_ascii_case(s)))
}
