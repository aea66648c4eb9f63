use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IssueMsg {
    pub kind: String,
    pub severity: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityOutput {
    pub schema_version: u32,
    pub checked: usize,
    pub files: BTreeMap<String, Vec<IssueMsg>>,
    /// Language code -> base documents with no translation in that language.
    pub missing_translations: BTreeMap<String, Vec<String>>,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguageCoverage {
    pub lang: String,
    pub translated: usize,
    pub orphaned: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CoverageOutput {
    pub schema_version: u32,
    /// Aggregate percentage, 0..=100.
    pub coverage: f64,
    pub base_docs: usize,
    pub languages: Vec<LanguageCoverage>,
    pub missing: BTreeMap<String, Vec<String>>,
    pub unrecognized: Vec<String>,
}
