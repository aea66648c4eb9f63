//! Missing-translation and coverage math over a reconciled inventory.
//!
//! Coverage is averaged over the languages that have at least one translated
//! file, not over the configured languages. One fully translated language gives
//! 100%; adding a second language with nothing translated halves it.

use crate::{BaseSet, TranslatedMap};
use std::collections::BTreeSet;

/// For each language present in `translated`, the base documents it lacks.
/// Fully translated languages are left out.
pub fn missing_translations(base: &BaseSet, translated: &TranslatedMap) -> TranslatedMap {
    translated
        .iter()
        .filter_map(|(lang, docs)| {
            let missing: BTreeSet<String> = base.difference(docs).cloned().collect();
            (!missing.is_empty()).then(|| (lang.clone(), missing))
        })
        .collect()
}

/// Percentage of (base document, language) pairs that have a translation.
///
/// Returns 0 when there are no base documents or no translated languages.
pub fn coverage(base: &BaseSet, translated: &TranslatedMap) -> f64 {
    let denominator = translated.len() * base.len();
    if denominator == 0 {
        return 0.0;
    }
    let numerator: usize = translated
        .values()
        .map(|docs| base.intersection(docs).count())
        .sum();
    numerator as f64 / denominator as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStat {
    pub lang: String,
    /// Base documents that have a translation in this language.
    pub translated: usize,
    /// Translations whose base document does not exist.
    pub orphaned: usize,
    pub percent: f64,
}

pub fn language_stats(base: &BaseSet, translated: &TranslatedMap) -> Vec<LanguageStat> {
    translated
        .iter()
        .map(|(lang, docs)| {
            let hit = base.intersection(docs).count();
            let percent = if base.is_empty() {
                0.0
            } else {
                hit as f64 / base.len() as f64 * 100.0
            };
            LanguageStat {
                lang: lang.clone(),
                translated: hit,
                orphaned: docs.len() - hit,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn map(entries: &[(&str, &[&str])]) -> TranslatedMap {
        entries
            .iter()
            .map(|(lang, docs)| (lang.to_string(), set(docs)))
            .collect()
    }

    #[test]
    fn zero_when_nothing_to_divide_by() {
        assert_eq!(coverage(&set(&["a.md"]), &TranslatedMap::new()), 0.0);
        assert_eq!(coverage(&BaseSet::new(), &map(&[("de", &["a.md"])])), 0.0);
        assert_eq!(coverage(&BaseSet::new(), &TranslatedMap::new()), 0.0);
    }

    #[test]
    fn full_and_half_coverage() {
        let base = set(&["a.md", "b.md"]);
        assert_eq!(coverage(&base, &map(&[("de", &["a.md", "b.md"])])), 100.0);
        assert_eq!(coverage(&base, &map(&[("de", &["a.md"])])), 50.0);
    }

    #[test]
    fn empty_language_halves_coverage() {
        let base = set(&["a.md", "b.md"]);
        let translated = map(&[("de", &["a.md", "b.md"]), ("fr", &[])]);
        assert_eq!(coverage(&base, &translated), 50.0);
    }

    #[test]
    fn orphan_translations_do_not_count() {
        let base = set(&["a.md", "b.md"]);
        let translated = map(&[("de", &["a.md", "ghost.md"])]);
        assert_eq!(coverage(&base, &translated), 50.0);
    }

    #[test]
    fn missing_lists_only_incomplete_languages() {
        let base = set(&["file.md"]);
        assert_eq!(
            missing_translations(&base, &map(&[("de", &["another.md"])])),
            map(&[("de", &["file.md"])])
        );
        assert!(missing_translations(&base, &map(&[("de", &["file.md"])])).is_empty());
    }

    #[test]
    fn empty_language_set_reports_every_base_doc() {
        let base = set(&["a.md", "b.md"]);
        let missing = missing_translations(&base, &map(&[("fr", &[])]));
        assert_eq!(missing, map(&[("fr", &["a.md", "b.md"])]));
    }

    #[test]
    fn languages_without_entries_are_not_reported() {
        let base = set(&["a.md"]);
        assert!(missing_translations(&base, &TranslatedMap::new()).is_empty());
    }

    #[test]
    fn per_language_stats() {
        let base = set(&["a.md", "b.md"]);
        let translated = map(&[("de", &["a.md", "ghost.md"]), ("es", &["a.md", "b.md"])]);
        let stats = language_stats(&base, &translated);
        assert_eq!(
            stats,
            vec![
                LanguageStat {
                    lang: "de".into(),
                    translated: 1,
                    orphaned: 1,
                    percent: 50.0
                },
                LanguageStat {
                    lang: "es".into(),
                    translated: 2,
                    orphaned: 0,
                    percent: 100.0
                },
            ]
        );
    }
}
