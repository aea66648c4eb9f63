use crate::commands::{load_config, to_sorted_lists};
use crate::OutputFormat;
use mdloc_domain::{CoverageOutput, LanguageCoverage, SCHEMA_VERSION};
use mdloc_services::{coverage, language_stats, missing_translations};
use std::path::Path;

pub fn run_translation_status(
    docs_dir: &Path,
    config_path: &Path,
    format: OutputFormat,
    use_color: bool,
) -> color_eyre::Result<()> {
    let cfg = load_config(config_path)?;
    let inv = mdloc_services::reconcile(docs_dir)?;

    for path in &inv.unrecognized {
        ui_warn!("Could not parse language or base name for {}. Skipping.", path.display());
    }
    for lang in inv.translated.keys() {
        if !cfg.is_supported(lang) {
            ui_warn!("Language '{lang}' is not in supported_languages; it still counts toward coverage");
        }
    }

    let stats = language_stats(&inv.base, &inv.translated);
    for s in &stats {
        tracing::debug!(
            event = "language_coverage",
            lang = %s.lang,
            translated = s.translated,
            orphaned = s.orphaned,
            percent = s.percent
        );
    }
    let missing = missing_translations(&inv.base, &inv.translated);
    let total = coverage(&inv.base, &inv.translated);

    match format {
        OutputFormat::Json => {
            let out = CoverageOutput {
                schema_version: SCHEMA_VERSION,
                coverage: total,
                base_docs: inv.base.len(),
                languages: stats
                    .into_iter()
                    .map(|s| LanguageCoverage {
                        lang: s.lang,
                        translated: s.translated,
                        orphaned: s.orphaned,
                        percent: s.percent,
                    })
                    .collect(),
                missing: to_sorted_lists(&missing),
                unrecognized: inv
                    .unrecognized
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            };
            serde_json::to_writer(std::io::stdout().lock(), &out)?;
            println!();
        }
        OutputFormat::Text => {
            for (lang, docs) in &missing {
                println!("Missing {lang} translations:");
                for doc in docs {
                    println!("  - {doc}");
                }
            }
            if use_color {
                use owo_colors::OwoColorize;
                println!("{}", format!("translation_coverage={total:.2}%").green());
            } else {
                println!("translation_coverage={total:.2}%");
            }
        }
    }
    Ok(())
}
