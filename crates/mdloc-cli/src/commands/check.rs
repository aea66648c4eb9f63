use crate::commands::{load_config, to_sorted_lists};
use crate::OutputFormat;
use mdloc_domain::{IssueMsg, QualityOutput, SCHEMA_VERSION};
use mdloc_services::{AuditReport, Severity};
use std::path::Path;

pub fn run_check(
    docs_dir: &Path,
    config_path: &Path,
    format: OutputFormat,
    use_color: bool,
) -> color_eyre::Result<()> {
    let cfg = load_config(config_path)?;
    let report = mdloc_services::audit(docs_dir, &cfg)?;

    match format {
        OutputFormat::Json => {
            let out = to_output(&report);
            serde_json::to_writer(std::io::stdout().lock(), &out)?;
            println!();
        }
        OutputFormat::Text => print_text(&report, use_color),
    }

    if report.has_issues() {
        ui_err!(
            "Documentation quality check failed: {} issue(s) in {} file(s), {} language(s) with missing translations",
            report.quality.issue_count(),
            report.quality.files.len(),
            report.missing.len()
        );
        color_eyre::eyre::bail!("documentation quality check failed");
    }
    // stdout carries only the JSON document in json mode
    if format == OutputFormat::Text {
        ui_ok!(
            "Documentation quality check passed! ({} file(s) checked)",
            report.quality.checked
        );
    }
    Ok(())
}

fn to_output(report: &AuditReport) -> QualityOutput {
    let files = report
        .quality
        .files
        .iter()
        .map(|(path, msgs)| {
            let issues = msgs
                .iter()
                .map(|m| IssueMsg {
                    kind: m.kind.clone(),
                    severity: m.severity.as_str().to_string(),
                    message: m.message.clone(),
                })
                .collect();
            (path.clone(), issues)
        })
        .collect();
    QualityOutput {
        schema_version: SCHEMA_VERSION,
        checked: report.quality.checked,
        files,
        missing_translations: to_sorted_lists(&report.missing),
        passed: !report.has_issues(),
    }
}

fn print_text(report: &AuditReport, use_color: bool) {
    for (path, msgs) in &report.quality.files {
        if use_color {
            use owo_colors::OwoColorize;
            println!("{}:", path.magenta());
        } else {
            println!("{path}:");
        }
        for m in msgs {
            if !use_color {
                println!("  - [{}] {} ({})", m.severity.as_str(), m.message, m.kind);
            } else {
                use owo_colors::OwoColorize;
                let tag = match m.severity {
                    Severity::Warning => format!("{}", "warning".yellow()),
                    Severity::Error => format!("{}", "error".red()),
                };
                println!("  - [{}] {} ({})", tag, m.message, m.kind.cyan());
            }
        }
    }
    for (lang, docs) in &report.missing {
        if use_color {
            use owo_colors::OwoColorize;
            println!("{}", format!("Missing {lang} translations:").yellow());
        } else {
            println!("Missing {lang} translations:");
        }
        for doc in docs {
            println!("  - {doc}");
        }
    }
}
