pub mod check;
pub mod schema;
pub mod translation_status;

use mdloc_config::DocConfig;
use std::path::Path;

/// Load the config, creating it with starter values on first run.
pub fn load_config(path: &Path) -> color_eyre::Result<DocConfig> {
    let (cfg, created) = mdloc_config::load_or_create(path)?;
    if created {
        ui_info!("Created default configuration at {}", path.display());
    }
    tracing::debug!(event = "config_loaded", path = %path.display(), languages = ?cfg.supported_languages);
    Ok(cfg)
}

pub fn to_sorted_lists(
    map: &std::collections::BTreeMap<String, std::collections::BTreeSet<String>>,
) -> std::collections::BTreeMap<String, Vec<String>> {
    map.iter()
        .map(|(lang, docs)| (lang.clone(), docs.iter().cloned().collect()))
        .collect()
}
