use std::fs;
use std::path::Path;

pub fn run_schema(out_dir: &Path) -> color_eyre::Result<()> {
    fs::create_dir_all(out_dir)?;
    macro_rules! dump {
        ($ty:ty, $name:literal) => {{
            let schema = schemars::schema_for!($ty);
            let path = out_dir.join($name);
            let f = std::fs::File::create(&path)?;
            serde_json::to_writer_pretty(f, &schema)?;
        }};
    }
    dump!(mdloc_domain::QualityOutput, "quality_output.schema.json");
    dump!(mdloc_domain::CoverageOutput, "coverage_output.schema.json");
    ui_ok!("Schemas written to {}", out_dir.display());
    Ok(())
}
