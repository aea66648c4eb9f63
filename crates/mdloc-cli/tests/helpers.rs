use std::fs;
use std::path::{Path, PathBuf};

pub const GOOD_DOC: &str = "# Title\n\n\
Enough introductory prose to clear the minimum length check without any trouble.\n\n\
## Installation\n\n```sh\ncargo install mdloc\n```\n\n\
## Usage\n\nSee [the guide](../guide.md).\n\n\
## Configuration\n\n![diagram](/img/diagram.png)\n";

pub fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(&p, content).unwrap();
    p
}

/// Write a config next to the docs so tests never touch the working directory.
pub fn write_config(root: &Path, body: &str) -> PathBuf {
    write(root, "doc_quality.toml", body)
}

pub const STARTER_CONFIG: &str = "min_length = 100\n\
required_sections = [\"Configuration\", \"Installation\", \"Usage\"]\n\
supported_languages = [\"de\", \"en\", \"es\", \"it\"]\n\
code_example_required = true\n\
image_required = true\n";

/// Check that a string contains a substring, printing the output on failure.
pub fn assert_contains_with_context(haystack: &str, needle: &str, context_msg: &str) {
    if haystack.contains(needle) {
        return;
    }
    let head = haystack.lines().take(10).collect::<Vec<_>>().join("\n");
    panic!(
        "{}\n--- needle ---\n{}\n--- head(10) ---\n{}",
        context_msg, needle, head
    );
}
