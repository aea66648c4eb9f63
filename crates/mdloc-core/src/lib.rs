use thiserror::Error;

pub mod name;

pub use name::DocName;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Extension every scanned document must carry.
pub const MARKDOWN_EXT: &str = "md";

/// Returns true when `file_name` ends in the Markdown extension.
///
/// Matching is case-sensitive: `README.MD` is not picked up.
pub fn is_markdown_name(file_name: &str) -> bool {
    file_name
        .strip_suffix(MARKDOWN_EXT)
        .is_some_and(|rest| rest.ends_with('.'))
}

#[derive(Debug, Error)]
pub enum MdLocError {
    #[error("docs directory not found: {0}")]
    DocsDirNotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("{0}")]
    Other(String),
}
