//! Content error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, identifying or validating content.
///
/// All of them abort the run: a site with broken content is never emitted.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("blog path must match format YYYY-MM-DD-<slug>, provided: `{path}`")]
    Format { path: String },

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("[{collection}] entry `{entry}`, field `{field}`: {reason}")]
    Validation {
        collection: String,
        entry: String,
        field: String,
        reason: String,
    },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid frontmatter in `{0}`")]
    Frontmatter(PathBuf, #[source] serde_yaml::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("`{0}` must hold a mapping of fields")]
    NotAMapping(PathBuf),

    #[error("invalid glob pattern `{0}`")]
    Pattern(String, #[source] regex::Error),
}

impl ContentError {
    pub fn validation(
        collection: &str,
        entry: &str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            collection: collection.to_owned(),
            entry: entry.to_owned(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_path() {
        let err = ContentError::Format {
            path: "hello-world/index.md".into(),
        };
        assert!(err.to_string().contains("hello-world/index.md"));
    }

    #[test]
    fn test_validation_error_names_collection_entry_field() {
        let err = ContentError::validation("blog", "hello-world", "authors[0]", "unknown profile");
        let display = err.to_string();
        assert!(display.contains("[blog]"));
        assert!(display.contains("hello-world"));
        assert!(display.contains("authors[0]"));
        assert!(display.contains("unknown profile"));
    }
}
