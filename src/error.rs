//! Error type shared by loading, extraction, plotting and export
//!
//! Every stage fails fast: errors are never recovered locally, they travel up
//! to the binary which prints them and exits with a non-zero status.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning a checkpoint into charts or tables
#[derive(Debug, Error)]
pub enum ReportError {
    /// `solver_data.json` is absent from the checkpoint directory
    #[error("checkpoint file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file is not valid JSON
    #[error("invalid JSON in checkpoint: {0}")]
    Parse(#[source] serde_json::Error),

    /// The JSON does not have the shape the renderers need
    #[error("unexpected checkpoint layout: {0}")]
    Schema(String),

    /// Filesystem failure other than a missing input
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend refused to draw or encode the image
    #[error("rendering failed: {0}")]
    Render(String),
}

impl ReportError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        ReportError::Schema(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }
}

impl From<serde_json::Error> for ReportError {
    /// Syntax and truncation problems are parse errors; well-formed JSON with
    /// missing or mistyped fields is a schema error.
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => ReportError::Schema(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => ReportError::Parse(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_is_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        assert!(matches!(ReportError::from(err), ReportError::Parse(_)));
    }

    #[test]
    fn test_truncated_input_is_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": [1, 2").unwrap_err();
        assert!(matches!(ReportError::from(err), ReportError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_schema() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Needs {
            total_energy: f64,
        }

        let err = serde_json::from_str::<Needs>("{}").unwrap_err();
        let err = ReportError::from(err);
        assert!(matches!(err, ReportError::Schema(_)));
        assert!(err.to_string().contains("total_energy"));
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = ReportError::NotFound { path: PathBuf::from("/tmp/run/solver_data.json") };
        assert!(err.to_string().contains("/tmp/run/solver_data.json"));
    }

    #[test]
    fn test_io_message_names_path_and_cause() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReportError::io("/tmp/run/plots", source);
        let message = err.to_string();
        assert!(message.contains("/tmp/run/plots"), "{message}");
        assert!(message.contains("denied"), "{message}");
    }
}
