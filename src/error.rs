use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the corpus or answering a query.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to read {path}: {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed corpus: {0}")]
    MalformedCorpus(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unknown title: {0}")]
    UnknownTitle(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Startup errors leave the process with nothing to serve.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SearchError::MissingInput { .. } | SearchError::MalformedCorpus(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::UnknownTitle("HAMLET".to_string());
        assert_eq!(err.to_string(), "Unknown title: HAMLET");

        let err = SearchError::InvalidQuery("empty needle".to_string());
        assert_eq!(err.to_string(), "Invalid query: empty needle");
    }

    #[test]
    fn test_fatal_errors() {
        let missing = SearchError::MissingInput {
            path: PathBuf::from("./titles.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(missing.is_fatal());
        assert!(missing.to_string().contains("./titles.txt"));
        assert!(SearchError::MalformedCorpus("no FINIS".to_string()).is_fatal());

        assert!(!SearchError::InvalidQuery("".to_string()).is_fatal());
        assert!(!SearchError::UnknownTitle("X".to_string()).is_fatal());
    }
}
