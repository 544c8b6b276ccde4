//! Catalog loading errors

use std::path::PathBuf;

/// Errors raised while loading a catalog
///
/// Derivations over a loaded catalog never fail; everything that can go
/// wrong happens here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or a post is malformed
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two posts share a slug
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_slug_message() {
        let err = CatalogError::DuplicateSlug("hello-world".to_string());
        assert_eq!(err.to_string(), "duplicate slug: hello-world");
    }

    #[test]
    fn test_io_message_includes_path() {
        let err = CatalogError::Io {
            path: PathBuf::from("/tmp/posts.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/posts.json"));
    }
}
