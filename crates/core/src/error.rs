use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {namespace}:{path}")]
    NotFound { namespace: String, path: String },
    #[error("invalid identifier {given:?}: {detail}")]
    InvalidIdentifier { given: String, detail: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    pub fn not_found(namespace: &str, path: &str) -> Self {
        Self::NotFound {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    pub fn invalid_identifier(given: &str, detail: &str) -> Self {
        Self::InvalidIdentifier {
            given: given.to_string(),
            detail: detail.to_string(),
        }
    }
}
