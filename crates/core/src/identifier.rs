//! Namespaced resource identifiers.
//!
//! An identifier is the `(namespace, path)` pair under which one asset is
//! addressable within a pack partition. Both halves use a restricted
//! charset: lowercase letters, digits, `_`, `.` and `-`, with `/` also
//! permitted in paths as the segment separator.

use crate::error::AssetError;
use std::fmt;

/// Key addressing one asset within a pack partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Build a validated identifier.
    ///
    /// Fails with [`AssetError::InvalidIdentifier`] naming the offending
    /// half when either part contains characters outside the restricted
    /// charset or is empty.
    pub fn new(namespace: &str, path: &str) -> Result<Self, AssetError> {
        if !is_valid_namespace(namespace) {
            return Err(AssetError::invalid_identifier(
                namespace,
                "namespace must be non-empty [a-z0-9_.-]",
            ));
        }
        if !is_valid_path(path) {
            return Err(AssetError::invalid_identifier(
                path,
                "path must be non-empty [a-z0-9_.-/]",
            ));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Non-signaling constructor used by the unpacker: malformed entry
    /// names are dropped rather than aborting the surrounding archive.
    pub fn try_parse(namespace: &str, path: &str) -> Option<Self> {
        Self::new(namespace, path).ok()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.bytes().all(is_namespace_byte)
}

fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .bytes()
            .all(|b| is_namespace_byte(b) || b == b'/')
}

fn is_namespace_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'.' || b == b'-'
}
