//! Routing archive entry names to pack partitions.

use resloc_core::{ResourceId, ResourceKind};

/// Entry-name prefix marking an embedded archive to recurse into.
pub const NESTED_JAR_PREFIX: &str = "META-INF/jars/";

/// Decide whether an archive entry names a content asset, and if so under
/// which key it belongs.
///
/// Accepts at most one leading `/`. The name must have exactly three
/// components: a content-root marker (`assets` or `data`), a namespace and
/// a relative path, the latter two in the restricted identifier charset.
/// Anything else returns `None` and the caller skips the entry.
pub fn parse_entry(name: &str) -> Option<(ResourceKind, ResourceId)> {
    let name = name.strip_prefix('/').unwrap_or(name);

    let mut parts = name.splitn(3, '/');
    let root = parts.next()?;
    let namespace = parts.next()?;
    let path = parts.next()?;

    let kind = match root {
        "assets" => ResourceKind::Client,
        "data" => ResourceKind::Data,
        _ => return None,
    };

    ResourceId::try_parse(namespace, path).map(|id| (kind, id))
}

/// Whether an entry name (with or without a leading `/`) sits under the
/// nested-archive prefix.
pub fn is_nested_jar(name: &str) -> bool {
    name.strip_prefix('/')
        .unwrap_or(name)
        .starts_with(NESTED_JAR_PREFIX)
}

/// Whether the name claims a content-root marker at all, regardless of
/// whether the rest of it validates. Diagnostics only.
pub(crate) fn has_content_root(name: &str) -> bool {
    let name = name.strip_prefix('/').unwrap_or(name);
    name.starts_with("assets/") || name.starts_with("data/")
}
