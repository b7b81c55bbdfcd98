//! In-memory asset store built from one top-level archive.
//!
//! A [`BufferPack`] accumulates every asset found in one archive and all
//! archives nested beneath it. It holds two independent partitions, one for
//! client resources (`assets/`) and one for server data (`data/`), each a
//! plain identifier-to-buffer map. Population is single-writer; once handed
//! off to an aggregator the pack is only read.

use crate::identifier::ResourceId;
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Arc;

/// Which partition of a pack an asset lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Client-side resources, extracted from `assets/` entries.
    Client,
    /// Server data, extracted from `data/` entries.
    Data,
}

/// Immutable exact-length byte buffer, cheaply cloneable.
///
/// Buffers are produced once by extraction and never mutated. Handing one to
/// a reader clones the `Arc`, not the bytes.
#[derive(Debug, Clone)]
pub struct SharedBytes(Arc<[u8]>);

/// Independent read cursor over a [`SharedBytes`] buffer.
pub type ByteStream = Cursor<SharedBytes>;

impl SharedBytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Open a fresh stream over the buffer without copying it.
    pub fn reader(&self) -> ByteStream {
        Cursor::new(self.clone())
    }
}

impl From<Vec<u8>> for SharedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for SharedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// In-memory store of extracted assets, one per top-level archive.
pub struct BufferPack {
    name: String,
    assets: HashMap<ResourceId, SharedBytes>,
    data: HashMap<ResourceId, SharedBytes>,
}

impl BufferPack {
    /// `name` is purely diagnostic, e.g. `Rawfile (mods/foo.jar)`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: HashMap::new(),
            data: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a buffer under `id`. Re-inserting an existing identifier
    /// overwrites the prior buffer; last write wins.
    pub fn put(&mut self, kind: ResourceKind, id: ResourceId, bytes: impl Into<SharedBytes>) {
        self.partition_mut(kind).insert(id, bytes.into());
    }

    pub fn get(&self, kind: ResourceKind, id: &ResourceId) -> Option<&SharedBytes> {
        self.partition(kind).get(id)
    }

    /// Open a stream over the asset, if present.
    pub fn open(&self, kind: ResourceKind, id: &ResourceId) -> Option<ByteStream> {
        self.get(kind, id).map(SharedBytes::reader)
    }

    pub fn contains(&self, kind: ResourceKind, id: &ResourceId) -> bool {
        self.partition(kind).contains_key(id)
    }

    /// Iterate assets whose namespace matches exactly and whose path starts
    /// with `prefix`. No ordering guarantee.
    pub fn find_resources<'a>(
        &'a self,
        kind: ResourceKind,
        namespace: &'a str,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a ResourceId, ByteStream)> {
        self.partition(kind)
            .iter()
            .filter(move |(id, _)| id.namespace() == namespace && id.path().starts_with(prefix))
            .map(|(id, bytes)| (id, bytes.reader()))
    }

    /// Distinct namespaces present in the partition.
    pub fn namespaces(&self, kind: ResourceKind) -> HashSet<&str> {
        self.partition(kind)
            .keys()
            .map(ResourceId::namespace)
            .collect()
    }

    pub fn len(&self, kind: ResourceKind) -> usize {
        self.partition(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.data.is_empty()
    }

    fn partition(&self, kind: ResourceKind) -> &HashMap<ResourceId, SharedBytes> {
        match kind {
            ResourceKind::Client => &self.assets,
            ResourceKind::Data => &self.data,
        }
    }

    fn partition_mut(&mut self, kind: ResourceKind) -> &mut HashMap<ResourceId, SharedBytes> {
        match kind {
            ResourceKind::Client => &mut self.assets,
            ResourceKind::Data => &mut self.data,
        }
    }
}
