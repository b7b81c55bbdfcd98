//! Core data model for the resource locator.
//!
//! This crate defines the pieces that outlive a scan:
//! - [`ResourceId`] - the `(namespace, path)` key addressing one asset
//! - [`BufferPack`] - the in-memory store built from one top-level archive
//! - [`AssetContainer`] - the lookup API exposed to downstream consumers
//!
//! Archive discovery and extraction live in `resloc-ingest`; this crate has
//! no IO beyond handing out readers over already-extracted buffers.

pub mod container;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod store;

pub use container::{AssetContainer, TextureStreams};
pub use error::AssetError;
pub use identifier::ResourceId;
pub use store::{BufferPack, ByteStream, ResourceKind, SharedBytes};
