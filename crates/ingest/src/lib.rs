//! Archive discovery and extraction.
//!
//! The ingestion pipeline walks a directory tree for candidate archives,
//! unpacks each one (recursing into archives embedded under the nested-jar
//! prefix) and accumulates the extracted buffers into one
//! [`resloc_core::BufferPack`] per top-level archive:
//!
//! ```text
//! PackScanner ──▶ unpack_archive ──▶ parse_entry + read_with_hint ──▶ BufferPack
//! ```
//!
//! Failures are contained at the narrowest useful scope: a malformed entry
//! name skips that entry, a broken archive aborts only that archive (keeping
//! whatever was already extracted), and the scan itself never fails.

pub mod buffer;
pub mod entry;
pub mod error;
pub mod scan;
pub mod unpack;

pub use buffer::read_with_hint;
pub use entry::parse_entry;
pub use error::UnpackError;
pub use scan::{PackScanner, ScanOutcome, ScanStats};
pub use unpack::unpack_archive;
