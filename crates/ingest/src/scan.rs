//! Directory scanning for candidate archives.
//!
//! Walks a root directory (following symlinks), filters for plausible mod
//! archives and unpacks each one into its own [`BufferPack`]. Per-file
//! problems are logged and skipped; the scan itself always completes.

use crate::unpack::unpack_archive;
use resloc_core::BufferPack;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};
use walkdir::{DirEntry, WalkDir};

/// Scans one root directory for archives to unpack.
pub struct PackScanner {
    root: PathBuf,
}

/// Everything a scan produced: one pack per candidate archive that could be
/// opened, plus bookkeeping for diagnostics.
pub struct ScanOutcome {
    pub packs: Vec<BufferPack>,
    pub stats: ScanStats,
}

/// Result counters for one scan pass.
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    /// Files that passed the candidate filter.
    pub candidates: usize,
    /// Archives unpacked without error.
    pub unpacked: usize,
    /// Archives that could not be opened or failed partway through.
    pub failed: usize,
    /// Time taken for the scan.
    pub duration: Duration,
}

impl PackScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the root and unpack every candidate archive.
    ///
    /// A root that is not a directory is an error-logged no-op. An archive
    /// that fails partway still yields its pack with whatever was extracted
    /// before the failure.
    pub fn scan(&self) -> ScanOutcome {
        let start = std::time::Instant::now();
        let mut outcome = ScanOutcome {
            packs: Vec::new(),
            stats: ScanStats::default(),
        };

        if !self.root.is_dir() {
            error!("scan root is not a directory: {}", self.root.display());
            outcome.stats.duration = start.elapsed();
            return outcome;
        }

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    error!("error walking scan root: {err}");
                    continue;
                }
            };

            if !is_candidate(&entry) {
                continue;
            }
            outcome.stats.candidates += 1;

            let path = entry.path();
            debug!("unpacking archive {}", path.display());

            let file = match File::open(path) {
                Ok(file) => file,
                Err(err) => {
                    error!("could not open {}: {err}", path.display());
                    outcome.stats.failed += 1;
                    continue;
                }
            };

            let label = format!("Rawfile ({})", path.display());
            let mut pack = BufferPack::new(&label);
            match unpack_archive(BufReader::new(file), &mut pack, &label) {
                Ok(()) => outcome.stats.unpacked += 1,
                Err(err) => {
                    error!("error reading archive {}: {err}", path.display());
                    outcome.stats.failed += 1;
                }
            }
            outcome.packs.push(pack);
        }

        outcome.stats.duration = start.elapsed();
        info!(
            "scan of {} complete: {} candidates, {} unpacked, {} failed in {:?}",
            self.root.display(),
            outcome.stats.candidates,
            outcome.stats.unpacked,
            outcome.stats.failed,
            outcome.stats.duration
        );

        outcome
    }
}

fn is_candidate(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return false;
    }

    if entry.path().extension().and_then(|ext| ext.to_str()) != Some("jar") {
        return false;
    }

    !is_hidden(entry)
}

#[cfg(windows)]
fn is_hidden(entry: &DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    match entry.metadata() {
        Ok(meta) => meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0,
        Err(err) => {
            // Treat unknown as hidden, matching the skip-on-error taxonomy.
            error!("error checking if {} is hidden: {err}", entry.path().display());
            true
        }
    }
}

#[cfg(not(windows))]
fn is_hidden(_entry: &DirEntry) -> bool {
    // Dot-prefixed names are already filtered; nothing else marks a file
    // hidden on unix filesystems.
    false
}
