//! Recursive archive extraction into a [`BufferPack`].

use crate::buffer::read_with_hint;
use crate::entry::{has_content_root, is_nested_jar, parse_entry};
use crate::error::UnpackError;
use resloc_core::BufferPack;
use std::io::{Cursor, Read, Seek};
use tracing::{debug, warn};
use zip::ZipArchive;

/// Unpack every content entry of the archive behind `reader` into `pack`,
/// recursing into archives embedded under the nested-jar prefix.
///
/// `label` names the archive in diagnostics; nested archives get
/// `"<entry> in <label>"`. A nested archive that fails to unpack is logged
/// and skipped without aborting the outer archive. An error in the outer
/// container propagates to the caller, but everything extracted up to that
/// point stays in `pack`.
pub fn unpack_archive<R: Read + Seek>(
    reader: R,
    pack: &mut BufferPack,
    label: &str,
) -> Result<(), UnpackError> {
    let mut archive = ZipArchive::new(reader)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        // Declared size from the entry header; read_with_hint treats it as
        // untrustworthy.
        let hint = entry.size() as usize;

        if is_nested_jar(&name) {
            let bytes = read_with_hint(&mut entry, hint)?;
            let nested_label = format!("{name} in {label}");
            if let Err(err) = unpack_archive(Cursor::new(bytes), pack, &nested_label) {
                warn!("error reading nested archive {nested_label}: {err}");
            }
        } else if let Some((kind, id)) = parse_entry(&name) {
            let bytes = read_with_hint(&mut entry, hint)?;
            pack.put(kind, id, bytes);
        } else if has_content_root(&name) {
            debug!("skipping entry with unusable name {name:?} in {label}");
        }
    }

    Ok(())
}
