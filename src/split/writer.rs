//! Part materialization
//!
//! Writes each planned range as a standalone PDF. Pages outside the range
//! are deleted from a clone of the source document, orphaned objects are
//! pruned and streams compressed before saving.

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::SplitError;
use crate::split::PartRange;

/// One split output file and its size on disk.
#[derive(Debug, Clone)]
pub struct WrittenPart {
    pub path: PathBuf,
    pub actual_size: u64,
}

/// Write every planned range to `<prefix>_part<N>.pdf`, N starting at 1.
///
/// Existing files are overwritten without prompting. Writes are best-effort,
/// not transactional: parts written before a failure are left in place, and
/// the error reports how many of them there are.
pub fn write_parts(
    doc: &Document,
    plan: &[PartRange],
    prefix: &Path,
) -> Result<Vec<WrittenPart>, SplitError> {
    let mut written = Vec::with_capacity(plan.len());

    for (index, range) in plan.iter().enumerate() {
        let part_number = index + 1;
        let path = part_path(prefix, part_number);

        let actual_size =
            write_part(doc, *range, &path).map_err(|message| SplitError::PartWrite {
                part: part_number,
                parts_written: written.len(),
                message,
            })?;

        log::info!(
            "Wrote {} ({}, {} bytes)",
            path.display(),
            range,
            actual_size
        );
        written.push(WrittenPart { path, actual_size });
    }

    Ok(written)
}

/// Output path for one part: the prefix with "_part<N>.pdf" appended
pub fn part_path(prefix: &Path, part_number: usize) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!("_part{}.pdf", part_number));
    PathBuf::from(name)
}

fn write_part(doc: &Document, range: PartRange, path: &Path) -> Result<u64, String> {
    let mut part = doc.clone();

    let page_count = part.get_pages().len() as u32;
    let delete: Vec<u32> = (1..=page_count)
        .filter(|&number| !range.contains(number as usize - 1))
        .collect();

    part.delete_pages(&delete);
    part.prune_objects();
    part.compress();

    part.save(path)
        .map_err(|e| format!("Failed to save {}: {}", path.display(), e))?;

    let actual_size = fs::metadata(path)
        .map_err(|e| format!("Failed to stat {}: {}", path.display(), e))?
        .len();
    Ok(actual_size)
}
