pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod split;

pub use cli::QualityPreset;
pub use compress::{compress_file, CompressionReport};
pub use config::{target_size_bytes, EngineSettings, QualitySettings};
pub use error::{CompressError, ConfigError, SplitError};
pub use split::{pack_pages, plan, write_parts, PartRange, WrittenPart};

use std::path::Path;

/// High-level API for splitting a PDF file into size-bounded parts.
///
/// This is the recommended entry point for library consumers. It loads the
/// document, plans contiguous page ranges whose estimated sizes approximate
/// `target_bytes`, and writes one `<prefix>_part<N>.pdf` file per range.
///
/// # Arguments
///
/// * `input` - Path of the PDF to split
/// * `target_bytes` - Approximate maximum size per part, in bytes (see
///   [`target_size_bytes`] for converting a megabyte request)
/// * `prefix` - Output path prefix; part numbers and the `.pdf` extension
///   are appended
///
/// # Returns
///
/// The written parts in order, each with its path and actual on-disk size,
/// or a [`SplitError`] on failure. An unreadable page fails the whole
/// operation before any file is written; a write failure leaves earlier
/// parts in place.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pdf_squeeze::{split_into_parts, target_size_bytes};
///
/// let target = target_size_bytes(25.0).unwrap();
/// let parts = split_into_parts(Path::new("report.pdf"), target, Path::new("report")).unwrap();
/// for part in parts {
///     println!("{} ({} bytes)", part.path.display(), part.actual_size);
/// }
/// ```
pub fn split_into_parts(
    input: &Path,
    target_bytes: u64,
    prefix: &Path,
) -> Result<Vec<WrittenPart>, SplitError> {
    let doc = lopdf::Document::load(input).map_err(SplitError::Load)?;
    let plan = split::plan(&doc, target_bytes)?;
    split::write_parts(&doc, &plan, prefix)
}
