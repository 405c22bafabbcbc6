//! External compression engine
//!
//! Thin wrapper around Ghostscript's pdfwrite device. The quality preset
//! picks the engine parameters; the heavy lifting (image downsampling, font
//! subsetting) is entirely the engine's.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::cli::QualityPreset;
use crate::config::{EngineSettings, QualitySettings};
use crate::error::CompressError;

/// Before/after byte sizes of a completed compression.
#[derive(Debug, Clone, Copy)]
pub struct CompressionReport {
    pub original_size: u64,
    pub compressed_size: u64,
}

impl CompressionReport {
    /// Size reduction as a percentage of the original
    pub fn reduction_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.original_size.saturating_sub(self.compressed_size) as f64 * 100.0
            / self.original_size as f64
    }
}

/// Compress `input` into `output` at the given quality preset.
///
/// The source is first rewritten through lopdf into a scratch file, which
/// repairs damaged cross-reference tables before the engine sees them. The
/// scratch directory is removed when this returns.
pub fn compress_file(
    input: &Path,
    output: &Path,
    preset: QualityPreset,
    engine: &EngineSettings,
) -> Result<CompressionReport, CompressError> {
    let original_size = fs::metadata(input)?.len();
    let quality = QualitySettings::for_preset(preset);

    let scratch = tempfile::tempdir()?;
    let normalized = scratch.path().join("input.pdf");

    let mut doc =
        lopdf::Document::load(input).map_err(|e| CompressError::Prepare(e.to_string()))?;
    doc.save(&normalized)
        .map_err(|e| CompressError::Prepare(e.to_string()))?;

    run_engine(&normalized, output, &quality, engine)?;

    let compressed_size = fs::metadata(output)?.len();
    Ok(CompressionReport {
        original_size,
        compressed_size,
    })
}

fn run_engine(
    input: &Path,
    output: &Path,
    quality: &QualitySettings,
    engine: &EngineSettings,
) -> Result<(), CompressError> {
    let mut command = Command::new(&engine.binary);
    command
        .arg("-sDEVICE=pdfwrite")
        .arg(format!(
            "-dCompatibilityLevel={}",
            engine.compatibility_level
        ))
        .arg(format!("-dPDFSETTINGS=/{}", quality.gs_preset()))
        .arg("-dNOPAUSE")
        .arg("-dQUIET")
        .arg("-dBATCH")
        .arg(format!("-sOutputFile={}", output.display()))
        .arg(input);

    log::debug!("Running {:?}", command);

    let outcome = command.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CompressError::EngineMissing
        } else {
            CompressError::Io(e)
        }
    })?;

    if !outcome.status.success() {
        return Err(CompressError::EngineFailed {
            status: outcome.status,
            stderr: String::from_utf8_lossy(&outcome.stderr).into_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_percent() {
        let report = CompressionReport {
            original_size: 200,
            compressed_size: 50,
        };
        assert!((report.reduction_percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduction_percent_of_empty_input() {
        let report = CompressionReport {
            original_size: 0,
            compressed_size: 0,
        };
        assert_eq!(report.reduction_percent(), 0.0);
    }

    #[test]
    fn test_reduction_percent_never_negative() {
        // The engine can occasionally grow a file that was already compact.
        let report = CompressionReport {
            original_size: 100,
            compressed_size: 120,
        };
        assert_eq!(report.reduction_percent(), 0.0);
    }
}
