use crate::cli::QualityPreset;

use super::defaults::*;

/// Engine-facing parameters behind one CLI quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualitySettings {
    /// JPEG quality (1-100) the preset aims for
    pub jpeg_quality: u8,
    /// Render resolution in dots per inch
    pub dpi: u32,
}

impl QualitySettings {
    pub fn for_preset(preset: QualityPreset) -> Self {
        match preset {
            QualityPreset::Low => Self {
                jpeg_quality: 30,
                dpi: 72,
            },
            QualityPreset::Medium => Self {
                jpeg_quality: 60,
                dpi: 150,
            },
            QualityPreset::High => Self {
                jpeg_quality: 90,
                dpi: 300,
            },
        }
    }

    /// Ghostscript -dPDFSETTINGS preset for this resolution
    pub fn gs_preset(&self) -> &'static str {
        match self.dpi {
            0..=72 => "screen",
            73..=150 => "ebook",
            151..=300 => "printer",
            _ => "prepress",
        }
    }
}

/// Invocation parameters for the external compression engine
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Binary to invoke (resolved through PATH)
    pub binary: String,
    /// Value for -dCompatibilityLevel
    pub compatibility_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            binary: DEFAULT_ENGINE_BINARY.to_string(),
            compatibility_level: DEFAULT_COMPATIBILITY_LEVEL.to_string(),
        }
    }
}
