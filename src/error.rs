use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to load PDF: {0}")]
    Load(#[source] lopdf::Error),

    #[error("Cannot read page {page}: {message}")]
    PageRead { page: usize, message: String },

    #[error("Failed to write part {part} ({parts_written} parts already written): {message}")]
    PartWrite {
        part: usize,
        parts_written: usize,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Ghostscript (gs) not found. Please install it first.")]
    EngineMissing,

    #[error("Ghostscript failed with {status}: {stderr}")]
    EngineFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Failed to prepare input for compression: {0}")]
    Prepare(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Split size must be a positive number of megabytes, got {0}")]
    InvalidTargetSize(f64),
}
