/// Bytes per megabyte used to interpret the CLI split size
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// PDF compatibility level passed to Ghostscript
pub const DEFAULT_COMPATIBILITY_LEVEL: &str = "1.4";

/// Name of the Ghostscript binary looked up on PATH
pub const DEFAULT_ENGINE_BINARY: &str = "gs";
