use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pdf-squeeze")]
#[command(
    author,
    version,
    about = "Compress and split PDF files from the command line"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a PDF through the external Ghostscript engine
    Compress {
        /// Input PDF file path
        input: PathBuf,

        /// Output PDF file path (defaults to "<input stem>_compressed.pdf")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compression quality level
        #[arg(short, long, value_enum, default_value = "medium")]
        quality: QualityPreset,
    },
    /// Split a PDF into parts that approximate a target size
    Split {
        /// Input PDF file path
        input: PathBuf,

        /// Target part size in megabytes
        #[arg(short = 's', long = "size", value_name = "MB")]
        size_mb: f64,

        /// Prefix for part files (defaults to the input path without extension)
        #[arg(short, long)]
        prefix: Option<PathBuf>,
    },
}

/// Compression quality level
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum QualityPreset {
    /// Smallest output, screen resolution
    Low,
    /// Balanced output, ebook resolution
    #[default]
    Medium,
    /// Largest output, print resolution
    High,
}

/// Default compression output path: "<stem>_compressed.pdf" beside the input
pub fn default_compress_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_compressed.pdf", stem))
}

/// Default split prefix: the input path with its extension removed
pub fn default_split_prefix(input: &Path) -> PathBuf {
    input.with_extension("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compress_output() {
        let out = default_compress_output(Path::new("docs/report.pdf"));
        assert_eq!(out, PathBuf::from("docs/report_compressed.pdf"));
    }

    #[test]
    fn test_default_compress_output_without_directory() {
        let out = default_compress_output(Path::new("scan.pdf"));
        assert_eq!(out, PathBuf::from("scan_compressed.pdf"));
    }

    #[test]
    fn test_default_split_prefix_strips_extension() {
        let prefix = default_split_prefix(Path::new("docs/report.pdf"));
        assert_eq!(prefix, PathBuf::from("docs/report"));
    }

    #[test]
    fn test_default_split_prefix_without_extension() {
        let prefix = default_split_prefix(Path::new("report"));
        assert_eq!(prefix, PathBuf::from("report"));
    }
}
