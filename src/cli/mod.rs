//! Command-line argument types

pub mod args;

pub use args::{default_compress_output, default_split_prefix, Args, Command, QualityPreset};
