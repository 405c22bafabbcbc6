use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use pdf_squeeze::cli::{default_compress_output, default_split_prefix, Args, Command};
use pdf_squeeze::compress::compress_file;
use pdf_squeeze::config::{target_size_bytes, EngineSettings};
use pdf_squeeze::split;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    match args.command {
        Command::Compress {
            input,
            output,
            quality,
        } => {
            let output = output.unwrap_or_else(|| default_compress_output(&input));

            log::info!(
                "Compressing {} with {:?} quality",
                input.display(),
                quality
            );

            let report = compress_file(&input, &output, quality, &EngineSettings::default())
                .with_context(|| format!("Failed to compress {}", input.display()))?;

            log::info!("Original size: {:.2} MB", megabytes(report.original_size));
            log::info!(
                "Compressed size: {:.2} MB",
                megabytes(report.compressed_size)
            );
            log::info!("Reduction: {:.1}%", report.reduction_percent());

            println!("Successfully wrote compressed PDF to {}", output.display());
        }
        Command::Split {
            input,
            size_mb,
            prefix,
        } => {
            let target = target_size_bytes(size_mb)?;

            let input_size = fs::metadata(&input)
                .with_context(|| format!("Failed to read input file: {}", input.display()))?
                .len();
            if input_size <= target {
                println!("Input PDF is smaller than the specified size. No splitting needed.");
                return Ok(());
            }

            let doc = lopdf::Document::load(&input)
                .with_context(|| format!("Failed to load PDF: {}", input.display()))?;

            let plan = split::plan(&doc, target)
                .with_context(|| format!("Failed to plan split of {}", input.display()))?;

            log::info!("Splitting into {} parts of up to {} MB each", plan.len(), size_mb);

            let prefix = prefix.unwrap_or_else(|| default_split_prefix(&input));
            let parts = split::write_parts(&doc, &plan, &prefix)
                .with_context(|| format!("Failed to split {}", input.display()))?;

            for part in &parts {
                log::info!(
                    " - {} ({:.1} MB)",
                    part.path.display(),
                    megabytes(part.actual_size)
                );
            }

            println!("Created {} parts", parts.len());
        }
    }

    Ok(())
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
