//! rwlens CLI - Command-line tool for inspecting RenderWare stream files.
//!
//! This is the main entry point for the rwlens command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use rwlens::prelude::*;
use rwlens::stream::DEFAULT_MAX_DEPTH;

/// rwlens - RenderWare stream inspection tool
#[derive(Parser)]
#[command(name = "rwlens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the chunk tree of a stream file
    Tree {
        /// Input stream file (.dff, .txd, ...)
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum recursion depth
        #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: usize,
    },

    /// Export a chunk's bytes to a file
    Export {
        /// Input stream file
        #[arg(short, long)]
        input: PathBuf,

        /// Byte offset of the chunk header (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_offset)]
        offset: u64,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Export only the payload (unwrapping named assets) instead of
        /// header plus payload
        #[arg(short, long)]
        payload: bool,
    },

    /// Replace a chunk's payload and write the modified file
    Replace {
        /// Input stream file
        #[arg(short, long)]
        input: PathBuf,

        /// Byte offset of the chunk header (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_offset)]
        offset: u64,

        /// File holding the replacement payload bytes
        #[arg(long)]
        payload: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Parse every stream file under a directory and summarize anomalies
    Scan {
        /// Directory to scan
        #[arg(short, long)]
        dir: PathBuf,
    },
}

fn parse_offset(s: &str) -> std::result::Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| format!("invalid offset: {s}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { input, depth } => {
            cmd_tree(&input, depth)?;
        }
        Commands::Export {
            input,
            offset,
            output,
            payload,
        } => {
            cmd_export(&input, offset, &output, payload)?;
        }
        Commands::Replace {
            input,
            offset,
            payload,
            output,
        } => {
            cmd_replace(&input, offset, &payload, &output)?;
        }
        Commands::Scan { dir } => {
            cmd_scan(&dir)?;
        }
    }

    Ok(())
}

/// Read a file and check it actually looks like a chunk stream.
fn read_stream_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let hint = path.extension().and_then(|e| e.to_str());
    match sniff(&data, hint) {
        StreamKind::Chunk => Ok(data),
        StreamKind::Collision => {
            bail!("{} is a collision archive, not a chunk stream", path.display())
        }
        StreamKind::Unknown => {
            bail!("{} does not look like a chunk stream", path.display())
        }
    }
}

fn cmd_tree(input: &Path, depth: usize) -> Result<()> {
    let data = read_stream_file(input)?;
    let tree = ChunkTree::parse_with(&data, catalog(), depth);

    println!(
        "{} ({} bytes, {} chunks)",
        input.display(),
        data.len(),
        tree.len()
    );
    for root in tree.roots() {
        print_node(root, 0);
    }
    Ok(())
}

fn print_node(node: &ChunkNode, indent: usize) {
    let mut flags = String::new();
    if node.corrupt {
        flags.push_str(" [corrupt]");
    }
    if node.stalled {
        flags.push_str(" [stalled]");
    }

    println!(
        "{:indent$}{:#010x}  {}  {} bytes  {}{}",
        "",
        node.header.offset,
        node.display_label(),
        node.header.payload_size,
        node.version_display,
        flags,
        indent = indent * 2,
    );

    for child in &node.children {
        print_node(child, indent + 1);
    }
}

fn cmd_export(input: &Path, offset: u64, output: &Path, payload_only: bool) -> Result<()> {
    let data = read_stream_file(input)?;
    let tree = ChunkTree::parse(&data);

    let node = tree
        .find_at_offset(offset)
        .with_context(|| format!("No chunk header at offset {:#x}", offset))?;

    let bytes = if payload_only {
        editor::export_payload(&data, node)?
    } else {
        editor::export_full(&data, node)?
    };

    fs::write(output, bytes).with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Exported {} ({} bytes) to {}",
        node.display_label(),
        bytes.len(),
        output.display()
    );
    Ok(())
}

fn cmd_replace(input: &Path, offset: u64, payload: &Path, output: &Path) -> Result<()> {
    let data = read_stream_file(input)?;
    let new_payload = fs::read(payload)
        .with_context(|| format!("Failed to read payload {}", payload.display()))?;

    let tree = ChunkTree::parse(&data);
    let node = tree
        .find_at_offset(offset)
        .with_context(|| format!("No chunk header at offset {:#x}", offset))?;

    let old_size = node.header.payload_size;
    let modified = editor::replace_payload(&data, node, &new_payload)?;

    // Ancestor sizes are not adjusted by a single-chunk edit, so re-parse
    // and confirm the target still resolves before writing anything out.
    let reparsed = ChunkTree::parse(&modified);
    if reparsed.find_at_offset(offset).is_none() {
        bail!("Modified buffer does not re-parse at offset {:#x}", offset);
    }

    fs::write(output, &modified)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Replaced {} payload: {} -> {} bytes, wrote {}",
        node.display_label(),
        old_size,
        new_payload.len(),
        output.display()
    );
    Ok(())
}

fn cmd_scan(dir: &Path) -> Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    println!("Scanning {} files in {}", files.len(), dir.display());

    let progress = ProgressBar::new(files.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        progress.set_style(style);
    }

    // One buffer and one tree per file; parses share nothing mutable.
    let reports: Vec<(PathBuf, usize, usize, usize)> = files
        .par_iter()
        .filter_map(|path| {
            let result = (|| {
                let data = fs::read(path).ok()?;
                let hint = path.extension().and_then(|e| e.to_str());
                if sniff(&data, hint) != StreamKind::Chunk {
                    return None;
                }

                let tree = ChunkTree::parse(&data);
                let corrupt = tree.iter().filter(|n| n.corrupt).count();
                let unknown = tree.iter().filter(|n| n.unknown_type()).count();
                Some((path.clone(), tree.len(), corrupt, unknown))
            })();
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_and_clear();

    let mut total_chunks = 0;
    for (path, chunks, corrupt, unknown) in &reports {
        total_chunks += chunks;
        if *corrupt > 0 || *unknown > 0 {
            println!(
                "{}: {} chunks, {} corrupt, {} unknown types",
                path.display(),
                chunks,
                corrupt,
                unknown
            );
        }
    }

    println!(
        "Scanned {} stream files ({} chunks) in {:?}",
        reports.len(),
        total_chunks,
        start.elapsed()
    );
    Ok(())
}
