//! Slate developer CLI
//!
//! Thin driver over the library crates: parse-check a document, diff two
//! revisions of a document and print the resulting change list, or map a
//! source offset to the live object declared there.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slate_delta::BindingIndex;
use slate_live::{LiveDirectory, LiveHandle, LiveSource, RecordingTransport};
use slate_parser::{diagnostics, Document};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "Slate live-reload tooling", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and list its declared object ids
    Check {
        /// Input file
        file: PathBuf,
    },

    /// Diff two revisions of a document and print the change list
    Diff {
        /// Previous revision
        old: PathBuf,
        /// Edited revision
        new: PathBuf,
        /// JSON file with a live-handle snapshot; when absent, handles are
        /// synthesized from the previous revision's ids
        #[arg(long)]
        live: Option<PathBuf>,
    },

    /// Map a byte offset to the live object declared at that position
    Locate {
        /// Input file
        file: PathBuf,
        /// Byte offset of the object declaration
        offset: usize,
        /// JSON file with a live-handle snapshot
        #[arg(long)]
        live: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Diff { old, new, live } => diff(&old, &new, live.as_deref()),
        Commands::Locate { file, offset, live } => locate(&file, offset, live.as_deref()),
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.display().to_string();

    match Document::parse(source.clone(), file_name.clone()) {
        Ok(doc) => Ok(doc),
        Err(errors) => {
            diagnostics::emit(&file_name, &source, &errors);
            bail!("{}: {} parse error(s)", path.display(), errors.len());
        }
    }
}

fn check(file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let index = BindingIndex::build(&doc, &LiveDirectory::new());

    println!("{}: ok", file.display());
    for binding in index.all_id_bindings() {
        if let Some(id) = binding.identifier_value() {
            println!(
                "  id {} at {}:{}",
                id, binding.span.line, binding.span.column
            );
        }
    }

    Ok(())
}

fn diff(old: &Path, new: &Path, live: Option<&Path>) -> Result<()> {
    let previous = load_document(old)?;
    let document = load_document(new)?;

    let directory = match live {
        Some(path) => load_directory(path)?,
        None => synthesize_directory(&previous),
    };

    let mut transport = RecordingTransport::new();
    let delta = slate_delta::diff(&document, &previous, &directory, &mut transport);

    for change in delta.changes() {
        println!("{}", serde_json::to_string(change)?);
    }
    eprintln!("{} change(s)", delta.changes().len());

    Ok(())
}

fn locate(file: &Path, offset: usize, live: Option<&Path>) -> Result<()> {
    let doc = load_document(file)?;
    let directory = match live {
        Some(path) => load_directory(path)?,
        None => synthesize_directory(&doc),
    };

    match slate_delta::locate_object_at_offset(&doc, offset, &directory) {
        Some(handle) => println!("{}", serde_json::to_string(&handle)?),
        None => bail!("no live object declared at offset {}", offset),
    }

    Ok(())
}

fn load_directory(path: &Path) -> Result<LiveDirectory> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let handles: Vec<LiveHandle> = serde_json::from_str(&json)
        .with_context(|| format!("invalid live-handle snapshot in {}", path.display()))?;
    Ok(LiveDirectory::from_handles(handles))
}

/// Build a directory in which every id declared in `doc` resolves, with
/// debug ids assigned in traversal order. Lets `diff` run without a
/// connected instance.
fn synthesize_directory(doc: &Document) -> LiveDirectory {
    let index = BindingIndex::build(doc, &LiveDirectory::new());
    let mut directory = LiveDirectory::new();

    for (i, binding) in index.all_id_bindings().iter().enumerate() {
        let Some(id) = binding.identifier_value() else {
            continue;
        };
        let origin = index
            .parent(binding)
            .map(|object| object.header_span())
            .unwrap_or(binding.span);
        directory.push(LiveHandle::new(
            i as u32 + 1,
            id,
            LiveSource {
                url: format!("file://{}", doc.file_name()),
                line: origin.line,
                column: origin.column,
            },
        ));
    }

    directory
}
