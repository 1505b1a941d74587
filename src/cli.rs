//! Command line interface
//!
//! `serve` (the default) starts the web widget; `analyze <PATH>` runs the same
//! pipeline once on a local file and prints what the widget would display.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::analysis::{render_outcome, ReportAnalyzer};
use crate::document::UploadedDocument;

#[derive(Debug, Parser)]
#[command(name = "medical-report-analyzer", version, about = "AI-powered medical report analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the upload widget over HTTP
    Serve,
    /// Analyze a single PDF or image file and print the result
    Analyze {
        /// Path to the report
        path: PathBuf,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// Read `path` and return the rendered analysis. Only a failure to read the
/// file is an error; pipeline failures are part of the rendered text.
pub async fn run_analyze(analyzer: &ReportAnalyzer, path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let document = UploadedDocument::from_upload(filename, bytes);
    info!(filename = %document.filename(), kind = document.kind(), "Analyzing local file");

    Ok(render_outcome(&analyzer.analyze(&document).await))
}
