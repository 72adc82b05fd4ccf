//! CLI entry point for Ivy.

use std::path::PathBuf;

use clap::Parser;

use crate::tools::StudyTool;

/// Ivy study tutor CLI
#[derive(Parser, Debug)]
#[command(name = "ivy", version, about = "Ivy — study tutor chat client")]
pub struct Cli {
    /// Backend endpoint override
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Directory for exported documents
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Arm a study tool for the prompt (flashcards, test, guide, solution)
    #[arg(short, long)]
    pub tool: Option<StudyTool>,

    /// One-shot prompt; omit to start an interactive session
    pub prompt: Option<String>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
