use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ct", about = concat!("codetasks v", env!("CARGO_PKG_VERSION"), " - TODO: and FIXME: in a panel"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ./codetasks.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List TODO:/FIXME: markers in a document
    Scan(ScanArgs),
    /// Print the task panel as an HTML page
    Render(DocumentArgs),
    /// Run a panel session over stdin/stdout (JSON lines)
    Serve(DocumentArgs),
    /// Open the task panel in the terminal
    Panel(DocumentArgs),
}

#[derive(Args)]
pub struct DocumentArgs {
    /// The active document (omit for none)
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScanArgs {
    /// The active document (omit for none)
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
