mod serve;
pub use serve::{ServeEvent, ServeHost, run_serve};

use std::io::{self, Write};
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::document_io;
use crate::io::host::{Host, RevealTarget};
use crate::model::config::Config;
use crate::model::document::Document;
use crate::ops::extract::extract_tasks;
use crate::ops::panel::{HtmlSurface, Session};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // scan prints raw tasks and never reads the config
    match cli.command {
        None => Ok(()),
        Some(Commands::Scan(args)) => cmd_scan(args),
        Some(Commands::Render(args)) => cmd_render(args, &load_config_cwd(cli.config.as_deref())?),
        Some(Commands::Serve(args)) => cmd_serve(args, &load_config_cwd(cli.config.as_deref())?),
        Some(Commands::Panel(args)) => {
            let config = load_config_cwd(cli.config.as_deref())?;
            let active = document_io::load_active(args.file.as_deref())?;
            crate::tui::run(active, &config)
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn load_config_cwd(explicit: Option<&Path>) -> Result<Config, config_io::ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| config_io::ConfigError::ReadError {
        path: ".".into(),
        source: e,
    })?;
    config_io::load_config(explicit, &cwd)
}

/// Host for one-shot commands: it has an active document but nowhere to
/// navigate to.
struct OneShotHost {
    active: Option<Document>,
}

impl Host for OneShotHost {
    fn active_document(&self) -> Option<Document> {
        self.active.clone()
    }

    fn reveal(&mut self, target: RevealTarget) {
        tracing::debug!(path = %target.path, "no editor to reveal in, dropping");
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_scan(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let active = document_io::load_active(args.file.as_deref())?;
    let tasks = extract_tasks(active.as_ref());

    let mut out = io::stdout().lock();
    if args.json {
        let items: Vec<TaskJson> = tasks.iter().map(task_to_json).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    } else {
        for task in &tasks {
            writeln!(out, "{}", format_task_line(task))?;
        }
    }
    Ok(())
}

fn cmd_render(args: DocumentArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let active = document_io::load_active(args.file.as_deref())?;
    let mut host = OneShotHost { active };
    let session = Session::open(&mut host, HtmlSurface::default(), config.panel.title.as_str());

    let mut out = io::stdout().lock();
    out.write_all(session.surface().html.as_bytes())?;
    Ok(())
}

fn cmd_serve(args: DocumentArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let active = document_io::load_active(args.file.as_deref())?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_serve(active, &config.panel.title, stdin, stdout)?;
    Ok(())
}
