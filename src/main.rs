use clap::{CommandFactory, Parser};
use codetasks::cli::commands::{Cli, Commands};
use codetasks::cli::handlers;
use codetasks::util::logging::{self, LogTarget};

fn main() {
    let cli = Cli::parse();

    // The panel owns the terminal, so it only ever logs to a file
    let target = match cli.command {
        Some(Commands::Panel(_)) => LogTarget::FileOnly,
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref(), target) {
        eprintln!("warning: could not open log file: {}", e);
    }

    match cli.command {
        None => {
            // No subcommand → usage
            let _ = Cli::command().print_help();
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
