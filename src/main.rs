use clap::Parser;
use log::{error, warn};
use std::io;
use std::process::ExitCode;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    // Initialize logging
    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .ok();

    if args.list {
        println!("{}", cli::output::menu_table(true));
        return ExitCode::SUCCESS;
    }

    let source = cli::build_source(&args);

    // Single view
    if let Some(view) = args.view {
        return match cli::run_view(source.as_ref(), view) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                error!("{}: {}", view.title(), error);
                ExitCode::FAILURE
            }
        };
    }

    // Interactive shell
    if let Err(error) = ctrlc::set_handler(|| {
        println!("\n\n{}", cli::output::FAREWELL);
        std::process::exit(0);
    }) {
        warn!("Unable to install the Ctrl+C handler: {error}");
    }

    // Stdout stays unlocked while waiting for input so the Ctrl+C handler can print
    let result = cli::shell::Shell::new(source.as_ref(), io::stdin().lock(), io::stdout()).run();

    match result {
        Ok(()) => {
            println!("\n\n{}", cli::output::FAREWELL);
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
