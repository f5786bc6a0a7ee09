use std::process::ExitCode;

use clap::Parser;
use console::{Term, style};
use log::{info, warn};
use utility_scripts::cli::{Cli, Commands};
use utility_scripts::component::SequenceRenamer;
use utility_scripts::config::types::Config;
use utility_scripts::init;
use utility_scripts::menu::show_main_menu;

fn main() -> ExitCode {
    init::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sequence(args)) => {
            SequenceRenamer::new(Config::default()).run_from_args(&args)
        }
        None => run_interactive(),
    }
}

/// 互動模式才讀取 settings.json
fn run_interactive() -> ExitCode {
    let term = Term::stdout();
    let mut config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            return ExitCode::FAILURE;
        }
    };

    loop {
        match show_main_menu(&term, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                println!("\n{}", style("Goodbye!").green().bold());
                info!("Program exited normally");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style("Error:").red().bold(), e);
                return ExitCode::FAILURE;
            }
        }
    }
}
