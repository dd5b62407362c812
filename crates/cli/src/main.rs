mod cmd;
mod logging;
mod tui;

use clap::{Args, Parser, Subcommand};
use datepicker_core::config::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "datepick", version, about = "Calendar date picker in the terminal")]
struct Cli {
    /// Config file (default: ~/.config/datepicker/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved widget options
    Doctor,

    /// Print the calendar dialog for one month
    Month(MonthArgs),

    /// Show which date a text field value selects
    Check(CheckArgs),

    /// Open the interactive date picker
    Tui(TuiArgs),
}

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Year to show (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to show, 1-12 (default: current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Initial text field value
    #[arg(long, default_value = "")]
    pub value: String,

    /// Output the dialog view-model as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Text field value to check
    pub text: String,
}

#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Initial text field value
    #[arg(long, default_value = "")]
    pub value: String,
}

fn main() {
    let cli = Cli::parse();

    let cfg = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            if matches!(cli.command, Commands::Doctor) {
                cmd::doctor::fail(&e, cli.config.as_deref());
            }
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&cfg.logging);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&cfg),
        Commands::Month(args) => cmd::month::run(&cfg, &args),
        Commands::Check(args) => cmd::check::run(&cfg, &args.text),
        Commands::Tui(args) => {
            if let Err(e) = tui::run(&cfg, &args.value) {
                eprintln!("{e:?}");
                std::process::exit(1);
            }
        }
    }

    logging::shutdown();
}
