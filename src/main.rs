use anyhow::Result;
use clap::Parser;

use spendbook::cli::{handle_command, Commands};
use spendbook::config::SpendbookPaths;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Command-line personal expense ledger",
    long_about = "spendbook records dated expense entries (category, title, amount, \
                  notes) in a flat CSV file and renders aggregated views: category \
                  totals, month-filtered category totals, and daily totals."
)]
struct Cli {
    /// Owner name; selects which ledger file is used
    #[arg(long, global = true, env = "SPENDBOOK_NAME", default_value = "user")]
    name: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendbookPaths::new()?;
    paths.ensure_directories()?;

    match cli.command {
        Some(cmd) => handle_command(&paths, &cli.name, cmd)?,
        None => {
            println!("spendbook - command-line personal expense ledger");
            println!();
            println!("Run 'spendbook --help' for usage information.");
            println!("Run 'spendbook list' to see recorded entries.");
        }
    }

    Ok(())
}
