use anyhow::Result;
use clap::{Parser, Subcommand};

use finview::config::{paths::FinviewPaths, settings::Settings};
use finview::storage::Store;

#[derive(Parser)]
#[command(
    name = "finview",
    version,
    about = "Terminal personal finance dashboard",
    long_about = "finview is a terminal dashboard for personal finances: record \
                  transactions, categorize spending, set per-category monthly \
                  budgets, and watch it all on charts without leaving the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (the default)
    #[command(alias = "ui")]
    Tui,

    /// Initialize the data directory and seed default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinviewPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; data files are read later, inside each
    // store's load step
    let store = Store::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing finview at: {}", paths.base_dir().display());
            store.load_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Seeded {} default categories (run 'finview' to start tracking).",
                store.categories.count()?
            );
        }
        Some(Commands::Config) => {
            println!("finview Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        Some(Commands::Tui) | None => {
            finview::tui::run_tui(&store, &settings)?;
        }
    }

    Ok(())
}
