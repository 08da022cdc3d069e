//! Scenario runner CLI
//!
//! Runs the scripted UI scenarios against a live Appium server with an
//! Android device or emulator attached.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use uitest::{common::logging, scenarios, with_context};

#[derive(Parser)]
#[command(name = "uitest", about = "Appium UI test runner for the Crunchyroll Android app")]
#[command(version, long_about = None)]
struct Cli {
    /// Capabilities configuration file
    #[arg(long, default_value = "config/android-capabilities.yaml")]
    config: PathBuf,

    /// Credentials configuration file
    #[arg(long, default_value = "config/credentials.yaml")]
    credentials: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the onboarding screen texts and buttons
    Onboarding,
    /// Run the login flow end to end
    Login {
        /// User type from the credentials file ("free" or "premium")
        #[arg(long, default_value = "premium")]
        user_type: String,
    },
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();
    let (name, result) = match cli.command {
        Commands::Onboarding => (
            "onboarding",
            with_context(&cli.config, &cli.credentials, |ctx| {
                Box::pin(scenarios::onboarding(ctx))
            })
            .await,
        ),
        Commands::Login { user_type } => (
            "login",
            with_context(&cli.config, &cli.credentials, move |ctx| {
                Box::pin(async move { scenarios::login(ctx, &user_type).await })
            })
            .await,
        ),
    };

    match result {
        Ok(()) => println!("{} scenario '{name}' passed", "✓".green()),
        Err(e) => {
            eprintln!("{} scenario '{name}' failed: {e}", "✗".red());
            std::process::exit(1);
        }
    }
}
