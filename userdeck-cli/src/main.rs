mod commands;
mod config;
mod logging;
mod output;

use std::io::IsTerminal;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use commands::list::ListArgs;
use config::GlobalArgs;
use user_service::RandomUserClient;

/// Browse a batch of randomly generated users
#[derive(Parser, Debug)]
#[command(name = "userdeck", version)]
#[command(about = "Browse randomly generated users in the terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch once and print the table to stdout
    List(ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let client = RandomUserClient::new(cli.global.client_config())?;

    match cli.command {
        Some(Commands::List(args)) => {
            logging::init_stderr()?;
            let stdout = std::io::stdout();
            let styled = stdout.is_terminal();
            commands::list::execute(args, &client, &mut stdout.lock(), styled).await
        }
        None => {
            let log_file = cli.global.log_file();
            logging::init_file(&log_file)?;
            tracing::info!(log_file = %log_file.display(), "Starting userdeck");
            userdeck_tui::run(Arc::new(client)).await
        }
    }
}
