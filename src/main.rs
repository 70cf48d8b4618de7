use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use vialis::commands::{cmd_board, cmd_config_get, cmd_config_set, cmd_config_show, cmd_ls};

#[derive(Parser)]
#[command(name = "vialis")]
#[command(about = "Terminal board for municipal road-incident tickets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive ticket board
    #[command(visible_alias = "b")]
    Board,

    /// Fetch the ticket list once and print it
    Ls {
        /// Filter by status (new, in progress, awaiting parts, closed)
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority (low, medium, high, critical)
        #[arg(long)]
        priority: Option<String>,

        /// One line per ticket instead of a table
        #[arg(long)]
        oneline: bool,

        /// Print the raw ticket records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print one value (api.base_url, api.token)
    Get { key: String },

    /// Set one value
    Set { key: String, value: String },

    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Board => cmd_board().await,
        Commands::Ls {
            status,
            priority,
            oneline,
            json,
        } => cmd_ls(status.as_deref(), priority.as_deref(), oneline, json).await,
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Show => cmd_config_show(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "vialis", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
