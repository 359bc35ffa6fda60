mod commands;
mod error;
mod filter;
mod forms;
mod link_store;
mod notice;
mod settings;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use forms::Terminal;
use link_store::LinkStore;
use notice::{Console, Notifier};
use settings::{default_settings_path, load_settings};

#[derive(Parser, Debug)]
#[command(version, about = "Keep named links in a JSON file")]
pub struct Cli {
    #[arg(short, long, global = true)]
    log_level: Option<String>,
    /// Settings file to read instead of the default one
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Link file to use for this run, ignoring the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a link, asking for whatever is not given
    Add {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Delete a link by name, or pick one from the list
    Delete { name: Option<String> },
    /// List links whose name contains QUERY
    List { query: Option<String> },
    /// Filter links interactively, one query per line
    Search,
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    Show,
    /// Change where links are saved
    SetPath { path: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    if let Some(log_level) = &args.log_level {
        tracing_subscriber::fmt()
            .with_env_filter(format!("link_keeper={}", log_level))
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    let settings_path = args.config.unwrap_or_else(default_settings_path);
    let mut settings = match load_settings(&settings_path).await {
        Ok(settings) => settings,
        Err(err) => {
            Console.notice(&err.to_string());
            return ExitCode::FAILURE;
        }
    };
    let link_file = args.file.unwrap_or_else(|| settings.filepath.clone());
    tracing::info!("Using link file {}", link_file.display());

    let store = LinkStore::new(link_file, Console);
    let mut terminal = Terminal::stdio();
    let result = match args.command {
        Command::Add { name, url } => commands::add(&store, &mut terminal, name, url).await,
        Command::Delete { name } => commands::delete(&store, &mut terminal, name).await,
        Command::List { query } => {
            commands::list(&store, &mut terminal, query.as_deref().unwrap_or_default()).await
        }
        Command::Search => commands::search(&store, &mut terminal).await,
        Command::Config(ConfigCommand::Show) => {
            commands::show_settings(&mut terminal, &settings_path, &settings)
        }
        Command::Config(ConfigCommand::SetPath { path }) => {
            commands::set_link_path(
                store.notifier(),
                &mut terminal,
                &settings_path,
                &mut settings,
                path,
            )
            .await
        }
    };

    if commands::report(store.notifier(), result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
