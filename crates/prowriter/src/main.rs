// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prowriter - an English writing coach for workplace communication.
//!
//! This is the binary entry point: `serve` runs the HTTP API, every other
//! subcommand is a local client that calls the pipeline in-process.

mod client;
mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prowriter_core::types::{CorrectionMode, Domain, Level, Tone};

/// Prowriter - an English writing coach for workplace communication.
#[derive(Parser, Debug)]
#[command(name = "prowriter", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API server.
    Serve,
    /// Correct a piece of text.
    Correct {
        /// Text to correct.
        text: String,
        /// `grammar` fixes mistakes only; `professional` rewrites for the workplace.
        #[arg(long, default_value = "grammar")]
        mode: CorrectionMode,
        /// Tone for professional rewrites.
        #[arg(long)]
        tone: Option<String>,
    },
    /// Show today's practice tasks, generating them if needed.
    Daily {
        /// Generate a fresh set even if today's tasks exist.
        #[arg(long)]
        refresh: bool,
    },
    /// Answer one of today's practice tasks.
    Answer {
        /// Task id, e.g. `task-1`.
        task_id: String,
        /// Your answer.
        answer: String,
    },
    /// Show or change your writing preferences.
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
    /// List the built-in workplace practice scenarios.
    Scenarios,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Print preferences and progress.
    Show,
    /// Update one or more preferences.
    Set {
        #[arg(long)]
        tone: Option<Tone>,
        #[arg(long)]
        domain: Option<Domain>,
        #[arg(long)]
        level: Option<Level>,
    },
    /// Delete preferences, progress and stored tasks.
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => prowriter_config::load_and_validate_path(path),
        None => prowriter_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            prowriter_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let Some(command) = cli.command else {
        println!("prowriter: use --help for available commands");
        return;
    };

    serve::init_tracing(&config.server.log_level);

    let result = match command {
        Commands::Serve => serve::run_serve(config).await,
        Commands::Scenarios => client::print_scenarios(&mut std::io::stdout()),
        other => run_client(config, other).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run_client(
    config: prowriter_config::ProwriterConfig,
    command: Commands,
) -> Result<(), prowriter_core::ProwriterError> {
    let generate = matches!(command, Commands::Correct { .. } | Commands::Daily { .. });
    let client = client::Client::from_config(&config, generate).await?;
    let mut out = std::io::stdout();

    match command {
        Commands::Correct { text, mode, tone } => {
            client.correct(&mut out, &text, mode, tone.as_deref()).await
        }
        Commands::Daily { refresh } => client.daily(&mut out, refresh).await,
        Commands::Answer { task_id, answer } => client.answer(&mut out, &task_id, &answer).await,
        Commands::Profile { action } => match action {
            ProfileCommand::Show => client.profile_show(&mut out).await,
            ProfileCommand::Set {
                tone,
                domain,
                level,
            } => client.profile_set(&mut out, tone, domain, level).await,
            ProfileCommand::Clear => client.profile_clear(&mut out).await,
        },
        Commands::Serve | Commands::Scenarios => Ok(()),
    }
}
