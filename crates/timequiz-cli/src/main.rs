//! timequiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// Exit code for a session cut short by its time limit.
const TIMED_OUT_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "timequiz", version, about = "Timed trivia quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz
    Run {
        /// Quiz CSV file with question,answer rows
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Randomise the order of questions
        #[arg(short, long)]
        shuffle: bool,

        /// Max quiz duration, e.g. "30s", "2m", "1m30s"
        #[arg(short, long)]
        time_limit: Option<String>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Scores above this pass
        #[arg(long)]
        pass_threshold: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a quiz file without playing it
    Validate {
        /// Quiz CSV file to check
        #[arg(short, long)]
        file: PathBuf,

        /// Print every question and answer
        #[arg(long)]
        list: bool,
    },

    /// Create starter config and example quiz
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("timequiz_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            shuffle,
            time_limit,
            seed,
            pass_threshold,
            config,
        } => commands::run::execute(file, shuffle, time_limit, seed, pass_threshold, config)
            .await
            .map(|outcome| {
                if outcome.timed_out() {
                    TIMED_OUT_EXIT_CODE
                } else {
                    0
                }
            }),
        Commands::Validate { file, list } => commands::validate::execute(file, list).map(|()| 0),
        Commands::Init => commands::init::execute().map(|()| 0),
    };

    // Exit explicitly: a stdin read left pending by a timed-out session
    // cannot be cancelled and would hold up runtime shutdown.
    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
