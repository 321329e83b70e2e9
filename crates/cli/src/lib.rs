pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use roomwise_core::config::{AppConfig, LoadOptions, LogFormat, LoggingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "roomwise",
    about = "Roomwise home decor advisor CLI",
    long_about = "Recommend furniture for a room, suggest color palettes, prepare product exports, and inspect runtime configuration.",
    after_help = "Examples:\n  roomwise recommend --prompt \"bedroom, wall color is light blue, 12x10\"\n  roomwise recommend --room Kitchen --wall-color Beige --budget 300 --json\n  roomwise segregate --input amazon.csv --output-dir by_room\n  roomwise doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank a diverse set of listings for a room description or explicit room")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(about = "Read a free-text room description and suggest matching palettes")]
    Interpret {
        #[arg(help = "Room description, e.g. \"living room, wall color is beige, 15x12\"")]
        prompt: String,
        #[arg(long, help = "Seed the palette draw for reproducible output")]
        seed: Option<u64>,
    },
    #[command(about = "Split a product CSV export into one file per room")]
    Segregate {
        #[arg(long, help = "Product CSV with a `title` or `name` column")]
        input: PathBuf,
        #[arg(long, help = "Directory that receives the per-room CSV files")]
        output_dir: PathBuf,
    },
    #[command(about = "Add synthetic reviews, popularity and sentiment columns to a product CSV")]
    Enrich {
        #[arg(long, help = "Product CSV with a `title` or `name` column")]
        input: PathBuf,
        #[arg(long, help = "Path of the enriched CSV")]
        output: PathBuf,
        #[arg(long, help = "Seed the synthetic columns for reproducible output")]
        seed: Option<u64>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, seed tables, and the recommendation pipeline")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // A broken config is reported by the command itself.
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config.logging);
    }

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args),
        Command::Interpret { prompt, seed } => commands::interpret::run(&prompt, seed),
        Command::Segregate { input, output_dir } => commands::segregate::run(&input, &output_dir),
        Command::Enrich { input, output, seed } => commands::enrich::run(&input, &output, seed),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(logging: &LoggingConfig) {
    use tracing::Level;

    let log_level = logging.level.parse::<Level>().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let installed = match logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(error) = installed {
        eprintln!("roomwise: logging disabled: {error}");
    }
}
