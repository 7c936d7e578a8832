mod cli;
mod config;
mod diagram;
mod display;
mod error;
mod generator;
mod models;
mod renderer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use renderer::OutputFormat;

#[derive(Parser)]
#[command(name = "clockangle", version)]
#[command(about = "Clock-angle practice questions with optional clock diagrams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a practice set (the default when no command is given)
    Gen {
        /// Path to config file (defaults to ./clockangle.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of questions (defaults to `questions` from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for a reproducible set
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write an SVG clock diagram for each question
        #[arg(long)]
        diagram: bool,
    },
    /// Answer the question for one time
    Angle {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Time such as "3:15 p.m.", "3:15pm" or "15:15"
        #[arg(required_unless_present = "now", conflicts_with = "now")]
        time: Option<String>,

        /// Use the current local time
        #[arg(long)]
        now: bool,
    },
    /// Write an SVG clock diagram for one time
    Draw {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Time such as "3:15 p.m." or "15:15"
        time: String,

        /// Output file (defaults to <diagram.output_dir>/clock-H-MM.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also sketch the clock in the terminal
        #[arg(long)]
        terminal: bool,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize clockangle.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::gen::run(None, None, None, OutputFormat::Text, false),
        Some(Commands::Gen {
            config,
            count,
            seed,
            format,
            diagram,
        }) => cli::gen::run(config, count, seed, format, diagram),
        Some(Commands::Angle { config, time, now }) => cli::angle::run(config, time, now),
        Some(Commands::Draw {
            config,
            time,
            output,
            terminal,
        }) => cli::draw::run(config, time, output, terminal),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
