use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use mindmap::Config;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "transform")]
#[command(about = "Turn nested bullet lists into markdown subheadings")]
#[command(override_usage = "transform file1.md > file2.md")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Write the result here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to mindmap.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::load(Path::new("mindmap.toml")),
    };

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let converted = mindmap::convert_with_config(&markdown, &config);

    match cli.output {
        Some(output) => {
            if let Err(e) = fs::write(&output, format!("{converted}\n")) {
                eprintln!("Error writing {}: {}", output.display(), e);
                std::process::exit(1);
            }
            tracing::info!(path = %output.display(), "wrote converted document");
        }
        None => println!("{converted}"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so stdout carries only the converted document
    let _ = fmt()
        .with_env_filter(filter)
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
