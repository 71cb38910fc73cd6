use std::path::PathBuf;

use clap::{Parser, Subcommand};
use delta_table_properties::{config, inspect};

/// Inspect Delta Lake table properties
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format: text, json or yaml
    #[arg(long, default_value = "text")]
    format: config::OutputFormat,

    /// Include internal (hidden) properties
    #[arg(long)]
    show_hidden: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_filter: String,

    /// Read settings from a YAML file instead of the flags above
    #[arg(long, conflicts_with = "from_env")]
    config: Option<PathBuf>,

    /// Read settings from DELTA_PROPERTIES_* environment variables
    #[arg(long)]
    from_env: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the table property definitions
    Schema,
    /// Resolve a JSON or YAML property map and print the typed values
    Resolve {
        /// Path to the property file
        file: PathBuf,
    },
}

impl From<&Cli> for config::CliConfig {
    fn from(cli: &Cli) -> Self {
        config::CliConfig {
            log_filter: cli.log_filter.clone(),
            output_format: cli.format,
            show_hidden: cli.show_hidden,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match (&cli.config, cli.from_env) {
        (Some(path), _) => config::InspectConfig::from_yaml_file(path),
        (None, true) => config::InspectConfig::from_env(),
        (None, false) => config::InspectConfig::from_cli((&cli).into()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Defaults to the configured filter, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    let output = match &cli.command {
        Command::Schema => inspect::describe_schema(&config),
        Command::Resolve { file } => inspect::describe_file(file, &config),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
