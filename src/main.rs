use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cropkit::replay::{replay, ReplayScript};
use cropkit::{default_config_path, init_logging, Config, ConfigFormat, BUILD_DATE, VERSION};
use tracing::debug;

#[derive(Parser)]
#[command(name = "cropkit", version, about = "Crop window engine tools")]
struct Cli {
    /// Config file (.toml or .json); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a drag script and print the resulting crop window as JSON
    Replay { script: PathBuf },
    /// Print the default configuration as TOML
    Config,
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match default_config_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(_) => Config::default(),
        },
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    init_logging(cli.json_logs || config.logging.json)?;
    debug!("cropkit {} (built {})", VERSION, BUILD_DATE);

    match cli.command {
        Commands::Replay { script } => {
            let script = ReplayScript::load(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let report = replay(&script, &config.crop)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Config => {
            print!("{}", Config::default().render(ConfigFormat::Toml)?);
        }
    }

    Ok(())
}
