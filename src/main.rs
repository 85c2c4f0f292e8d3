#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use profconf::{ConfigurationFile, Preset, ProfilingConfiguration};
use profconf::output::format_human;
use cli::{CliCommand, ConfigSource};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Resolve the preset plus overlay selected on the command line
fn load_configuration(source: &ConfigSource) -> Result<ProfilingConfiguration> {
    let mut file = match &source.config_path {
        Some(path) => ConfigurationFile::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigurationFile::default(),
    };

    if source.remote {
        file.preset = Some(Preset::Remote);
    }

    let config = file.apply().build();
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn print_configuration(config: &ProfilingConfiguration, json: bool) -> Result<()> {
    if json {
        println!("{}", config.to_json_pretty()?);
    } else {
        print!("{}", format_human(config));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::parse_args()?;
    init_logging(args.verbose);

    match args.command {
        CliCommand::Show { source, json } => {
            let config = load_configuration(&source)?;
            print_configuration(&config, json)?;
        }
        CliCommand::Encode { source, output } => {
            let config = load_configuration(&source)?;
            let payload = config.to_bytes()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &payload)
                        .with_context(|| format!("Failed to write payload to {}", path.display()))?;
                    info!("Wrote {} byte payload to {}", payload.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&payload)?;
                    stdout.write_all(b"\n")?;
                }
            }
        }
        CliCommand::Decode { input, json } => {
            let payload = std::fs::read(&input)
                .with_context(|| format!("Failed to read payload from {}", input.display()))?;
            let config = ProfilingConfiguration::from_bytes(&payload)
                .with_context(|| format!("Rejected payload {}", input.display()))?;
            print_configuration(&config, json)?;
        }
    }

    Ok(())
}
