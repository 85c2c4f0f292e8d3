//! CLI argument parsing module
//!
//! Handles the `profconf` command line using clap:
//! - `show` prints the effective configuration
//! - `encode` writes the wire payload for a remote profiled process
//! - `decode` validates a received payload

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use anyhow::{anyhow, Result};

/// Where the configuration comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigSource {
    /// Start from the remote preset, overriding an overlay's own preset
    pub remote: bool,
    /// TOML overlay applied on top of the preset
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Show { source: ConfigSource, json: bool },
    Encode { source: ConfigSource, output: Option<PathBuf> },
    Decode { input: PathBuf, json: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub verbose: bool,
}

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("remote")
                .short('r')
                .long("remote")
                .help("Start from the remote profiling preset")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML overlay applied on top of the preset")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .short('j')
        .long("json")
        .help("Output the JSON wire envelope")
        .action(ArgAction::SetTrue)
}

fn build_command() -> Command {
    Command::new("profconf")
        .version(concat!(env!("PROFCONF_VERSION"), " (", env!("GIT_HASH"), ")"))
        .about("Inspect and exchange profiling session configurations")
        .long_about(
            "Builds profiling session configurations from the local or remote preset and an \
             optional TOML overlay, and encodes or validates the payload sent to a remote \
             profiled process.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(source_args(
            Command::new("show").about("Print the effective configuration").arg(json_arg()),
        ))
        .subcommand(source_args(
            Command::new("encode")
                .about("Write the wire payload for a remote profiled process")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Destination file (stdout when omitted)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        ))
        .subcommand(
            Command::new("decode")
                .about("Validate a received payload and print it")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .help("Payload file to validate")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(json_arg()),
        )
}

fn config_source(matches: &ArgMatches) -> ConfigSource {
    ConfigSource {
        remote: matches.get_flag("remote"),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
    }
}

fn parse_matches(matches: &ArgMatches) -> Result<CliArgs> {
    let verbose = matches.get_flag("verbose");

    let command = match matches.subcommand() {
        Some(("show", sub)) => CliCommand::Show {
            source: config_source(sub),
            json: sub.get_flag("json"),
        },
        Some(("encode", sub)) => CliCommand::Encode {
            source: config_source(sub),
            output: sub.get_one::<PathBuf>("output").cloned(),
        },
        Some(("decode", sub)) => CliCommand::Decode {
            input: sub
                .get_one::<PathBuf>("input")
                .cloned()
                .ok_or_else(|| anyhow!("Missing payload file"))?,
            json: sub.get_flag("json"),
        },
        _ => return Err(anyhow!("Missing subcommand")),
    };

    Ok(CliArgs { command, verbose })
}

/// Parse arguments from an explicit iterator
pub fn parse_from<I, T>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    parse_matches(&matches)
}

/// Parse command line arguments; clap exits on `--help`, `--version` and usage errors
pub fn parse_args() -> Result<CliArgs> {
    parse_from(std::env::args_os()).map_err(|err| match err.downcast::<clap::Error>() {
        Ok(clap_err) => clap_err.exit(),
        Err(other) => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_defaults() {
        let args = parse_from(["profconf", "show"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(
            args.command,
            CliCommand::Show { source: ConfigSource::default(), json: false }
        );
    }

    #[test]
    fn test_parse_encode_with_overlay() {
        let args = parse_from([
            "profconf", "encode", "--remote", "--config", "/tmp/p.toml", "-o", "/tmp/p.json", "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(
            args.command,
            CliCommand::Encode {
                source: ConfigSource {
                    remote: true,
                    config_path: Some(PathBuf::from("/tmp/p.toml")),
                },
                output: Some(PathBuf::from("/tmp/p.json")),
            }
        );
    }

    #[test]
    fn test_parse_decode_requires_input() {
        assert!(parse_from(["profconf", "decode"]).is_err());
        let args = parse_from(["profconf", "decode", "payload.json", "--json"]).unwrap();
        assert_eq!(
            args.command,
            CliCommand::Decode { input: PathBuf::from("payload.json"), json: true }
        );
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(parse_from(["profconf"]).is_err());
    }
}
