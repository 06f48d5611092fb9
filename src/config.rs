use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::ffi::OsString;

use crate::chain::NetworkKind;
use crate::errors::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Encode {
        address: String,
        /// decimal tag text, empty when absent
        tag: String,
        network: NetworkKind,
    },
    Decode {
        x_address: String,
    },
    Inspect {
        x_address: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub verbosity: usize,
    pub timestamp: bool,
    pub json: bool,
    pub command: Command,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let network_help = "Select network type (main, test)";
    App::new("xaddress")
        .version(crate_version!())
        .about("Convert between classic addresses with destination tags and X-addresses")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .arg(
            Arg::with_name("timestamp")
                .long("timestamp")
                .help("Prepend log lines with a timestamp"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print results as JSON"),
        )
        .subcommand(
            SubCommand::with_name("encode")
                .about("Encode a classic address and optional tag as an X-address")
                .arg(
                    Arg::with_name("address")
                        .help("Classic r-address")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("tag")
                        .long("tag")
                        .help("Destination tag (32-bit unsigned decimal)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("network")
                        .long("network")
                        .help(network_help)
                        .takes_value(true)
                        .conflicts_with("testnet"),
                )
                .arg(
                    Arg::with_name("testnet")
                        .long("testnet")
                        .help("Shorthand for --network test"),
                ),
        )
        .subcommand(
            SubCommand::with_name("decode")
                .about("Decode an X-address into classic address, tag and network")
                .arg(Arg::with_name("xaddress").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("inspect")
                .about("Show the raw payload carried by an X-address")
                .arg(Arg::with_name("xaddress").required(true).index(1)),
        )
}

impl Config {
    pub fn from_args() -> Config {
        let m = app().get_matches();
        let config = match Config::from_matches(&m) {
            Ok(config) => config,
            Err(e) => clap::Error::with_description(
                &e.to_string(),
                clap::ErrorKind::InvalidValue,
            )
            .exit(),
        };

        let mut log = stderrlog::new();
        log.verbosity(config.verbosity);
        log.timestamp(if config.timestamp {
            stderrlog::Timestamp::Millisecond
        } else {
            stderrlog::Timestamp::Off
        });
        if let Err(e) = log.init() {
            eprintln!("logging initialization failed: {}", e);
        }
        debug!("{:?}", config);
        config
    }

    pub fn from_iter<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m = app()
            .get_matches_from_safe(args)
            .chain_err(|| "invalid command line")?;
        Config::from_matches(&m)
    }

    fn from_matches(m: &ArgMatches) -> Result<Config> {
        let command = match m.subcommand() {
            ("encode", Some(sub)) => {
                let network = if sub.is_present("testnet") {
                    NetworkKind::Test
                } else {
                    sub.value_of("network")
                        .map(str::parse::<NetworkKind>)
                        .transpose()?
                        .unwrap_or_default()
                };
                Command::Encode {
                    address: value(sub, "address")?,
                    tag: sub.value_of("tag").unwrap_or("").to_string(),
                    network,
                }
            }
            ("decode", Some(sub)) => Command::Decode {
                x_address: value(sub, "xaddress")?,
            },
            ("inspect", Some(sub)) => Command::Inspect {
                x_address: value(sub, "xaddress")?,
            },
            (name, _) => bail!("unknown command: {:?}", name),
        };

        Ok(Config {
            verbosity: m.occurrences_of("verbosity") as usize,
            timestamp: m.is_present("timestamp"),
            json: m.is_present("json"),
            command,
        })
    }
}

fn value(m: &ArgMatches, name: &str) -> Result<String> {
    m.value_of(name)
        .map(str::to_string)
        .ok_or_else(|| Error::from(format!("missing argument: {}", name)))
}
