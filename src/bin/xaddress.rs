extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

extern crate xaddress;

use error_chain::ChainedError;
use std::process;

use xaddress::{
    config::{Command, Config},
    convert,
    errors::*,
    xaddress::{decode_raw, payload},
    NetworkKind,
};

#[derive(Serialize)]
struct Inspection {
    payload: String,
    network: NetworkKind,
    account_id: String,
    account: String,
    flag: u8,
    tag: Option<u32>,
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).chain_err(|| "failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn inspect(x_address: &str) -> Result<Inspection> {
    let raw = decode_raw(x_address)?;
    let decoded = payload::decode(&raw)?;
    Ok(Inspection {
        payload: hex::encode(&raw),
        network: decoded.network,
        account_id: decoded.account.to_hex(),
        account: decoded.account.to_classic_address(),
        flag: raw[payload::FLAG_OFFSET],
        tag: decoded.tag,
    })
}

fn run(config: &Config) -> Result<()> {
    match &config.command {
        Command::Encode {
            address,
            tag,
            network,
        } => {
            let encoded = convert::encode_address_to_x_address(address, tag, network.is_test())?;
            info!("encoded {} for {} network", address, network);
            if config.json {
                print_json(&encoded)?;
            } else {
                println!("{}", encoded.address);
            }
        }
        Command::Decode { x_address } => {
            let decoded = convert::decode_x_address_to_address(x_address)?;
            if config.json {
                print_json(&decoded)?;
            } else if decoded.tag.is_empty() {
                println!("{} (test={})", decoded.account, decoded.test);
            } else {
                println!("{}:{} (test={})", decoded.account, decoded.tag, decoded.test);
            }
        }
        Command::Inspect { x_address } => {
            let inspection = inspect(x_address)?;
            if config.json {
                print_json(&inspection)?;
            } else {
                println!("payload:    {}", inspection.payload);
                println!("network:    {}", inspection.network);
                println!("account id: {}", inspection.account_id);
                println!("account:    {}", inspection.account);
                println!("flag:       {}", inspection.flag);
                println!("tag:        {}", convert::format_tag(inspection.tag));
            }
        }
    }
    Ok(())
}

fn main() {
    let config = Config::from_args();
    if let Err(e) = run(&config) {
        error!("{}", e.display_chain());
        process::exit(1);
    }
}
