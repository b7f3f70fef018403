use crate::commands::autocomplete;
use crate::common::{Create2AddressArgs, CreateAddressArgs};
use crate::utils::parse_hex;
use clap::{ArgAction, Parser, Subcommand};
use create_addr_sdk::address::to_checksummed_bytes;
use create_addr_sdk::create::{
    DETERMINISTIC_DEPLOYER, compute_create_addresses, compute_create2_address, init_code_hash,
};
use create_addr_sdk::hash::hash_seed;
use create_addr_sdk::utils::to_checksum_address;
use create_addr_sdk::{
    compute_create_address, decode_address, demo_notice, normalize_address,
    normalize_address_or_blank,
};
use ethrex_common::Bytes;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

pub fn start() -> eyre::Result<()> {
    let CLI { verbose, command } = CLI::parse();
    init_tracing(verbose);
    command.run()
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Results go to stdout, diagnostics to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Parser)]
#[command(name="create-addr", author, version=VERSION_STRING, about, long_about = None)]
pub(crate) struct CLI {
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Log debug output to stderr."
    )]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[clap(subcommand, about = "Generate shell completion scripts.")]
    Autocomplete(autocomplete::Command),
    #[clap(
        about = "Compute contract address given the deployer address and nonce.",
        visible_aliases = ["ca"]
    )]
    CreateAddress {
        #[clap(flatten)]
        args: CreateAddressArgs,
    },
    #[clap(
        about = "Compute CREATE2 contract address given the deployer, salt and init code.",
        visible_aliases = ["c2a"]
    )]
    Create2Address {
        #[clap(flatten)]
        args: Create2AddressArgs,
    },
    #[clap(about = "Normalize an address to its 20 raw bytes.", visible_alias = "norm")]
    Normalize {
        #[arg(help = "Address as 40 or 48 hex chars, with or without 0x.")]
        address: String,
        #[arg(
            long,
            default_value_t = false,
            help = "Accept an empty address and print an empty line for it."
        )]
        allow_blank: bool,
    },
    #[clap(about = "Display an address with its checksum.")]
    Checksum {
        #[arg(help = "Address as 40 or 48 hex chars, with or without 0x.")]
        address: String,
        #[arg(
            long,
            default_value_t = false,
            help = "Print the 24 bytes form: address followed by keccak256(address)[..4]."
        )]
        bytes: bool,
    },
    #[clap(about = "Decode a serialized address, which must be empty or 20 bytes long.")]
    Decode {
        #[arg(value_parser = parse_hex, help = "Serialized address, hex.")]
        serialized: Bytes,
    },
    #[clap(about = "Get the keccak256 hash of the input.")]
    Hash {
        #[arg(help = "Input, hex by default.")]
        input: String,
        #[arg(long, conflicts_with = "integer", help = "Hash the input as UTF-8 text.")]
        string: bool,
        #[arg(
            long,
            conflicts_with = "string",
            help = "Hash the decimal text of an integer input."
        )]
        integer: bool,
    },
    #[clap(about = "Print the contract address of the example deployment.")]
    Demo,
}

impl Command {
    pub fn run(self) -> eyre::Result<()> {
        match self {
            Command::Autocomplete(cmd) => cmd.run()?,
            Command::CreateAddress { args } => {
                let CreateAddressArgs {
                    deployer,
                    nonce,
                    count,
                } = args;
                match count {
                    Some(count) => {
                        for (nonce, address) in compute_create_addresses(deployer, nonce, count) {
                            println!("{nonce} 0x{}", to_checksum_address(&address));
                        }
                    }
                    None => {
                        let address = compute_create_address(deployer, nonce);
                        println!("Address: 0x{}", to_checksum_address(&address));
                    }
                }
            }
            Command::Create2Address { args } => {
                let Create2AddressArgs {
                    deployer,
                    salt,
                    init_code,
                    init_code_hash: code_hash,
                } = args;
                let deployer = deployer.unwrap_or(DETERMINISTIC_DEPLOYER);
                let code_hash = match (code_hash, init_code) {
                    (Some(code_hash), _) => code_hash,
                    (None, Some(init_code)) => init_code_hash(init_code),
                    (None, None) => {
                        eyre::bail!("Either --init-code or --init-code-hash is required")
                    }
                };
                debug!(
                    deployer = %hex::encode(deployer),
                    salt = %hex::encode(salt),
                    code_hash = %hex::encode(code_hash),
                    "computing create2 address"
                );

                let contract_address = compute_create2_address(deployer, salt, code_hash);
                println!("Address: 0x{}", to_checksum_address(&contract_address));
            }
            Command::Normalize {
                address,
                allow_blank,
            } => {
                let normalized = if allow_blank {
                    normalize_address_or_blank(&address)?
                } else {
                    Some(normalize_address(&address)?)
                };
                match normalized {
                    Some(normalized) => println!("0x{}", hex::encode(normalized)),
                    None => println!(),
                }
            }
            Command::Checksum { address, bytes } => {
                let address = normalize_address(&address)?;
                if bytes {
                    println!("0x{}", hex::encode(to_checksummed_bytes(&address)));
                } else {
                    println!("0x{}", to_checksum_address(&address));
                }
            }
            Command::Decode { serialized } => {
                println!("0x{}", decode_address(&serialized)?);
            }
            Command::Hash {
                input,
                string,
                integer,
            } => {
                let hash = if string {
                    hash_seed(input.as_str())
                } else if integer {
                    let value: u128 = input
                        .parse()
                        .map_err(|e| eyre::eyre!("Invalid integer {input:?}: {e}"))?;
                    hash_seed(value)
                } else {
                    let bytes = parse_hex(&input)?;
                    hash_seed(&bytes[..])
                };

                println!("{hash:#x}");
            }
            Command::Demo => {
                println!("{}", demo_notice()?);
            }
        };
        Ok(())
    }
}
