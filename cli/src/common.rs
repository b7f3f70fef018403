use crate::utils::{parse_address, parse_h256, parse_hex};
use clap::Parser;
use create_addr_sdk::hash::H256;
use ethrex_common::{Address, Bytes};

#[derive(Parser)]
pub struct CreateAddressArgs {
    #[arg(value_parser = parse_address, env = "DEPLOYER", help = "Deployer address.")]
    pub deployer: Address,
    #[arg(short = 'n', long, env = "NONCE", help = "Deployer nonce.")]
    pub nonce: u64,
    #[arg(
        long,
        required = false,
        help = "Print the addresses of this many consecutive deployments, starting at nonce."
    )]
    pub count: Option<usize>,
}

#[derive(Parser)]
#[clap(group = clap::ArgGroup::new("code").required(true))]
pub struct Create2AddressArgs {
    #[arg(
        short = 'd',
        long,
        value_parser = parse_address,
        help = "Deployer address. Default is Mainnet Deterministic Deployer"
    )]
    pub deployer: Option<Address>,
    #[arg(long, value_parser = parse_h256, help = "Salt, 32 bytes hex.")]
    pub salt: H256,
    #[arg(long, group = "code", value_parser = parse_hex, help = "Init code, hex.")]
    pub init_code: Option<Bytes>,
    #[arg(long, group = "code", value_parser = parse_h256, help = "Hash of the init code.")]
    pub init_code_hash: Option<H256>,
}
