use create_addr_sdk::hash::H256;
use create_addr_sdk::normalize_address;
use ethrex_common::{Address, Bytes};

pub fn parse_address(s: &str) -> eyre::Result<Address> {
    Ok(normalize_address(s)?)
}

pub fn parse_hex(s: &str) -> eyre::Result<Bytes> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s)
        .map(Into::into)
        .map_err(|e| eyre::eyre!("Invalid hex {s:?}: {e}"))
}

pub fn parse_h256(s: &str) -> eyre::Result<H256> {
    let bytes = parse_hex(s)?;
    if bytes.len() != 32 {
        eyre::bail!("Expected 32 bytes, got {}", bytes.len());
    }
    Ok(H256::from_slice(&bytes))
}
