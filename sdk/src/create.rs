use ethrex_common::{Address, H160};
use ethrex_rlp::encode::RLPEncode;
use tracing::debug;

use crate::address::{AddressInput, normalize_address};
use crate::errors::AddressError;
use crate::hash::{H256, keccak256};

// 0x4e59b44847b379578588920cA78FbF26c0B4956C
pub const DETERMINISTIC_DEPLOYER: Address = H160([
    0x4e, 0x59, 0xb4, 0x48, 0x47, 0xb3, 0x79, 0x57, 0x85, 0x88, 0x92, 0x0c, 0xa7, 0x8f, 0xbf, 0x26,
    0xc0, 0xb4, 0x95, 0x6c,
]);

const CREATE2_PREFIX: u8 = 0xff;

/// rlp([sender_address, sender_nonce])
pub fn create_preimage(sender_address: Address, sender_nonce: u64) -> Vec<u8> {
    let mut encoded = Vec::new();
    (sender_address, sender_nonce).encode(&mut encoded);
    encoded
}

/// address = keccak256(rlp([sender_address,sender_nonce]))[12:]
pub fn compute_create_address(sender_address: Address, sender_nonce: u64) -> Address {
    let keccak_bytes = keccak256(create_preimage(sender_address, sender_nonce)).0;
    Address::from_slice(&keccak_bytes[12..])
}

/// Like [`compute_create_address`], for a sender in any encoding accepted by
/// [`normalize_address`]. Blank senders are rejected.
pub fn derive_contract_address<'a>(
    sender: impl Into<AddressInput<'a>>,
    sender_nonce: u64,
) -> Result<Address, AddressError> {
    let sender_address = normalize_address(sender)?;
    let contract_address = compute_create_address(sender_address, sender_nonce);
    debug!(
        sender = %hex::encode(sender_address),
        nonce = sender_nonce,
        contract = %hex::encode(contract_address),
        "derived create address"
    );
    Ok(contract_address)
}

/// Addresses of `count` consecutive deployments starting at `start_nonce`.
/// The sequence stops early at the last representable nonce.
pub fn compute_create_addresses(
    sender_address: Address,
    start_nonce: u64,
    count: usize,
) -> Vec<(u64, Address)> {
    (start_nonce..=u64::MAX)
        .take(count)
        .map(|nonce| (nonce, compute_create_address(sender_address, nonce)))
        .collect()
}

pub fn init_code_hash(init_code: impl AsRef<[u8]>) -> H256 {
    keccak256(init_code)
}

/// address = keccak256(0xff ++ deployer ++ salt ++ keccak256(init_code))[12:]
pub fn compute_create2_address(deployer: Address, salt: H256, init_code_hash: H256) -> Address {
    let mut preimage = Vec::with_capacity(1 + 20 + 32 + 32);
    preimage.push(CREATE2_PREFIX);
    preimage.extend_from_slice(deployer.as_bytes());
    preimage.extend_from_slice(salt.as_bytes());
    preimage.extend_from_slice(init_code_hash.as_bytes());
    let keccak_bytes = keccak256(preimage).0;
    Address::from_slice(&keccak_bytes[12..])
}
