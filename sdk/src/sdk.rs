use ethrex_common::Address;

pub mod address;
pub mod create;
pub mod errors;
pub mod hash;
pub mod utils;

pub use address::{decode_address, normalize_address, normalize_address_or_blank};
pub use create::{compute_create_address, derive_contract_address};
pub use errors::AddressError;

pub const DEMO_SENDER: &str = "0xf642060ad79BB34232172DC3d195B0930C8321a0";
pub const DEMO_NONCE: u64 = 2;

/// Line announcing where a deployment landed, e.g.
/// `您部署的智能合约地址为 0x8bbd31dde7a2bf8d94953be5b0a3d7cdf6889d12`.
pub fn deployment_notice(contract_address: &Address) -> Result<String, AddressError> {
    let encoded = decode_address(contract_address.as_bytes())?;
    Ok(format!("您部署的智能合约地址为 0x{encoded}"))
}

/// Derives the contract address for [`DEMO_SENDER`] at [`DEMO_NONCE`] and
/// formats it with [`deployment_notice`].
pub fn demo_notice() -> Result<String, AddressError> {
    let contract_address = derive_contract_address(DEMO_SENDER, DEMO_NONCE)?;
    deployment_notice(&contract_address)
}

#[test]
fn test_demo_notice() {
    assert_eq!(
        demo_notice().unwrap(),
        "您部署的智能合约地址为 0x8bbd31dde7a2bf8d94953be5b0a3d7cdf6889d12"
    );
}
