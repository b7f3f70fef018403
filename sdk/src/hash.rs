pub use keccak_hash::H256;
use keccak_hash::keccak;

/// Keccak-256 with the original Keccak padding, as used by Ethereum.
/// This is not NIST SHA3-256; the two produce different digests.
pub fn keccak256(data: impl AsRef<[u8]>) -> H256 {
    keccak(data.as_ref())
}

/// Anything that can be hashed as a seed.
/// Integers are hashed through their decimal text, not their binary encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashInput<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Integer(u128),
}

impl HashInput<'_> {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            HashInput::Bytes(bytes) => bytes.to_vec(),
            HashInput::Text(text) => text.as_bytes().to_vec(),
            HashInput::Integer(value) => value.to_string().into_bytes(),
        }
    }
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        HashInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self {
        HashInput::Text(text)
    }
}

impl From<u128> for HashInput<'_> {
    fn from(value: u128) -> Self {
        HashInput::Integer(value)
    }
}

pub fn hash_seed<'a>(seed: impl Into<HashInput<'a>>) -> H256 {
    keccak256(seed.into().to_bytes())
}
