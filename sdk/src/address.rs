use ethrex_common::Address;
use tracing::trace;

use crate::errors::AddressError;
use crate::hash::keccak256;

pub const ADDRESS_LENGTH: usize = 20;
pub const CHECKSUM_LENGTH: usize = 4;
pub const CHECKSUMMED_ADDRESS_LENGTH: usize = ADDRESS_LENGTH + CHECKSUM_LENGTH;

const HEX_PREFIX: &str = "0x";

/// An address as handed to us by a caller, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressInput<'a> {
    Text(&'a str),
    Raw(&'a [u8]),
}

impl AddressInput<'_> {
    fn is_empty(&self) -> bool {
        match self {
            AddressInput::Text(text) => text.is_empty(),
            AddressInput::Raw(bytes) => bytes.is_empty(),
        }
    }

    fn describe(&self) -> String {
        match self {
            AddressInput::Text(text) => (*text).to_owned(),
            AddressInput::Raw(bytes) => format!("0x{}", hex::encode(bytes)),
        }
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(text: &'a str) -> Self {
        AddressInput::Text(text)
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(text: &'a String) -> Self {
        AddressInput::Text(text)
    }
}

impl<'a> From<&'a [u8]> for AddressInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        AddressInput::Raw(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for AddressInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        AddressInput::Raw(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for AddressInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        AddressInput::Raw(bytes)
    }
}

impl<'a> From<&'a Address> for AddressInput<'a> {
    fn from(address: &'a Address) -> Self {
        AddressInput::Raw(address.as_bytes())
    }
}

/// The encodings we know how to canonicalize, in the order they are tried.
enum AddressShape<'a> {
    Blank,
    PrefixedHex(&'a str),
    BareHex(&'a str),
    Raw20(&'a [u8]),
    Raw24(&'a [u8]),
    Unknown,
}

fn is_hex_length(text: &str) -> bool {
    matches!(text.len(), 40 | 48)
}

fn classify(input: AddressInput<'_>, allow_blank: bool) -> AddressShape<'_> {
    if allow_blank && input.is_empty() {
        return AddressShape::Blank;
    }
    match input {
        AddressInput::Text(text) if matches!(text.len(), 42 | 50) => {
            match text.strip_prefix(HEX_PREFIX) {
                Some(hex) => AddressShape::PrefixedHex(hex),
                None => AddressShape::Unknown,
            }
        }
        AddressInput::Text(text) if is_hex_length(text) => AddressShape::BareHex(text),
        AddressInput::Text(_) => AddressShape::Unknown,
        AddressInput::Raw(bytes) if bytes.len() == ADDRESS_LENGTH => AddressShape::Raw20(bytes),
        AddressInput::Raw(bytes) if bytes.len() == CHECKSUMMED_ADDRESS_LENGTH => {
            AddressShape::Raw24(bytes)
        }
        AddressInput::Raw(_) => AddressShape::Unknown,
    }
}

/// First four bytes of keccak256(address).
pub fn address_checksum(address: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let [a, b, c, d, ..] = keccak256(address).0;
    [a, b, c, d]
}

/// Builds the 24 byte encoding: the address followed by its checksum.
pub fn to_checksummed_bytes(address: &Address) -> [u8; CHECKSUMMED_ADDRESS_LENGTH] {
    let mut encoded = [0u8; CHECKSUMMED_ADDRESS_LENGTH];
    let (head, tail) = encoded.split_at_mut(ADDRESS_LENGTH);
    head.copy_from_slice(address.as_bytes());
    tail.copy_from_slice(&address_checksum(address.as_bytes()));
    encoded
}

fn verify_checksummed(bytes: &[u8]) -> Result<Address, AddressError> {
    let (address, found) = bytes.split_at(ADDRESS_LENGTH);
    let expected = address_checksum(address);
    if expected != found {
        return Err(AddressError::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }
    Ok(Address::from_slice(address))
}

fn canonicalize_raw(bytes: &[u8], input: &AddressInput<'_>) -> Result<Address, AddressError> {
    match bytes.len() {
        ADDRESS_LENGTH => Ok(Address::from_slice(bytes)),
        CHECKSUMMED_ADDRESS_LENGTH => verify_checksummed(bytes),
        _ => Err(AddressError::InvalidFormat(input.describe())),
    }
}

fn normalize(
    input: AddressInput<'_>,
    allow_blank: bool,
) -> Result<Option<Address>, AddressError> {
    let address = match classify(input, allow_blank) {
        AddressShape::Blank => {
            trace!("blank address accepted");
            return Ok(None);
        }
        AddressShape::PrefixedHex(hex) | AddressShape::BareHex(hex) => {
            let decoded =
                hex::decode(hex).map_err(|_| AddressError::InvalidHex(input.describe()))?;
            canonicalize_raw(&decoded, &input)?
        }
        AddressShape::Raw20(bytes) => Address::from_slice(bytes),
        AddressShape::Raw24(bytes) => verify_checksummed(bytes)?,
        AddressShape::Unknown => return Err(AddressError::InvalidFormat(input.describe())),
    };
    trace!(address = %hex::encode(address), "address normalized");
    Ok(Some(address))
}

/// Canonicalizes any accepted address encoding to its 20 raw bytes.
///
/// Accepted: 40 or 48 hex characters, each optionally prefixed with `0x`,
/// and raw values of 20 or 24 bytes. The 48 character and 24 byte forms
/// carry a trailing checksum which must match.
pub fn normalize_address<'a>(input: impl Into<AddressInput<'a>>) -> Result<Address, AddressError> {
    let input = input.into();
    normalize(input, false)?.ok_or_else(|| AddressError::InvalidFormat(input.describe()))
}

/// Same as [`normalize_address`], but an empty input is accepted and yields `None`.
/// A blank address marks a contract creation in some transaction encodings.
pub fn normalize_address_or_blank<'a>(
    input: impl Into<AddressInput<'a>>,
) -> Result<Option<Address>, AddressError> {
    normalize(input.into(), true)
}

/// Decodes an address from its serialized form into hex, without `0x`.
pub fn decode_address(serialized: &[u8]) -> Result<String, AddressError> {
    match serialized.len() {
        0 | ADDRESS_LENGTH => Ok(hex::encode(serialized)),
        len => Err(AddressError::InvalidSerializedLength(len)),
    }
}
