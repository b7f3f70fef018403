use ethrex_common::Address;
use serde::{Deserialize, Deserializer, Serializer};

use crate::address::{normalize_address, normalize_address_or_blank};
use crate::hash::keccak256;

pub fn address_deserializer<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    normalize_address(&text).map_err(serde::de::Error::custom)
}

/// Accepts the empty string as "no address".
pub fn blank_address_deserializer<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    normalize_address_or_blank(&text).map_err(serde::de::Error::custom)
}

pub fn address_serializer<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(address)))
}

/// EIP-55 Checksum Address.
/// This is how addresses are actually displayed on ethereum apps
/// Returns address as string without "0x" prefix
pub fn to_checksum_address(address: &Address) -> String {
    let addr = hex::encode(address);

    // The checksum hashes the lowercase hex text, not the raw bytes
    let hash = keccak256(addr.as_bytes());
    let nibbles = hash
        .as_bytes()
        .iter()
        .flat_map(|&byte| [byte >> 4, byte & 0x0f]);

    addr.chars()
        .zip(nibbles)
        .map(|(c, nibble)| {
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Deployment {
        #[serde(
            serialize_with = "address_serializer",
            deserialize_with = "address_deserializer"
        )]
        sender: Address,
        #[serde(skip_serializing, deserialize_with = "blank_address_deserializer")]
        to: Option<Address>,
        nonce: u64,
    }

    #[test]
    fn checksum_matches_eip_55_vectors() {
        for expected in [
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let address = normalize_address(expected).unwrap();
            assert_eq!(to_checksum_address(&address), expected);
        }
    }

    #[test]
    fn deserializes_every_accepted_encoding() {
        let json = r#"{"sender":"0xf642060ad79BB34232172DC3d195B0930C8321a0","to":"","nonce":2}"#;
        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(
            deployment.sender,
            normalize_address("f642060ad79bb34232172dc3d195b0930c8321a0").unwrap()
        );
        assert_eq!(deployment.to, None);
        assert_eq!(deployment.nonce, 2);
    }

    #[test]
    fn rejects_malformed_addresses() {
        let json = r#"{"sender":"0x1234","to":"","nonce":0}"#;
        let err = serde_json::from_str::<Deployment>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid address format"));
    }

    #[test]
    fn serializes_lowercase_prefixed_hex() {
        let sender = normalize_address("0xf642060ad79BB34232172DC3d195B0930C8321a0").unwrap();
        let value = serde_json::to_value(Deployment {
            sender,
            to: None,
            nonce: 0,
        })
        .unwrap();
        assert_eq!(
            value["sender"],
            "0xf642060ad79bb34232172dc3d195b0930c8321a0"
        );
    }
}
