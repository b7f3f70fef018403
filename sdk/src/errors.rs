#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),
    #[error("Invalid hex in address: {0}")]
    InvalidHex(String),
    #[error("Address checksum mismatch: expected 0x{expected}, found 0x{found}")]
    ChecksumMismatch { expected: String, found: String },
    #[error("Serialized addresses must be empty or 20 bytes long, got {0} bytes")]
    InvalidSerializedLength(usize),
}
