//! Error types for geotext.

use std::net::IpAddr;

use thiserror::Error;

use crate::IpType;

/// Error type for geotext operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Output configuration payload could not be decoded
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Entry could not be rendered as CIDR text
    #[error("marshal error: {0}")]
    Marshal(#[from] MarshalError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No converter registered under this type name
    #[error("unknown output converter type: {0}")]
    UnknownConverter(String),

    /// Invalid CIDR pattern
    #[error("invalid CIDR pattern: {0}")]
    InvalidCidr(String),
}

/// Result type alias for geotext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rendering entry prefixes as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// Prefix length exceeds the address width of its family
    #[error("entry {entry}: invalid prefix length /{len} for {family}")]
    InvalidPrefixLength {
        entry: String,
        family: IpType,
        len: u8,
    },

    /// Family tag does not match the stored address
    #[error("entry {entry}: address {addr} is not {family}")]
    FamilyMismatch {
        entry: String,
        family: IpType,
        addr: IpAddr,
    },
}
