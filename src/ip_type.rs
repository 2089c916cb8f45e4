//! IP address family definitions.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// IpType represents an IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpType {
    /// IPv4 prefixes
    IPv4,
    /// IPv6 prefixes
    IPv6,
}

impl IpType {
    /// Parse an IP type from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ipv4" | "v4" | "4" => Some(IpType::IPv4),
            "ipv6" | "v6" | "6" => Some(IpType::IPv6),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            IpType::IPv4 => "ipv4",
            IpType::IPv6 => "ipv6",
        }
    }

    /// Get the family of an address.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpType::IPv4,
            IpAddr::V6(_) => IpType::IPv6,
        }
    }

    /// Maximum prefix length for this family.
    pub fn max_prefix_len(&self) -> u8 {
        match self {
            IpType::IPv4 => 32,
            IpType::IPv6 => 128,
        }
    }

    /// The other family.
    pub fn opposite(&self) -> Self {
        match self {
            IpType::IPv4 => IpType::IPv6,
            IpType::IPv6 => IpType::IPv4,
        }
    }
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for IpType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IpType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        IpType::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid IP type: {:?}", s)))
    }
}

/// Serde helper for optional IP type fields.
///
/// `null`, a missing field and `""` all mean "no family restriction".
pub(crate) mod optional {
    use super::IpType;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<IpType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            // Unrecognized families are rejected rather than read as "both".
            Some(s) => IpType::parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid IP type: {:?}", s))),
        }
    }
}
