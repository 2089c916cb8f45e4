//! Named sets of address prefixes.

use std::net::IpAddr;

use ipnet::IpNet;

use crate::error::MarshalError;
use crate::{Error, IpType, Result};

/// A family-tagged address prefix.
///
/// Prefixes are produced upstream and are not validated on construction;
/// an inconsistent prefix surfaces as a [`MarshalError`] when the entry is
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    pub family: IpType,
    pub addr: IpAddr,
    pub len: u8,
}

impl Prefix {
    /// Create a prefix tagged with the family of `addr`.
    pub fn new(addr: IpAddr, len: u8) -> Self {
        Self {
            family: IpType::of(&addr),
            addr,
            len,
        }
    }

    fn to_net(self, entry: &str) -> std::result::Result<IpNet, MarshalError> {
        if IpType::of(&self.addr) != self.family {
            return Err(MarshalError::FamilyMismatch {
                entry: entry.to_string(),
                family: self.family,
                addr: self.addr,
            });
        }
        let invalid_len = || MarshalError::InvalidPrefixLength {
            entry: entry.to_string(),
            family: self.family,
            len: self.len,
        };
        if self.len > self.family.max_prefix_len() {
            return Err(invalid_len());
        }
        // Host bits are cleared so the output is always a network block.
        IpNet::new(self.addr, self.len)
            .map(|net| net.trunc())
            .map_err(|_| invalid_len())
    }
}

impl From<IpNet> for Prefix {
    fn from(net: IpNet) -> Self {
        Prefix::new(net.addr(), net.prefix_len())
    }
}

/// Entry is a named list of prefixes, the unit of output.
///
/// Names are case-insensitive and stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    prefixes: Vec<Prefix>,
}

impl Entry {
    /// Create an empty entry.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            prefixes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefixes in insertion order.
    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Append a prefix as-is.
    pub fn push(&mut self, prefix: Prefix) {
        self.prefixes.push(prefix);
    }

    /// Parse a CIDR (`192.168.0.0/16`, `fc00::/7`) and append it.
    ///
    /// Host bits are cleared.
    pub fn add_cidr(&mut self, cidr: &str) -> Result<()> {
        let cidr = cidr.trim();
        let net: IpNet = cidr
            .parse()
            .map_err(|_| Error::InvalidCidr(cidr.to_string()))?;
        self.prefixes.push(Prefix::from(net.trunc()));
        Ok(())
    }

    /// Move all prefixes of `other` to the end of this entry.
    pub(crate) fn merge(&mut self, other: Entry) {
        self.prefixes.extend(other.prefixes);
    }

    /// Render the prefixes as canonical CIDR strings in insertion order.
    ///
    /// Prefixes of the `ignore` family are skipped. An entry with nothing
    /// left after filtering yields an empty list.
    pub fn marshal_text(
        &self,
        ignore: Option<IpType>,
    ) -> std::result::Result<Vec<String>, MarshalError> {
        let mut lines = Vec::with_capacity(self.prefixes.len());
        for prefix in &self.prefixes {
            if Some(prefix.family) == ignore {
                continue;
            }
            lines.push(prefix.to_net(&self.name)?.to_string());
        }
        Ok(lines)
    }
}

/// Normalize an entry name: trimmed and upper-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        let mut entry = Entry::new("cn");
        entry.add_cidr("2.2.2.0/24").unwrap();
        entry.add_cidr("fd00::/8").unwrap();
        entry.add_cidr("1.0.1.0/24").unwrap();
        entry
    }

    #[test]
    fn test_name_is_normalized() {
        assert_eq!(Entry::new(" cn ").name(), "CN");
        assert_eq!(normalize_name("geolocation-!cn"), "GEOLOCATION-!CN");
    }

    #[test]
    fn test_marshal_keeps_native_order() {
        let lines = sample().marshal_text(None).unwrap();
        assert_eq!(lines, vec!["2.2.2.0/24", "fd00::/8", "1.0.1.0/24"]);
    }

    #[test]
    fn test_marshal_ignore_family() {
        let entry = sample();
        assert_eq!(
            entry.marshal_text(Some(IpType::IPv6)).unwrap(),
            vec!["2.2.2.0/24", "1.0.1.0/24"]
        );
        assert_eq!(entry.marshal_text(Some(IpType::IPv4)).unwrap(), vec!["fd00::/8"]);
    }

    #[test]
    fn test_marshal_empty_entry() {
        let entry = Entry::new("EMPTY");
        assert!(entry.marshal_text(None).unwrap().is_empty());

        let mut v4_only = Entry::new("V4");
        v4_only.add_cidr("10.0.0.0/8").unwrap();
        assert!(v4_only.marshal_text(Some(IpType::IPv4)).unwrap().is_empty());
    }

    #[test]
    fn test_add_cidr_truncates_host_bits() {
        let mut entry = Entry::new("X");
        entry.add_cidr("192.168.1.77/16").unwrap();
        assert_eq!(entry.marshal_text(None).unwrap(), vec!["192.168.0.0/16"]);
    }

    #[test]
    fn test_add_cidr_invalid() {
        let mut entry = Entry::new("X");
        assert!(entry.add_cidr("invalid").is_err());
        assert!(entry.add_cidr("192.168.1.1").is_err()); // No prefix
        assert!(entry.add_cidr("192.168.1.1/33").is_err());
        assert!(entry.is_empty());
    }

    #[test]
    fn test_marshal_clears_host_bits() {
        let mut entry = Entry::new("RAW");
        entry.push(Prefix::new("10.1.2.3".parse().unwrap(), 8));
        entry.push(Prefix::new("2001:db8::1".parse().unwrap(), 32));
        entry.push(Prefix::new("192.0.2.7".parse().unwrap(), 32));
        assert_eq!(
            entry.marshal_text(None).unwrap(),
            vec!["10.0.0.0/8", "2001:db8::/32", "192.0.2.7/32"]
        );
    }

    #[test]
    fn test_marshal_invalid_prefix_length() {
        let mut entry = Entry::new("BAD");
        entry.push(Prefix::new("10.0.0.0".parse().unwrap(), 40));
        let err = entry.marshal_text(None).unwrap_err();
        assert_eq!(
            err,
            MarshalError::InvalidPrefixLength {
                entry: "BAD".to_string(),
                family: IpType::IPv4,
                len: 40,
            }
        );
    }

    #[test]
    fn test_marshal_family_mismatch() {
        let mut entry = Entry::new("BAD");
        entry.push(Prefix {
            family: IpType::IPv4,
            addr: "fd00::".parse().unwrap(),
            len: 8,
        });
        assert!(matches!(
            entry.marshal_text(None),
            Err(MarshalError::FamilyMismatch { .. })
        ));
        // A filtered-out bad prefix is never rendered.
        assert!(entry.marshal_text(Some(IpType::IPv4)).unwrap().is_empty());
    }
}
