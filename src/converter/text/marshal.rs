//! Entry to CIDR line conversion.

use super::TextOutConfig;
use crate::{Entry, Result};

/// Render `entry` as CIDR strings, keeping only the configured family when
/// `onlyIPType` is set.
pub(crate) fn marshal_entry(entry: &Entry, config: &TextOutConfig) -> Result<Vec<String>> {
    Ok(entry.marshal_text(config.ignored_ip_type())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, IpType, Prefix};

    fn cn() -> Entry {
        let mut entry = Entry::new("CN");
        entry.add_cidr("2.2.2.0/24").unwrap();
        entry.add_cidr("fd00::/8").unwrap();
        entry
    }

    fn only(ip_type: Option<IpType>) -> TextOutConfig {
        TextOutConfig {
            only_ip_type: ip_type,
            ..TextOutConfig::default()
        }
    }

    #[test]
    fn test_marshal_both_families() {
        assert_eq!(
            marshal_entry(&cn(), &only(None)).unwrap(),
            vec!["2.2.2.0/24", "fd00::/8"]
        );
    }

    #[test]
    fn test_marshal_only_v4() {
        assert_eq!(
            marshal_entry(&cn(), &only(Some(IpType::IPv4))).unwrap(),
            vec!["2.2.2.0/24"]
        );
    }

    #[test]
    fn test_marshal_only_v6() {
        assert_eq!(
            marshal_entry(&cn(), &only(Some(IpType::IPv6))).unwrap(),
            vec!["fd00::/8"]
        );
    }

    #[test]
    fn test_marshal_error() {
        let mut entry = cn();
        entry.push(Prefix::new("fd00::".parse().unwrap(), 129));
        assert!(matches!(
            marshal_entry(&entry, &only(None)),
            Err(Error::Marshal(_))
        ));
        assert!(marshal_entry(&entry, &only(Some(IpType::IPv4))).is_ok());
    }
}
