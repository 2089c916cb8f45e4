//! Configuration for the plaintext output converter.

use std::path::PathBuf;

use serde::Deserialize;

use crate::entry::normalize_name;
use crate::{IpType, Result};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./output/text";

/// Raw payload as it appears in the pipeline config.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTextOutConfig {
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default, rename = "wantedList")]
    want: Option<Vec<String>>,
    #[serde(
        default,
        rename = "onlyIPType",
        deserialize_with = "crate::ip_type::optional::deserialize"
    )]
    only_ip_type: Option<IpType>,
    #[serde(default)]
    add_prefix_in_line: Option<String>,
    #[serde(default)]
    add_suffix_in_line: Option<String>,
}

/// Normalized plaintext output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutConfig {
    /// Destination directory
    pub output_dir: PathBuf,
    /// Entry names to write; empty means all
    pub want: Vec<String>,
    /// Only write prefixes of this family
    pub only_ip_type: Option<IpType>,
    /// Prepended to every line
    pub add_prefix_in_line: String,
    /// Appended to every line, before the newline
    pub add_suffix_in_line: String,
}

impl Default for TextOutConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            want: Vec::new(),
            only_ip_type: None,
            add_prefix_in_line: String::new(),
            add_suffix_in_line: String::new(),
        }
    }
}

impl TextOutConfig {
    /// Decode and normalize a JSON payload.
    ///
    /// An empty payload yields the default configuration.
    pub fn from_json(payload: &[u8]) -> Result<Self> {
        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let raw: Option<RawTextOutConfig> = serde_json::from_slice(payload)?;
        Ok(Self::from_raw(raw.unwrap_or_default()))
    }

    fn from_raw(raw: RawTextOutConfig) -> Self {
        let output_dir = match raw.output_dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_OUTPUT_DIR),
        };

        // Duplicates are kept; rewriting the same file twice is harmless.
        let want = raw
            .want
            .unwrap_or_default()
            .iter()
            .map(|name| normalize_name(name))
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            output_dir,
            want,
            only_ip_type: raw.only_ip_type,
            add_prefix_in_line: raw.add_prefix_in_line.unwrap_or_default(),
            add_suffix_in_line: raw.add_suffix_in_line.unwrap_or_default(),
        }
    }

    /// The family to skip when rendering entries.
    pub fn ignored_ip_type(&self) -> Option<IpType> {
        self.only_ip_type.map(|t| t.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_payload_defaults() {
        let payloads: [&[u8]; 4] = [b"", b"  \n", b"{}", b"null"];
        for payload in payloads {
            let config = TextOutConfig::from_json(payload).unwrap();
            assert_eq!(config, TextOutConfig::default());
        }
        assert_eq!(
            TextOutConfig::default().output_dir,
            PathBuf::from("./output/text")
        );
    }

    #[test]
    fn test_full_payload() {
        let payload = br#"{
            "outputDir": "./out",
            "wantedList": ["cn", "us"],
            "onlyIPType": "ipv4",
            "addPrefixInLine": "route ",
            "addSuffixInLine": ";"
        }"#;
        let config = TextOutConfig::from_json(payload).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("./out"));
        assert_eq!(config.want, vec!["CN", "US"]);
        assert_eq!(config.only_ip_type, Some(IpType::IPv4));
        assert_eq!(config.ignored_ip_type(), Some(IpType::IPv6));
        assert_eq!(config.add_prefix_in_line, "route ");
        assert_eq!(config.add_suffix_in_line, ";");
    }

    #[test]
    fn test_want_list_normalization() {
        let payload = br#"{"wantedList": [" cn ", "", "   ", "us", "CN"]}"#;
        let config = TextOutConfig::from_json(payload).unwrap();
        assert_eq!(config.want, vec!["CN", "US", "CN"]);
    }

    #[test]
    fn test_empty_output_dir_uses_default() {
        let config = TextOutConfig::from_json(br#"{"outputDir": ""}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_only_ip_type_unset_values() {
        let payloads: [&[u8]; 2] = [br#"{"onlyIPType": ""}"#, br#"{"onlyIPType": null}"#];
        for payload in payloads {
            let config = TextOutConfig::from_json(payload).unwrap();
            assert_eq!(config.only_ip_type, None);
            assert_eq!(config.ignored_ip_type(), None);
        }
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(
            TextOutConfig::from_json(b"{\"outputDir\": 42}"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TextOutConfig::from_json(br#"{"wantedList": "cn"}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TextOutConfig::from_json(br#"{"onlyIPType": "ipv5"}"#),
            Err(Error::Config(_))
        ));
        assert!(TextOutConfig::from_json(b"[").is_err());
    }
}
