//! Registration table for output converters.
//!
//! The registry maps converter type names to creator functions. It is built
//! once at startup and passed by reference to whatever dispatches
//! configuration payloads.
//!
//! ```
//! use geotext::{Action, ConverterRegistry};
//!
//! let registry = ConverterRegistry::with_builtin();
//! let converter = registry
//!     .create("text", Action::Output, br#"{"outputDir": "out"}"#)
//!     .unwrap();
//! assert_eq!(converter.type_name(), "text");
//! ```

use std::collections::BTreeMap;

use super::OutputConverter;
use crate::{Action, Error, Result};

/// Creator function: builds a converter from an action tag and a raw JSON
/// payload. An empty payload means "all defaults".
pub type ConverterCreator = fn(Action, &[u8]) -> Result<Box<dyn OutputConverter>>;

struct Registration {
    description: &'static str,
    creator: ConverterCreator,
}

/// Converter registry keyed by type name.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: BTreeMap<&'static str, Registration>,
}

impl ConverterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every converter shipped in this crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        super::text::register(&mut registry);
        registry
    }

    /// Register a converter type. A later registration under the same name
    /// replaces the earlier one.
    pub fn register(
        &mut self,
        type_name: &'static str,
        description: &'static str,
        creator: ConverterCreator,
    ) {
        if self
            .converters
            .insert(type_name, Registration { description, creator })
            .is_some()
        {
            log::debug!("Replaced output converter registration: {}", type_name);
        }
    }

    /// Build a converter of `type_name` from its configuration payload.
    pub fn create(
        &self,
        type_name: &str,
        action: Action,
        payload: &[u8],
    ) -> Result<Box<dyn OutputConverter>> {
        let registration = self
            .converters
            .get(type_name)
            .ok_or_else(|| Error::UnknownConverter(type_name.to_string()))?;
        (registration.creator)(action, payload)
    }

    /// Check if a converter type is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.converters.contains_key(type_name)
    }

    /// Get the description of a registered converter type.
    pub fn description(&self, type_name: &str) -> Option<&'static str> {
        self.converters.get(type_name).map(|r| r.description)
    }

    /// Registered type names with their descriptions, sorted by name.
    pub fn types(&self) -> Vec<(&'static str, &'static str)> {
        self.converters
            .iter()
            .map(|(name, r)| (*name, r.description))
            .collect()
    }
}
