//! Pipeline configuration: which output converters to run and how.
//!
//! ```json
//! {
//!   "output": [
//!     { "type": "text", "action": "output", "args": { "outputDir": "./output/text" } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::converter::{ConverterRegistry, OutputConverter};
use crate::event::EventSink;
use crate::{Action, Container, Result};

/// One configured output step.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSpec {
    /// Registered converter type
    #[serde(rename = "type")]
    pub type_name: String,
    /// Action tag passed through to the converter
    #[serde(default)]
    pub action: Action,
    /// Converter-specific payload
    #[serde(default)]
    pub args: Option<serde_json::Value>,
}

impl OutputSpec {
    /// Raw payload bytes for the converter creator. Absent args give an
    /// empty payload.
    fn payload(&self) -> Result<Vec<u8>> {
        match &self.args {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(args) => Ok(serde_json::to_vec(args)?),
        }
    }
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub output: Vec<OutputSpec>,
}

impl PipelineConfig {
    /// Parse a pipeline configuration from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a pipeline configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build every configured converter.
    ///
    /// Fails on the first unknown type or bad payload, before any converter
    /// has run.
    pub fn build(&self, registry: &ConverterRegistry) -> Result<Vec<Box<dyn OutputConverter>>> {
        self.output
            .iter()
            .map(|spec| registry.create(&spec.type_name, spec.action, &spec.payload()?))
            .collect()
    }

    /// Build all converters, then run them in order against `container`.
    pub fn run(
        &self,
        registry: &ConverterRegistry,
        container: &dyn Container,
        sink: &dyn EventSink,
    ) -> Result<()> {
        let converters = self.build(registry)?;
        for converter in &converters {
            log::debug!(
                "Running output converter: {} ({})",
                converter.type_name(),
                converter.action()
            );
            converter.output_with_sink(container, sink)?;
        }
        Ok(())
    }
}
