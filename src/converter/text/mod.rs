//! Plaintext CIDR output converter.
//!
//! Writes one `<name>.txt` file per entry with one CIDR per line:
//!
//! ```text
//! 2.2.2.0/24
//! fd00::/8
//! ```
//!
//! Configuration payload (all fields optional):
//!
//! ```json
//! {
//!   "outputDir": "./output/text",
//!   "wantedList": ["cn", "private"],
//!   "onlyIPType": "ipv4",
//!   "addPrefixInLine": "route ",
//!   "addSuffixInLine": ";"
//! }
//! ```

mod config;
mod marshal;
mod select;
mod writer;

pub use config::{TextOutConfig, DEFAULT_OUTPUT_DIR};
pub use writer::FILE_EXTENSION;

use super::{ConverterRegistry, OutputConverter};
use crate::event::{EventSink, OutputEvent};
use crate::{Action, Container, Result};

/// Registered type name.
pub const TYPE_TEXT_OUT: &str = "text";

/// Registered description.
pub const DESC_TEXT_OUT: &str = "Convert data to plaintext CIDR format";

/// Register the plaintext converter.
pub fn register(registry: &mut ConverterRegistry) {
    registry.register(TYPE_TEXT_OUT, DESC_TEXT_OUT, create);
}

fn create(action: Action, payload: &[u8]) -> Result<Box<dyn OutputConverter>> {
    Ok(Box::new(TextOut::new(action, payload)?))
}

/// Plaintext CIDR output converter.
#[derive(Debug, Clone)]
pub struct TextOut {
    action: Action,
    config: TextOutConfig,
}

impl TextOut {
    /// Create a converter from a JSON payload. An empty payload uses the
    /// defaults.
    pub fn new(action: Action, payload: &[u8]) -> Result<Self> {
        let config = TextOutConfig::from_json(payload)?;
        Ok(Self::with_config(action, config))
    }

    /// Create a converter from an already normalized configuration.
    pub fn with_config(action: Action, config: TextOutConfig) -> Self {
        Self { action, config }
    }

    pub fn config(&self) -> &TextOutConfig {
        &self.config
    }
}

impl OutputConverter for TextOut {
    fn type_name(&self) -> &str {
        TYPE_TEXT_OUT
    }

    fn action(&self) -> Action {
        self.action
    }

    fn description(&self) -> &str {
        DESC_TEXT_OUT
    }

    fn output_with_sink(&self, container: &dyn Container, sink: &dyn EventSink) -> Result<()> {
        let config = &self.config;

        for entry in select::select(TYPE_TEXT_OUT, &config.want, container, sink) {
            let cidrs = marshal::marshal_entry(entry, config)?;
            let content = writer::render_lines(
                &cidrs,
                &config.add_prefix_in_line,
                &config.add_suffix_in_line,
            );

            let filename = writer::filename(entry.name());
            writer::write_file(&config.output_dir, &filename, content.as_bytes())?;

            sink.emit(OutputEvent::Written {
                converter: TYPE_TEXT_OUT.to_string(),
                filename,
                dir: config.output_dir.clone(),
            });
        }

        Ok(())
    }
}
