//! Output converters and their registry.

mod registry;
pub mod text;

pub use registry::{ConverterCreator, ConverterRegistry};
pub use text::TextOut;

use crate::event::{EventSink, LogSink};
use crate::{Action, Container, Result};

/// OutputConverter writes the entries of a container somewhere.
///
/// Instances are immutable once built by their creator; one instance may
/// run against any number of containers.
pub trait OutputConverter {
    /// Registered type name (e.g. `text`).
    fn type_name(&self) -> &str;

    /// Action tag this converter was created with.
    fn action(&self) -> Action;

    /// Human readable description.
    fn description(&self) -> &str;

    /// Run against `container`, reporting events to `sink`.
    ///
    /// The first fatal error stops the run. Files written before the
    /// error are left in place.
    fn output_with_sink(&self, container: &dyn Container, sink: &dyn EventSink) -> Result<()>;

    /// Run against `container`, logging events.
    fn output(&self, container: &dyn Container) -> Result<()> {
        self.output_with_sink(container, &LogSink)
    }
}
