//! Structured output events.
//!
//! Converters report what they did through an [`EventSink`] instead of
//! printing directly, so embedders can collect results while the CLI just
//! logs them.

use std::fmt;
use std::path::PathBuf;

use parking_lot::Mutex;

/// Something a converter did during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// A file was written
    Written {
        converter: String,
        filename: String,
        dir: PathBuf,
    },
    /// A requested or enumerated entry was absent; it was skipped
    EntryNotFound { converter: String, name: String },
}

impl fmt::Display for OutputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEvent::Written {
                converter,
                filename,
                dir,
            } => write!(f, "[{}] {} --> {}", converter, filename, dir.display()),
            OutputEvent::EntryNotFound { converter, name } => {
                write!(f, "[{}] entry {} not found", converter, name)
            }
        }
    }
}

/// Receiver for output events.
pub trait EventSink {
    fn emit(&self, event: OutputEvent);
}

/// Sink that forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: OutputEvent) {
        match &event {
            OutputEvent::Written { .. } => log::info!("{}", event),
            OutputEvent::EntryNotFound { .. } => log::warn!("{}", event),
        }
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<OutputEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<OutputEvent> {
        self.events.lock().clone()
    }

    /// Filenames of all `Written` events, in emission order.
    pub fn written(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                OutputEvent::Written { filename, .. } => Some(filename.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names of all `EntryNotFound` events, in emission order.
    pub fn missing(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                OutputEvent::EntryNotFound { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: OutputEvent) {
        self.events.lock().push(event);
    }
}
