//! geotext - plaintext CIDR output for GeoIP data conversion pipelines.
//!
//! This crate renders named address-range entries (e.g. `CN`, `US`,
//! `PRIVATE`) into one text file per entry, one CIDR block per line. It is
//! the `text` output backend of a registry-driven conversion pipeline.
//!
//! # Features
//!
//! - **Entry selection**: write every entry, or only a wanted list
//! - **Family filtering**: IPv4 only, IPv6 only, or both
//! - **Line decoration**: literal prefix/suffix on every line
//! - **Deterministic output**: entries written in sorted name order
//! - **Atomic writes**: files are replaced by rename, never half-written
//!
//! # Quick Start
//!
//! ```no_run
//! use geotext::{Action, ConverterRegistry, Entry, EntryMap};
//!
//! let mut cn = Entry::new("cn");
//! cn.add_cidr("2.2.2.0/24")?;
//! cn.add_cidr("fd00::/8")?;
//! let entries: EntryMap = vec![cn].into_iter().collect();
//!
//! let registry = ConverterRegistry::with_builtin();
//! let text = registry.create(
//!     "text",
//!     Action::Output,
//!     br#"{"outputDir": "./output/text", "onlyIPType": "ipv4"}"#,
//! )?;
//!
//! // Writes ./output/text/cn.txt containing "2.2.2.0/24\n"
//! text.output(&entries)?;
//! # Ok::<(), geotext::Error>(())
//! ```
//!
//! # Errors
//!
//! - Bad configuration payloads fail at construction ([`Error::Config`]).
//! - Missing entries are reported as [`OutputEvent::EntryNotFound`] and
//!   skipped.
//! - Unrenderable prefixes ([`Error::Marshal`]) and filesystem failures
//!   ([`Error::Io`]) stop the run; files already written are kept.

mod action;
mod container;
mod entry;
mod error;
mod ip_type;

pub mod converter;
pub mod event;
pub mod pipeline;

// Re-export core types
pub use action::Action;
pub use container::{Container, EntryMap};
pub use entry::{normalize_name, Entry, Prefix};
pub use error::{Error, MarshalError, Result};
pub use ip_type::IpType;

// Re-export converter types
pub use converter::{ConverterCreator, ConverterRegistry, OutputConverter, TextOut};

// Re-export events
pub use event::{EventSink, LogSink, MemorySink, OutputEvent};

// Re-export pipeline configuration
pub use pipeline::{OutputSpec, PipelineConfig};
