//! Entry selection for the plaintext converter.

use crate::event::{EventSink, OutputEvent};
use crate::{Container, Entry};

/// Names to write, sorted ascending.
///
/// With an empty want list every entry of the container is selected.
/// Duplicate wanted names are kept.
pub(crate) fn sorted_names(want: &[String], container: &dyn Container) -> Vec<String> {
    let mut names: Vec<String> = if want.is_empty() {
        container.entries().map(|e| e.name().to_string()).collect()
    } else {
        want.to_vec()
    };
    names.sort();
    names
}

/// Resolve the selected names to entries, in order.
///
/// Names without an entry are reported to `sink` and skipped. Resolution is
/// lazy, so each miss is reported when the run reaches it.
pub(crate) fn select<'a>(
    converter: &'a str,
    want: &[String],
    container: &'a dyn Container,
    sink: &'a dyn EventSink,
) -> impl Iterator<Item = &'a Entry> + 'a {
    sorted_names(want, container)
        .into_iter()
        .filter_map(move |name| match container.get_entry(&name) {
            Some(entry) => Some(entry),
            None => {
                sink.emit(OutputEvent::EntryNotFound {
                    converter: converter.to_string(),
                    name,
                });
                None
            }
        })
}
