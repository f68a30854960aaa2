//! Text helpers for rendering chat rows.

/// Marker the assistant puts in front of its cited sources.
pub const SOURCES_MARKER: &str = "**Sources:**";

/// Splits an answer into its body and the sources listed after the last
/// [`SOURCES_MARKER`]. Both parts are trimmed; blank sources are `None`.
#[must_use]
pub fn split_sources(text: &str) -> (&str, Option<&str>) {
    match text.rfind(SOURCES_MARKER) {
        Some(index) => {
            let sources = text[index + SOURCES_MARKER.len()..].trim();
            (
                text[..index].trim(),
                (!sources.is_empty()).then_some(sources),
            )
        }
        None => (text.trim(), None),
    }
}

/// Whether an assistant row should show a spinner instead of text.
///
/// The branded greeting row never waits on an answer.
#[must_use]
pub fn is_awaiting_answer(text: &str, is_brand_row: bool) -> bool {
    !is_brand_row && text.trim().is_empty()
}
