/*!
 * Marker-based filters for characters the downstream engines mangle.
 *
 * Unlike the pattern families these never mint placeholder tags: the
 * protected value is a single well-known character (or entity), so a
 * fixed `##...##` marker from [`crate::markers`] is cheaper and keeps
 * segments readable in logs. Both filters are plain string rewrites —
 * none of the protected characters can occur inside a placeholder tag,
 * so whole-segment replacement preserves existing tags untouched.
 */

use super::{EncodeSession, Filter};
use crate::markers;
use crate::taxonomy::PlaceholderKind;

/// Swaps line breaks, tabs and non-breaking spaces for opaque markers.
///
/// `\r\n` is replaced before `\r` and `\n` so a Windows line ending
/// survives as one unit instead of two stacked markers.
#[derive(Debug, Default)]
pub struct ControlCharsFilter;

impl ControlCharsFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for ControlCharsFilter {
    fn name(&self) -> &str {
        "control_chars"
    }

    fn kinds(&self) -> &[PlaceholderKind] {
        &[]
    }

    fn encode(&self, content: &str, _session: &mut EncodeSession) -> String {
        content
            .replace("\r\n", markers::CRLF)
            .replace('\r', markers::CR)
            .replace('\n', markers::LF)
            .replace('\t', markers::TAB)
            .replace('\u{A0}', markers::NBSP)
    }

    fn decode(&self, content: &str) -> String {
        content
            .replace(markers::CRLF, "\r\n")
            .replace(markers::CR, "\r")
            .replace(markers::LF, "\n")
            .replace(markers::TAB, "\t")
            .replace(markers::NBSP, "\u{A0}")
    }
}

/// Swaps the three XML-significant entities for opaque markers.
///
/// Engines are prone to "helpfully" decoding `&lt;` into a real `<`,
/// which would later parse as markup. Markers keep the entity inert.
#[derive(Debug, Default)]
pub struct EntitiesFilter;

impl EntitiesFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for EntitiesFilter {
    fn name(&self) -> &str {
        "entities"
    }

    fn kinds(&self) -> &[PlaceholderKind] {
        &[]
    }

    fn encode(&self, content: &str, _session: &mut EncodeSession) -> String {
        content
            .replace("&lt;", markers::LT)
            .replace("&gt;", markers::GT)
            .replace("&amp;", markers::AMP)
    }

    fn decode(&self, content: &str) -> String {
        content
            .replace(markers::LT, "&lt;")
            .replace(markers::GT, "&gt;")
            .replace(markers::AMP, "&amp;")
    }
}
