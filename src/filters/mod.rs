/*!
 * Filter implementations for the inline-code families.
 *
 * A filter is the unit of transformation: it recognizes one family of
 * inline codes and swaps each occurrence for a placeholder tag (encode) or
 * back (decode). Implementations are stateless per segment and composed
 * into ordered chains by the pipeline.
 *
 * - `pattern`: single-regex families (twig, sprintf, ruby_i18n, ...)
 * - `control_chars`: control characters and escaped XML entities
 * - `html`: HTML/XML tags with open/close pairing
 * - `data_ref`: codes bound to external data references
 */

use std::fmt::Debug;

use crate::tag::{self, Span};
use crate::taxonomy::PlaceholderKind;

pub mod control_chars;
pub mod data_ref;
pub mod html;
pub mod pattern;

// Re-export the filter types
pub use control_chars::{ControlCharsFilter, EntitiesFilter};
pub use data_ref::DataRefFilter;
pub use html::HtmlFilter;
pub use pattern::PatternFilter;

/// Per-segment encoding state shared by every filter in one chain pass.
///
/// Hands out tag ids that stay unique across the whole segment no matter
/// how many filters mint tags, and counts what was minted for diagnostics.
#[derive(Debug)]
pub struct EncodeSession {
    next_id: u32,
}

impl EncodeSession {
    /// Start a fresh session for one segment.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Mint the next tag id (`ph_1`, `ph_2`, ...).
    pub fn next_tag_id(&mut self) -> String {
        let id = format!("ph_{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// How many ids have been minted so far.
    pub fn minted(&self) -> u32 {
        self.next_id - 1
    }
}

impl Default for EncodeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The transformation unit contract.
///
/// `decode(encode(x)) == x` must hold for every input the filter claims,
/// `encode` must be the identity on non-matching input, and neither
/// operation may ever touch an existing placeholder tag. Malformed inline
/// codes are not errors: a filter that cannot make sense of a span leaves
/// it alone, because segment content is untrusted user text.
pub trait Filter: Send + Sync + Debug {
    /// Diagnostic label, used in logs and by the registry defaults.
    fn name(&self) -> &str;

    /// The taxonomy kinds this filter may mint. Decode restores exactly
    /// these and nothing else.
    fn kinds(&self) -> &[PlaceholderKind];

    /// Replace every occurrence of this filter's inline-code family in the
    /// free spans of `content` with a placeholder tag.
    fn encode(&self, content: &str, session: &mut EncodeSession) -> String;

    /// Restore the original text for every placeholder tag of this
    /// filter's kinds.
    fn decode(&self, content: &str) -> String {
        tag::decode_kinds(content, self.kinds())
    }
}

/// Run `transform` over the free spans of `content`, carrying existing
/// placeholder tags through verbatim.
///
/// This is the opacity invariant in executable form: every filter encodes
/// through this helper, so no pattern can ever see the inside of a tag
/// minted earlier in the chain. Spans are visited in order, which lets
/// stateful transforms (tag pairing) track context across spans.
pub fn encode_free_spans(content: &str, mut transform: impl FnMut(&str) -> String) -> String {
    let spans = tag::protected_spans(content);

    // Untouched content is the common case; skip the rebuild.
    if spans.len() == 1 {
        if let Span::Free(text) = spans[0] {
            return transform(text);
        }
    }

    let mut result = String::with_capacity(content.len());
    for span in spans {
        match span {
            Span::Protected(tag_text) => result.push_str(tag_text),
            Span::Free(text) => result.push_str(&transform(text)),
        }
    }
    result
}
