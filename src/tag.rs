/*!
 * Placeholder tag grammar.
 *
 * A placeholder tag is the textual unit filters insert into Layer 1 content:
 *
 * ```text
 * <ph id="ph_3" ctype="x-html" equiv-text="base64:PGI+"/>
 * <ph id="ph_7" ctype="x-data-ref" x-ref="d1" equiv-text="base64:JXM="/>
 * ```
 *
 * The `equiv-text` payload is the base64 of the exact original text the tag
 * replaced, so decoding needs no lookup table. Base64 also guarantees the
 * payload contains no character any filter pattern can match, which is half
 * of the opacity invariant; the other half is [`protected_spans`], which
 * every filter uses to skip existing tags entirely.
 */

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::taxonomy::PlaceholderKind;

/// Scanner for placeholder tags. The renderer emits attributes in this
/// exact order, so the fixed order here is reliable.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<ph id="([^"]+)" ctype="([^"]+)"(?: x-ref="([^"]*)")? equiv-text="base64:([A-Za-z0-9+/=]*)"/>"#,
    )
    .expect("invalid placeholder tag regex")
});

/// A placeholder tag pulled back out of Layer 1 content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    /// Per-segment identifier (`ph_N`); paired halves share one.
    pub id: String,
    /// The taxonomy kind carried in `ctype`.
    pub kind: PlaceholderKind,
    /// External data reference id, when the tag is data-bound.
    pub data_ref: Option<String>,
    /// The original text the tag replaced.
    pub original: String,
}

/// Render a placeholder tag for `original`.
pub fn render(kind: PlaceholderKind, id: &str, original: &str) -> String {
    format!(
        r#"<ph id="{}" ctype="{}" equiv-text="base64:{}"/>"#,
        id,
        kind.as_str(),
        BASE64_STANDARD.encode(original)
    )
}

/// Render a placeholder tag carrying an external data reference.
pub fn render_with_ref(kind: PlaceholderKind, id: &str, data_ref: &str, original: &str) -> String {
    format!(
        r#"<ph id="{}" ctype="{}" x-ref="{}" equiv-text="base64:{}"/>"#,
        id,
        kind.as_str(),
        data_ref,
        BASE64_STANDARD.encode(original)
    )
}

/// Parse one placeholder tag. Returns `None` when the text is not a
/// well-formed tag, carries a ctype outside the taxonomy, or embeds a
/// payload that does not decode — callers treat all three the same way:
/// the span is not a placeholder.
pub fn parse(tag_text: &str) -> Option<ParsedTag> {
    let caps = TAG_REGEX.captures(tag_text)?;
    // The scanner may match a strict substring; require the whole span.
    if caps.get(0)?.as_str().len() != tag_text.len() {
        return None;
    }
    let kind = PlaceholderKind::from_str(&caps[2])?;
    let original = decode_payload(&caps[4])?;
    Some(ParsedTag {
        id: caps[1].to_string(),
        kind,
        data_ref: caps.get(3).map(|m| m.as_str().to_string()),
        original,
    })
}

/// One span of Layer 1 content: either an opaque placeholder tag or free
/// text a filter may still transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// A recognized placeholder tag, to be carried through verbatim.
    Protected(&'a str),
    /// Text between placeholder tags.
    Free(&'a str),
}

/// Split content into protected placeholder tags and free text.
///
/// Only tags whose ctype passes the taxonomy membership test count as
/// protected; a `<ph>` with an unrecognized ctype is ordinary content and
/// stays matchable. Concatenating the returned spans reproduces `content`
/// byte-for-byte.
pub fn protected_spans(content: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in TAG_REGEX.captures_iter(content) {
        let whole = caps.get(0).expect("capture 0 always present");
        if !PlaceholderKind::is_known_kind(&caps[2]) {
            continue;
        }
        if whole.start() > cursor {
            spans.push(Span::Free(&content[cursor..whole.start()]));
        }
        spans.push(Span::Protected(whole.as_str()));
        cursor = whole.end();
    }

    if cursor < content.len() {
        spans.push(Span::Free(&content[cursor..]));
    }
    spans
}

/// Replace every placeholder tag whose kind is in `kinds` with its embedded
/// original text. Tags of other kinds, and tags with undecodable payloads,
/// are left untouched.
pub fn decode_kinds(content: &str, kinds: &[PlaceholderKind]) -> String {
    TAG_REGEX
        .replace_all(content, |caps: &regex::Captures<'_>| {
            let owned_by_caller = PlaceholderKind::from_str(&caps[2])
                .map(|kind| kinds.contains(&kind))
                .unwrap_or(false);
            if !owned_by_caller {
                return caps[0].to_string();
            }
            match decode_payload(&caps[4]) {
                Some(original) => original,
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn decode_payload(payload: &str) -> Option<String> {
    let bytes = BASE64_STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}
