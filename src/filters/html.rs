/*!
 * Markup protection with open/close pairing.
 *
 * HTML fragments need more than a flat pattern: a matched `<b>...</b>`
 * pair must survive reordering by the engine, so both halves carry the
 * same tag id and the paired-open/paired-close kinds. Everything else
 * (comments, doctypes, unmatched halves) is protected standalone.
 * Pairing is resolved over the whole segment, so a pair still closes
 * across placeholder tags minted by earlier filters.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::{EncodeSession, Filter};
use crate::tag::{self, Span};
use crate::taxonomy::PlaceholderKind;

static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)<!--.*?-->",
        r"|<!\[CDATA\[.*?\]\]>",
        r"|<![^<>]*>",
        r"|<\?[^<>]*\?>",
        r"|</\s*([A-Za-z][A-Za-z0-9._:-]*)\s*>",
        r#"|<([A-Za-z][A-Za-z0-9._:-]*)(?:"[^"]*"|'[^']*'|[^<>"'])*>"#,
    ))
    .expect("invalid markup pattern")
});

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v))
}

/// How one piece of matched markup participates in the segment.
enum MarkupClass<'a> {
    /// Comment, doctype, CDATA or processing instruction.
    Standalone,
    /// Explicit `.../>` or a void element.
    SelfContained,
    Opening(&'a str),
    Closing(&'a str),
}

struct MarkupMatch<'a> {
    span: usize,
    start: usize,
    end: usize,
    class: MarkupClass<'a>,
}

/// Protects raw HTML markup, pairing matched open/close tags.
#[derive(Debug, Default)]
pub struct HtmlFilter;

impl HtmlFilter {
    pub fn new() -> Self {
        Self
    }

    fn collect<'a>(spans: &[Span<'a>]) -> Vec<MarkupMatch<'a>> {
        let mut found = Vec::new();
        for (span_idx, span) in spans.iter().enumerate() {
            let text = match span {
                Span::Free(text) => text,
                Span::Protected(_) => continue,
            };
            for caps in MARKUP_REGEX.captures_iter(text) {
                let whole = match caps.get(0) {
                    Some(whole) => whole,
                    None => continue,
                };
                let class = if let Some(name) = caps.get(1) {
                    MarkupClass::Closing(name.as_str())
                } else if let Some(name) = caps.get(2) {
                    if whole.as_str().ends_with("/>") || is_void(name.as_str()) {
                        MarkupClass::SelfContained
                    } else {
                        MarkupClass::Opening(name.as_str())
                    }
                } else {
                    MarkupClass::Standalone
                };
                found.push(MarkupMatch {
                    span: span_idx,
                    start: whole.start(),
                    end: whole.end(),
                    class,
                });
            }
        }
        found
    }

    /// Resolves each match to its placeholder kind, and each closing tag
    /// to the index of the opening tag it pairs with. Only a closing tag
    /// that matches the innermost open element forms a pair; anything
    /// misnested is protected standalone.
    fn pair(found: &[MarkupMatch<'_>]) -> (Vec<PlaceholderKind>, Vec<Option<usize>>) {
        let mut kinds = vec![PlaceholderKind::Html; found.len()];
        let mut pair_of: Vec<Option<usize>> = vec![None; found.len()];
        let mut stack: Vec<(usize, &str)> = Vec::new();

        for (idx, markup) in found.iter().enumerate() {
            match markup.class {
                MarkupClass::Standalone => {}
                MarkupClass::SelfContained => kinds[idx] = PlaceholderKind::SelfClosing,
                MarkupClass::Opening(name) => stack.push((idx, name)),
                MarkupClass::Closing(name) => match stack.last() {
                    Some((open_idx, open_name)) if open_name.eq_ignore_ascii_case(name) => {
                        kinds[*open_idx] = PlaceholderKind::PairedOpen;
                        kinds[idx] = PlaceholderKind::PairedClose;
                        pair_of[idx] = Some(*open_idx);
                        stack.pop();
                    }
                    _ => {}
                },
            }
        }

        (kinds, pair_of)
    }
}

impl Filter for HtmlFilter {
    fn name(&self) -> &str {
        "html"
    }

    fn kinds(&self) -> &[PlaceholderKind] {
        &[
            PlaceholderKind::Html,
            PlaceholderKind::PairedOpen,
            PlaceholderKind::PairedClose,
            PlaceholderKind::SelfClosing,
        ]
    }

    fn encode(&self, content: &str, session: &mut EncodeSession) -> String {
        let spans = tag::protected_spans(content);
        let found = Self::collect(&spans);
        if found.is_empty() {
            return content.to_string();
        }

        let (kinds, pair_of) = Self::pair(&found);

        // Ids are minted in document order; a closing half reuses the id
        // minted for its opening half.
        let mut ids: Vec<String> = Vec::with_capacity(found.len());
        for idx in 0..found.len() {
            let id = match pair_of[idx] {
                Some(open_idx) => ids[open_idx].clone(),
                None => session.next_tag_id(),
            };
            ids.push(id);
        }

        let mut out = String::with_capacity(content.len());
        let mut next = 0;
        for (span_idx, span) in spans.iter().enumerate() {
            let text = match span {
                Span::Protected(text) => {
                    out.push_str(text);
                    continue;
                }
                Span::Free(text) => text,
            };
            let mut cursor = 0;
            while next < found.len() && found[next].span == span_idx {
                let markup = &found[next];
                out.push_str(&text[cursor..markup.start]);
                out.push_str(&tag::render(
                    kinds[next],
                    &ids[next],
                    &text[markup.start..markup.end],
                ));
                cursor = markup.end;
                next += 1;
            }
            out.push_str(&text[cursor..]);
        }
        out
    }
}
