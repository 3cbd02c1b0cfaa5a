/*!
 * Data-ref bound inline codes (the Layer 2 refinement).
 *
 * XLIFF 2.0 segments reference out-of-band original data: `<ph
 * dataRef="d1"/>` points at an entry in the job's data map, and `<pc
 * dataRefStart="d1" dataRefEnd="d2">...</pc>` wraps translatable text
 * between two referenced codes. This filter rewrites the referencing
 * tags into placeholder tags carrying the reference id in `x-ref`,
 * while the wrapped text stays translatable.
 *
 * The filter is built per job from that data map and is not part of the
 * default registry vocabulary. Chains that use it put it first, before
 * any markup filter gets a chance to claim the raw `<ph>`/`<pc>` tags.
 * Ids missing from the map pass through untouched, as do unpaired `<pc>`
 * halves, so a partial map never produces an unbalanced rewrite.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{EncodeSession, Filter};
use crate::tag::{self, Span};
use crate::taxonomy::PlaceholderKind;

static DATA_REF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"<(?:ph|sc|ec)\b[^<>]*?\bdataRef="([^"]+)"[^<>]*?/>"#,
        r"|(<pc\b[^<>]*>)",
        r"|(</pc\s*>)",
    ))
    .expect("invalid data-ref pattern")
});

static DATA_REF_START_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bdataRefStart="([^"]+)""#).expect("invalid dataRefStart pattern"));

static DATA_REF_END_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bdataRefEnd="([^"]+)""#).expect("invalid dataRefEnd pattern"));

enum RefClass<'a> {
    /// `<ph/>`, `<sc/>` or `<ec/>` carrying a `dataRef` attribute.
    Bound(&'a str),
    PcOpen {
        start: Option<&'a str>,
        end: Option<&'a str>,
    },
    PcClose,
}

struct RefMatch<'a> {
    span: usize,
    start: usize,
    end: usize,
    class: RefClass<'a>,
}

struct PlannedTag {
    kind: PlaceholderKind,
    x_ref: Option<String>,
    pair_of: Option<usize>,
}

fn attr<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrites data-ref bound codes into placeholder tags.
#[derive(Debug)]
pub struct DataRefFilter {
    data_refs: HashMap<String, String>,
}

impl DataRefFilter {
    /// Builds the filter from the job's data map (reference id to the
    /// original data it stands for).
    pub fn new(data_refs: HashMap<String, String>) -> Self {
        Self { data_refs }
    }

    fn collect<'a>(&self, spans: &[Span<'a>]) -> Vec<RefMatch<'a>> {
        let mut found = Vec::new();
        for (span_idx, span) in spans.iter().enumerate() {
            let text = match span {
                Span::Free(text) => text,
                Span::Protected(_) => continue,
            };
            for caps in DATA_REF_REGEX.captures_iter(text) {
                let whole = match caps.get(0) {
                    Some(whole) => whole,
                    None => continue,
                };
                let class = if let Some(id) = caps.get(1) {
                    RefClass::Bound(id.as_str())
                } else if let Some(open) = caps.get(2) {
                    // A self-closing <pc/> wraps nothing; leave it be.
                    if open.as_str().ends_with("/>") {
                        continue;
                    }
                    RefClass::PcOpen {
                        start: attr(&DATA_REF_START_ATTR, open.as_str()),
                        end: attr(&DATA_REF_END_ATTR, open.as_str()),
                    }
                } else {
                    RefClass::PcClose
                };
                found.push(RefMatch {
                    span: span_idx,
                    start: whole.start(),
                    end: whole.end(),
                    class,
                });
            }
        }
        found
    }

    /// Decides which matches become placeholder tags. A bound code needs
    /// its id in the map; a `<pc>` pair needs a matched close and its
    /// `dataRefStart` in the map, otherwise both halves stay untouched.
    fn plan(&self, found: &[RefMatch<'_>]) -> Vec<Option<PlannedTag>> {
        let mut planned: Vec<Option<PlannedTag>> = Vec::with_capacity(found.len());
        planned.resize_with(found.len(), || None);
        let mut stack: Vec<(usize, Option<&str>, Option<&str>)> = Vec::new();

        for (idx, found_match) in found.iter().enumerate() {
            match found_match.class {
                RefClass::Bound(id) => {
                    if self.data_refs.contains_key(id) {
                        planned[idx] = Some(PlannedTag {
                            kind: PlaceholderKind::DataRef,
                            x_ref: Some(id.to_string()),
                            pair_of: None,
                        });
                    }
                }
                RefClass::PcOpen { start, end } => stack.push((idx, start, end)),
                RefClass::PcClose => {
                    let (open_idx, start, end) = match stack.pop() {
                        Some(open) => open,
                        None => continue,
                    };
                    let start = match start {
                        Some(start) if self.data_refs.contains_key(start) => start,
                        _ => continue,
                    };
                    planned[open_idx] = Some(PlannedTag {
                        kind: PlaceholderKind::PairedOpen,
                        x_ref: Some(start.to_string()),
                        pair_of: None,
                    });
                    planned[idx] = Some(PlannedTag {
                        kind: PlaceholderKind::PairedClose,
                        x_ref: end
                            .filter(|end| self.data_refs.contains_key(*end))
                            .map(|end| end.to_string()),
                        pair_of: Some(open_idx),
                    });
                }
            }
        }

        planned
    }
}

impl Filter for DataRefFilter {
    fn name(&self) -> &str {
        "data_ref"
    }

    fn kinds(&self) -> &[PlaceholderKind] {
        &[
            PlaceholderKind::DataRef,
            PlaceholderKind::PairedOpen,
            PlaceholderKind::PairedClose,
        ]
    }

    fn encode(&self, content: &str, session: &mut EncodeSession) -> String {
        if self.data_refs.is_empty() {
            return content.to_string();
        }

        let spans = tag::protected_spans(content);
        let found = self.collect(&spans);
        if found.is_empty() {
            return content.to_string();
        }
        let planned = self.plan(&found);

        let mut ids: Vec<Option<String>> = vec![None; found.len()];
        for idx in 0..found.len() {
            if let Some(plan) = &planned[idx] {
                ids[idx] = match plan.pair_of.and_then(|open_idx| ids[open_idx].clone()) {
                    Some(shared) => Some(shared),
                    None => Some(session.next_tag_id()),
                };
            }
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
                let found_match = &found[next];
                let original = &text[found_match.start..found_match.end];
                out.push_str(&text[cursor..found_match.start]);
                match (&planned[next], &ids[next]) {
                    (Some(plan), Some(id)) => match &plan.x_ref {
                        Some(x_ref) => {
                            out.push_str(&tag::render_with_ref(plan.kind, id, x_ref, original))
                        }
                        None => out.push_str(&tag::render(plan.kind, id, original)),
                    },
                    _ => out.push_str(original),
                }
                cursor = found_match.end;
                next += 1;
            }
            out.push_str(&text[cursor..]);
        }
        out
    }
}
