/*!
 * Single-pattern filter families.
 *
 * Most inline-code families are fully described by one regular expression:
 * every match becomes a placeholder tag of one fixed kind. [`PatternFilter`]
 * captures that shape once; each family is a constructor pairing a pattern
 * with its taxonomy kind. The patterns are deliberately conservative —
 * an unterminated or ambiguous code must fall through untouched rather
 * than swallow surrounding text.
 */

use regex::{Captures, Regex};

use super::{EncodeSession, Filter, encode_free_spans};
use crate::tag;
use crate::taxonomy::PlaceholderKind;

/// A filter that protects one regex-recognizable inline-code family.
#[derive(Debug)]
pub struct PatternFilter {
    name: &'static str,
    kind: PlaceholderKind,
    pattern: Regex,
}

impl PatternFilter {
    fn new(name: &'static str, kind: PlaceholderKind, pattern: &str) -> Self {
        Self {
            name,
            kind,
            pattern: Regex::new(pattern).expect("invalid filter pattern"),
        }
    }

    /// Literal XLIFF inline tags already present in stored content:
    /// `<x id="1"/>`, `<bx id="2"/>`, `<ex id="2" rid="1"/>`.
    pub fn xliff_tags() -> Self {
        Self::new(
            "xliff_tags",
            PlaceholderKind::OriginalX,
            r"<(?:x|bx|ex)(?:\s[^<>]*)?/>",
        )
    }

    /// Twig templating directives: `{{ user.name }}`, `{% if ok %}`,
    /// `{# note #}`. Unbalanced braces never match.
    pub fn twig() -> Self {
        Self::new(
            "twig",
            PlaceholderKind::Twig,
            r"\{\{[^{}]+\}\}|\{%[^{}]+%\}|\{#[^{}]+#\}",
        )
    }

    /// printf-style variables: `%s`, `%1$s`, `%.2f`, `%05d`, `%ld`, `%@`.
    ///
    /// A conversion character is required, so prose percent signs
    /// (`100% sure`) stay untouched. Rare word-shaped false positives
    /// (`%expensive` protects `%e`) are accepted: they round-trip
    /// losslessly and only cost a little MT context.
    pub fn sprintf() -> Self {
        Self::new(
            "sprintf",
            PlaceholderKind::Sprintf,
            r"%(?:\d+\$)?[-+0]*\d*(?:\.\d+)?(?:hh?|ll?)?[deEfgGsuxX@]",
        )
    }

    /// Ruby on Rails i18n interpolation: `%{count}`.
    pub fn ruby_i18n() -> Self {
        Self::new("ruby_i18n", PlaceholderKind::RubyI18n, r"%\{[^{}]+\}")
    }

    /// `@@name@@` variables.
    pub fn snails() -> Self {
        Self::new("snails", PlaceholderKind::Snails, r"@@[^@\n]+?@@")
    }

    /// `{name}` variables. Runs late in the canonical order so richer
    /// brace syntaxes (`%{...}`, `{{...}}`, `${...}`) claim theirs first.
    pub fn single_curly() -> Self {
        Self::new("single_curly", PlaceholderKind::SingleCurly, r"\{[^{}]+\}")
    }

    /// `%{{name}}` variables. Must run before `twig` and `ruby_i18n`,
    /// whose patterns each match a strict substring of this one.
    pub fn percent_double_curly() -> Self {
        Self::new(
            "percent_double_curly",
            PlaceholderKind::PercentDoubleCurly,
            r"%\{\{[^{}]+\}\}",
        )
    }

    /// `%name%` variables.
    pub fn percentages() -> Self {
        Self::new(
            "percentages",
            PlaceholderKind::Percentages,
            r"%[A-Za-z0-9_]+%",
        )
    }

    /// `${name}` variables.
    pub fn dollar_curly() -> Self {
        Self::new(
            "dollar_curly",
            PlaceholderKind::DollarCurly,
            r"\$\{[^{}]+\}",
        )
    }

    /// `[[name]]` variables.
    pub fn double_square() -> Self {
        Self::new(
            "double_square",
            PlaceholderKind::DoubleSquare,
            r"\[\[[^\[\]]+\]\]",
        )
    }

    /// Square-bracketed sprintf variables: `[%s]`, `[%1$d]`, `[%s:name]`.
    pub fn square_sprintf() -> Self {
        Self::new(
            "square_sprintf",
            PlaceholderKind::SquareSprintf,
            r"\[%(?:\d+\$)?[sdif](?::[A-Za-z0-9_]+)?\]",
        )
    }

    /// Pluralization separator `|||` (polyglot-style smart counts).
    pub fn smart_count() -> Self {
        Self::new("smart_count", PlaceholderKind::SmartCount, r"\|\|\|")
    }
}

impl Filter for PatternFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn kinds(&self) -> &[PlaceholderKind] {
        std::slice::from_ref(&self.kind)
    }

    fn encode(&self, content: &str, session: &mut EncodeSession) -> String {
        encode_free_spans(content, |text| {
            self.pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    tag::render(self.kind, &session.next_tag_id(), &caps[0])
                })
                .into_owned()
        })
    }
}
