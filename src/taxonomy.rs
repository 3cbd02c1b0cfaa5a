/*!
 * Placeholder taxonomy: the closed set of placeholder kinds.
 *
 * Every placeholder tag minted by a filter carries one of these kinds as its
 * `ctype` attribute. Membership in this set is the sole criterion downstream
 * code uses to decide "this span is a system-managed placeholder, leave it
 * alone" — it is what keeps filters from re-encoding each other's output.
 */

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;

/// Kind of a placeholder tag, classifying the inline code it replaced.
///
/// The string identity of each kind follows the XLIFF 1.2 convention for
/// custom ctypes (`x-` prefix). Identities are stable wire format: external
/// TM/MT alignment keys off them, so they must never be reused for a
/// different transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Literal XLIFF inline tag (`<x/>`, `<bx/>`, `<ex/>`) already present
    /// in the stored content
    OriginalX,
    /// HTML-origin fragment that has no paired/self-closing role
    /// (comment, doctype, unmatched closing tag)
    Html,
    /// Twig templating directive (`{{ ... }}`, `{% ... %}`, `{# ... #}`)
    Twig,
    /// printf-style variable (`%s`, `%1$d`, `%.2f`, `%@`, ...)
    Sprintf,
    /// Ruby on Rails i18n interpolation (`%{name}`)
    RubyI18n,
    /// `@@name@@` variable
    Snails,
    /// `{name}` variable
    SingleCurly,
    /// `%{{name}}` variable
    PercentDoubleCurly,
    /// `%name%` variable
    Percentages,
    /// `${name}` variable
    DollarCurly,
    /// `[[name]]` variable
    DoubleSquare,
    /// `[%s:name]`-style variable
    SquareSprintf,
    /// Pluralization separator `|||`
    SmartCount,
    /// Opening half of a paired inline code
    PairedOpen,
    /// Closing half of a paired inline code
    PairedClose,
    /// Self-closing inline code
    SelfClosing,
    /// Inline code bound to an external data reference
    DataRef,
}

impl PlaceholderKind {
    /// Every kind in the taxonomy, in declaration order.
    pub const ALL: &'static [PlaceholderKind] = &[
        Self::OriginalX,
        Self::Html,
        Self::Twig,
        Self::Sprintf,
        Self::RubyI18n,
        Self::Snails,
        Self::SingleCurly,
        Self::PercentDoubleCurly,
        Self::Percentages,
        Self::DollarCurly,
        Self::DoubleSquare,
        Self::SquareSprintf,
        Self::SmartCount,
        Self::PairedOpen,
        Self::PairedClose,
        Self::SelfClosing,
        Self::DataRef,
    ];

    /// The stable string identity used as the `ctype` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OriginalX => "x-original-x",
            Self::Html => "x-html",
            Self::Twig => "x-twig",
            Self::Sprintf => "x-sprintf",
            Self::RubyI18n => "x-ruby-i18n",
            Self::Snails => "x-snails",
            Self::SingleCurly => "x-single-curly",
            Self::PercentDoubleCurly => "x-percent-double-curly",
            Self::Percentages => "x-percentages",
            Self::DollarCurly => "x-dollar-curly",
            Self::DoubleSquare => "x-double-square",
            Self::SquareSprintf => "x-square-sprintf",
            Self::SmartCount => "x-smart-count",
            Self::PairedOpen => "x-paired-open",
            Self::PairedClose => "x-paired-close",
            Self::SelfClosing => "x-self-closing",
            Self::DataRef => "x-data-ref",
        }
    }

    /// Resolve a ctype string back to its kind.
    ///
    /// Returns `None` for anything outside the taxonomy, including near
    /// misses (case variants, partial matches) — lookups are exact.
    pub fn from_str(candidate: &str) -> Option<PlaceholderKind> {
        KIND_INDEX.get(candidate).copied()
    }

    /// Whether `candidate` exactly matches one of the enumerated kind
    /// identities.
    ///
    /// O(1) after the one-time index build. Filters and the pipeline call
    /// this to decide whether a `<ph>` span is already protected before
    /// attempting any match of their own.
    pub fn is_known_kind(candidate: &str) -> bool {
        KIND_INDEX.contains_key(candidate)
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reverse index from identity string to kind, built once on first use.
static KIND_INDEX: Lazy<std::collections::HashMap<&'static str, PlaceholderKind>> =
    Lazy::new(|| {
        PlaceholderKind::ALL
            .iter()
            .map(|kind| (kind.as_str(), *kind))
            .collect()
    });

/// Sanity guard used by tests: identities must be pairwise distinct.
#[allow(dead_code)]
fn identity_set() -> HashSet<&'static str> {
    PlaceholderKind::ALL.iter().map(|k| k.as_str()).collect()
}
