/*!
 * Constant marker registry.
 *
 * Fixed opaque strings that stand in for literal control characters and
 * structural delimiters while a segment travels through external TM/MT
 * services. The `##...##` scheme cannot be produced by normal text entry,
 * which is the collision contract every marker relies on: no marker may
 * appear as a substring of legitimate segment content.
 */

/// Line feed (`\n`).
pub const LF: &str = "##$_0A$##";

/// Carriage return (`\r`).
pub const CR: &str = "##$_0D$##";

/// Windows line ending (`\r\n`). Swapped before the individual CR/LF
/// markers so the pair is kept as one unit.
pub const CRLF: &str = "##$_0D0A$##";

/// Horizontal tab (`\t`).
pub const TAB: &str = "##$_09$##";

/// Non-breaking space (U+00A0).
pub const NBSP: &str = "##$_A0$##";

/// Escaped less-than entity (`&lt;`).
pub const LT: &str = "##LESSTHAN##";

/// Escaped greater-than entity (`&gt;`).
pub const GT: &str = "##GREATERTHAN##";

/// Escaped ampersand entity (`&amp;`).
pub const AMP: &str = "##AMPERSAND##";

/// Segment split point. Inserted by the hosting platform's segment-split
/// workflow; the pipeline only guarantees it survives both directions
/// untouched.
pub const SPLIT: &str = "##$_SPLIT$##";

/// Start of a nested markup region (markup-inside-markup protection,
/// written and consumed by the platform's extraction layer).
pub const NESTED_START: &str = "##NESTED_START##";

/// End of a nested markup region.
pub const NESTED_END: &str = "##NESTED_END##";

/// Every declared marker.
pub const ALL: &[&str] = &[
    LF,
    CR,
    CRLF,
    TAB,
    NBSP,
    LT,
    GT,
    AMP,
    SPLIT,
    NESTED_START,
    NESTED_END,
];

/// Whether `content` contains any declared marker.
///
/// Used by callers that need to refuse content which would violate the
/// collision contract before it enters the database.
pub fn contains_marker(content: &str) -> bool {
    ALL.iter().any(|marker| content.contains(marker))
}
