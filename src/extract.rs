//! Prototype and header extraction from custom function source text.
//!
//! A typical function file starts like this:
//!
//! ```text
//! /**
//!  * =====================================
//!  * Add ( a ; b )
//!  *
//!  * PURPOSE:
//!  *     Adds two numbers.
//!  *
//!  * REFERENCES:
//!  *     https://example.com/add
//!  * =====================================
//!  */
//! ```
//!
//! The prototype is the line after the first `===` marker. The header is the
//! first `/** ... */` block with its REFERENCES subsection and separator lines
//! removed.

use regex::Regex;
use std::sync::LazyLock;

// `===` need not start the line: separators like ` * =====` end with it.
// The prototype line may be indented (` * X`) or not (`* X`).
static RE_PROTOTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"===\r?\n[ \t]*\* ([^\r\n]+)").unwrap());

// First `/**` up to the nearest `*/`.
static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());

static RE_REFERENCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^[ \t]*\* REFERENCES:.*?^[ \t]*\* =+\r?$").unwrap()
});

static RE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\* =+\r?\n").unwrap());

/// Extract the function prototype that follows the first `===` marker.
pub fn prototype(content: &str) -> Option<String> {
    RE_PROTOTYPE
        .captures(content)
        .map(|caps| caps[1].to_string())
}

/// Extract the first `/** ... */` block, verbatim.
pub fn header(content: &str) -> Option<&str> {
    RE_HEADER.find(content).map(|m| m.as_str())
}

/// Strip every REFERENCES subsection and all `* ===` separator lines.
///
/// A subsection runs up to the next separator line; it is collapsed into a
/// bare separator which the second pass then removes.
pub fn clean_header(header: &str) -> String {
    let without_refs = RE_REFERENCES.replace_all(header, "* =");
    RE_SEPARATOR.replace_all(&without_refs, "").into_owned()
}
