//! Filename wildcard to regex translation.
//!
//! Only `*` (any run of characters, possibly empty) and `?` (exactly one
//! character) are wildcards. Every other character matches itself.

/// Characters that must be escaped to be taken literally by the regex engine.
///
/// Backslash comes first so the escapes added for later characters are not
/// themselves escaped again.
const REGEX_METACHARACTERS: &[char] = &[
    '\\', '.', '[', ']', '{', '}', '(', ')', '+', '|', '^', '$',
];

/// Returns true if the file name contains a `*` or `?` wildcard.
pub fn has_wildcard(file_name: &str) -> bool {
    file_name.contains(['*', '?'])
}

/// Translate a filename wildcard into an unanchored regex fragment.
///
/// Anchoring is left to the caller (see [`super::combiner::combine`]).
pub fn translate(file_name: &str) -> String {
    let mut pattern = file_name.to_string();
    for &meta in REGEX_METACHARACTERS {
        let mut escaped = String::with_capacity(2);
        escaped.push('\\');
        escaped.push(meta);
        pattern = pattern.replace(meta, &escaped);
    }
    pattern.replace('*', ".*").replace('?', ".")
}
