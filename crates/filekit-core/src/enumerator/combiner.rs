//! Merging a directory's wildcard specs into one anchored regex.

use regex::Regex;

use super::glob::translate;
use super::registry::FileSpec;
use crate::error::{EnumerateError, EnumerateResult};

const ALTERNATIVE_SEPARATOR: &str = ")|(?:";

/// Build the pattern text for a sequence of specs.
///
/// A single spec yields `^p$`. Several yield `^(?:(?:p1)|(?:p2)|...)$`, so
/// the anchors apply to the whole alternation. Callers only pass non-empty
/// slices; an empty slice yields `^$`.
pub fn pattern_source(specs: &[FileSpec]) -> String {
    let fragments: Vec<String> = specs
        .iter()
        .map(|spec| translate(spec.file_name_pattern()))
        .collect();

    if fragments.len() > 1 {
        format!("^(?:(?:{}))$", fragments.join(ALTERNATIVE_SEPARATOR))
    } else {
        format!("^{}$", fragments.concat())
    }
}

/// Compile the combined matcher for one directory's specs.
pub fn combine(specs: &[FileSpec]) -> EnumerateResult<Regex> {
    let pattern = pattern_source(specs);
    tracing::debug!("combined file pattern: {}", pattern);
    Regex::new(&pattern).map_err(|source| EnumerateError::Pattern { pattern, source })
}
