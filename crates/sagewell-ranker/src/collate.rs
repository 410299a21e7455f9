//! Title collation.
//!
//! Primary level compares text with diacritics stripped and case folded;
//! ties fall back to raw code-point order. Han characters carry no
//! decomposition, so they order by code point as in the CLDR root collation.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary collation key for `value`.
pub fn sort_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}
