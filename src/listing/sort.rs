//! Display-name ordering.
//!
//! Names are compared on their letters and digits only: punctuation,
//! whitespace and symbols are skipped, letters are case-folded, and runs of
//! ASCII digits compare by numeric value. Names that tie on that key are
//! ordered by their full lowercase form. Anything still equal (names that
//! differ only in case) keeps its enumeration order, so callers must use a
//! stable sort.

use std::cmp::Ordering;

/// One comparable unit of a name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    /// A run of ASCII digits: (significant digit count, digits without leading zeros)
    Number(usize, String),
    Char(char),
}

/// Precomputed sort key for a display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    segments: Vec<Segment>,
    folded: String,
}

impl SortKey {
    pub fn new(name: &str) -> Self {
        Self {
            segments: segments(name),
            folded: name.to_lowercase(),
        }
    }
}

fn segments(name: &str) -> Vec<Segment> {
    let mut out = Vec::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut digits = String::from(c);
            while let Some(&next) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                digits.push(next);
                chars.next();
            }
            let trimmed = digits.trim_start_matches('0');
            out.push(Segment::Number(trimmed.len(), trimmed.to_string()));
        } else if c.is_alphanumeric() {
            out.extend(c.to_lowercase().map(Segment::Char));
        }
    }

    out
}

/// Compare two display names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}

/// Stable sort of `items` by the display name returned from `name`.
pub fn sort_by_display_name<T, F>(items: &mut Vec<T>, name: F)
where
    F: Fn(&T) -> &str,
{
    let mut keyed: Vec<(SortKey, T)> = items
        .drain(..)
        .map(|item| (SortKey::new(name(&item)), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}
