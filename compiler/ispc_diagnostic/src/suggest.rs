//! "Did You Mean?" Suggestions
//!
//! When a user references an unknown identifier, the front end hands the
//! misspelled name and every name in scope to [`suggest`], which returns the
//! closest candidates by Levenshtein edit distance.
//!
//! # Design
//!
//! Candidates are scanned once, keeping the lowest distance tier seen so far
//! within `max_delta`; that tier is returned whole, in input order. Two names
//! one edit away are both offered; a name two edits away is never offered
//! next to one that is a single edit away. Memory does not grow with
//! `max_delta`.
//!
//! # Example
//!
//! ```
//! use ispc_diagnostic::suggest;
//!
//! let in_scope = ["width", "height", "depth"];
//! assert_eq!(suggest("widht", in_scope), vec!["width"]);
//! ```

use std::cmp::Ordering;

/// Largest edit distance [`suggest`] will consider a match.
pub const DEFAULT_MAX_DELTA: usize = 2;

/// Levenshtein edit distance between `a` and `b`, bounded by `max_dist`.
///
/// Insertions, deletions and substitutions each cost 1, counted over `char`s.
///
/// With a non-zero `max_dist` the result is exact up to `max_dist`; anything
/// farther is reported as exactly `max_dist + 1`, and the computation stops as
/// soon as a whole row of the table exceeds the bound. A `max_dist` of 0
/// always computes the exact distance.
///
/// ```
/// use ispc_diagnostic::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting", 0), 3);
/// assert_eq!(edit_distance("kitten", "sitting", 1), 2);
/// ```
pub fn edit_distance(a: &str, b: &str, max_dist: usize) -> usize {
    let b_len = b.chars().count();

    // Two-row optimization instead of the full matrix
    let mut previous: Vec<usize> = (0..=b_len).collect();
    let mut current: Vec<usize> = vec![0; b_len + 1];

    for (y, a_char) in a.chars().enumerate() {
        current[0] = y + 1;
        let mut row_best = current[0];

        for (x, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[x + 1] = (previous[x] + cost) // substitution
                .min(current[x] + 1) // insertion
                .min(previous[x + 1] + 1); // deletion
            row_best = row_best.min(current[x + 1]);
        }

        // Row minima never decrease, so the final distance is out of bounds too.
        if max_dist != 0 && row_best > max_dist {
            return max_dist.saturating_add(1);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[b_len];
    if max_dist != 0 && distance > max_dist {
        max_dist.saturating_add(1)
    } else {
        distance
    }
}

/// Candidates closest to `query`, within [`DEFAULT_MAX_DELTA`] edits.
pub fn suggest<'a>(query: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    suggest_within(query, candidates, DEFAULT_MAX_DELTA)
}

/// Candidates closest to `query`, within `max_delta` edits.
///
/// Returns every candidate in the lowest non-empty distance tier, in input
/// order, or an empty vector when nothing is close enough.
pub fn suggest_within<'a>(
    query: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    max_delta: usize,
) -> Vec<&'a str> {
    let mut best = max_delta;
    let mut tier = Vec::new();

    for candidate in candidates {
        // Anything farther than the current tier is clamped to best + 1.
        let distance = edit_distance(query, candidate, best.saturating_add(1));
        match distance.cmp(&best) {
            Ordering::Less => {
                best = distance;
                tier.clear();
                tier.push(candidate);
            }
            Ordering::Equal => tier.push(candidate),
            Ordering::Greater => {}
        }
    }

    tier
}

/// Render a suggestion tier for appending to a message body.
///
/// Returns `None` for an empty tier.
pub fn did_you_mean(tier: &[&str]) -> Option<String> {
    match tier {
        [] => None,
        [only] => Some(format!("Did you mean \"{only}\"?")),
        many => {
            let quoted: Vec<String> = many.iter().map(|name| format!("\"{name}\"")).collect();
            Some(format!("Did you mean one of {}?", quoted.join(", ")))
        }
    }
}
