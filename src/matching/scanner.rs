use serde::{Deserialize, Serialize};

use crate::matching::pattern::{RepeatPattern, RepeatUnit};

/// One occurrence of a repeat motif inside a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatMatch {
    /// Offset of the first matched base within the window
    pub offset: usize,

    /// Matched bases
    pub text: String,

    /// Number of matched bases
    pub length: usize,
}

impl RepeatMatch {
    /// Offset one past the last matched base
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Left-to-right iterator over non-overlapping matches.
///
/// Created by [`RepeatPattern::find_iter`].
pub struct RepeatMatches<'p, 'h> {
    pattern: &'p RepeatPattern,
    haystack: &'h [u8],
    pos: usize,
}

impl Iterator for RepeatMatches<'_, '_> {
    type Item = RepeatMatch;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.haystack.len() {
            let start = self.pos;
            match self.pattern.match_at(self.haystack, start) {
                // patterns never match empty, but never loop on one either
                Some(end) if end > start => {
                    self.pos = end;
                    let bases = &self.haystack[start..end];
                    return Some(RepeatMatch {
                        offset: start,
                        text: String::from_utf8_lossy(bases).into_owned(),
                        length: bases.len(),
                    });
                }
                _ => self.pos += 1,
            }
        }
        None
    }
}

impl RepeatPattern {
    /// Scan `haystack` for non-overlapping matches, first match position wins.
    ///
    /// Scanning resumes right after each match; on failure it advances one base.
    #[must_use]
    pub fn find_iter<'p, 'h>(&'p self, haystack: &'h [u8]) -> RepeatMatches<'p, 'h> {
        RepeatMatches {
            pattern: self,
            haystack,
            pos: 0,
        }
    }

    /// Collect every match in `haystack`
    #[must_use]
    pub fn find_all(&self, haystack: &[u8]) -> Vec<RepeatMatch> {
        self.find_iter(haystack).collect()
    }

    /// End offset of the match anchored at `pos`, if any
    #[must_use]
    pub fn match_at(&self, haystack: &[u8], pos: usize) -> Option<usize> {
        if pos > haystack.len() {
            return None;
        }
        match_units(self.units(), haystack, pos)
    }
}

/// Greedy match with backtracking: each unit takes as many bases as it can and
/// gives them back one at a time until the remaining units match.
fn match_units(units: &[RepeatUnit], haystack: &[u8], pos: usize) -> Option<usize> {
    let Some((unit, rest)) = units.split_first() else {
        return Some(pos);
    };

    let available = haystack[pos..]
        .iter()
        .take(unit.max)
        .take_while(|&&b| unit.class.contains(b))
        .count();
    if available < unit.min {
        return None;
    }

    (unit.min..=available)
        .rev()
        .find_map(|count| match_units(rest, haystack, pos + count))
}
