//! Declarative repeat motifs: concatenated bounded repeats of base classes.
//!
//! Motifs are written in a small subset of regular-expression syntax:
//!
//! | Syntax   | Meaning                              |
//! |----------|--------------------------------------|
//! | `C`      | one base `C`                         |
//! | `[CT]`   | one base from the class `{C, T}`     |
//! | `{n}`    | previous atom exactly `n` times      |
//! | `{n,m}`  | previous atom `n` to `m` times       |
//! | `?`      | previous atom zero or one time       |
//!
//! Anything else (alternation, groups, `*`, `+`) is rejected.

use thiserror::Error;

/// Default motif scanned at the start of a contig (CCCTAA with slight variation)
pub const DEFAULT_FORWARD_PATTERN: &str = "C{2,4}T{1,2}A{1,3}";

/// Default motif scanned at the end of a contig (TTAGGG with slight variation)
pub const DEFAULT_REVERSE_PATTERN: &str = "T{1,3}A{1,2}G{2,4}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Empty repeat pattern")]
    Empty,

    #[error("Unterminated base class starting at position {0}")]
    UnterminatedClass(usize),

    #[error("Empty base class")]
    EmptyClass,

    #[error("Unterminated quantifier starting at position {0}")]
    UnterminatedQuantifier(usize),

    #[error("Invalid quantifier: {{{0}}}")]
    InvalidQuantifier(String),

    #[error("Invalid repeat range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("Unsupported character '{ch}' at position {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },

    #[error("Pattern '{0}' can match an empty sequence")]
    MatchesEmpty(String),
}

/// Set of accepted bases, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClass {
    bases: Vec<u8>,
}

impl BaseClass {
    /// Build a class from base letters (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `PatternError::EmptyClass` if `bases` is empty, or
    /// `PatternError::UnexpectedCharacter` for a non-letter.
    pub fn new(bases: &[u8]) -> Result<Self, PatternError> {
        if bases.is_empty() {
            return Err(PatternError::EmptyClass);
        }
        if let Some(pos) = bases.iter().position(|b| !b.is_ascii_alphabetic()) {
            return Err(PatternError::UnexpectedCharacter {
                ch: char::from(bases[pos]),
                pos,
            });
        }

        let mut bases: Vec<u8> = bases.iter().map(u8::to_ascii_uppercase).collect();
        bases.sort_unstable();
        bases.dedup();
        Ok(Self { bases })
    }

    fn single(base: u8) -> Self {
        Self {
            bases: vec![base.to_ascii_uppercase()],
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, base: u8) -> bool {
        self.bases.contains(&base)
    }
}

impl std::fmt::Display for BaseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = String::from_utf8_lossy(&self.bases);
        if self.bases.len() == 1 {
            write!(f, "{text}")
        } else {
            write!(f, "[{text}]")
        }
    }
}

/// One base class repeated between `min` and `max` times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatUnit {
    pub class: BaseClass,
    pub min: usize,
    pub max: usize,
}

impl RepeatUnit {
    /// # Errors
    ///
    /// Returns `PatternError::InvalidRange` if `min > max`.
    pub fn new(class: BaseClass, min: usize, max: usize) -> Result<Self, PatternError> {
        if min > max {
            return Err(PatternError::InvalidRange { min, max });
        }
        Ok(Self { class, min, max })
    }
}

impl std::fmt::Display for RepeatUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class)?;
        match (self.min, self.max) {
            (1, 1) => Ok(()),
            (0, 1) => write!(f, "?"),
            (min, max) if min == max => write!(f, "{{{min}}}"),
            (min, max) => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// Ordered, gap-free concatenation of repeat units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatPattern {
    units: Vec<RepeatUnit>,
}

impl RepeatPattern {
    /// Build a pattern from units.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::Empty` for no units, or `PatternError::MatchesEmpty`
    /// if every unit may repeat zero times.
    pub fn new(units: Vec<RepeatUnit>) -> Result<Self, PatternError> {
        if units.is_empty() {
            return Err(PatternError::Empty);
        }
        let pattern = Self { units };
        if pattern.min_length() == 0 {
            return Err(PatternError::MatchesEmpty(pattern.to_string()));
        }
        Ok(pattern)
    }

    /// Parse pattern text such as `C{2,4}T{1,2}A{1,3}`.
    ///
    /// # Errors
    ///
    /// Returns a `PatternError` describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let bytes = text.trim().as_bytes();
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut units = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let (class, next) = parse_atom(bytes, pos)?;
            let (min, max, next) = parse_quantifier(bytes, next)?;
            units.push(RepeatUnit::new(class, min, max)?);
            pos = next;
        }

        Self::new(units)
    }

    /// Canonical forward telomeric motif
    #[must_use]
    pub fn default_forward() -> Self {
        Self {
            units: vec![
                Self::unit(b'C', 2, 4),
                Self::unit(b'T', 1, 2),
                Self::unit(b'A', 1, 3),
            ],
        }
    }

    /// Canonical reverse telomeric motif
    #[must_use]
    pub fn default_reverse() -> Self {
        Self {
            units: vec![
                Self::unit(b'T', 1, 3),
                Self::unit(b'A', 1, 2),
                Self::unit(b'G', 2, 4),
            ],
        }
    }

    fn unit(base: u8, min: usize, max: usize) -> RepeatUnit {
        RepeatUnit {
            class: BaseClass::single(base),
            min,
            max,
        }
    }

    #[must_use]
    pub fn units(&self) -> &[RepeatUnit] {
        &self.units
    }

    /// Shortest possible match
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.units.iter().map(|u| u.min).sum()
    }

    /// Longest possible match
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.units.iter().map(|u| u.max).sum()
    }
}

impl std::fmt::Display for RepeatPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for unit in &self.units {
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RepeatPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_atom(bytes: &[u8], pos: usize) -> Result<(BaseClass, usize), PatternError> {
    match bytes[pos] {
        b'[' => {
            let close = bytes[pos + 1..]
                .iter()
                .position(|&b| b == b']')
                .map(|i| pos + 1 + i)
                .ok_or(PatternError::UnterminatedClass(pos))?;
            let class = BaseClass::new(&bytes[pos + 1..close]).map_err(|e| match e {
                PatternError::UnexpectedCharacter { ch, pos: offset } => {
                    PatternError::UnexpectedCharacter {
                        ch,
                        pos: pos + 1 + offset,
                    }
                }
                other => other,
            })?;
            Ok((class, close + 1))
        }
        b if b.is_ascii_alphabetic() => Ok((BaseClass::single(b), pos + 1)),
        b => Err(PatternError::UnexpectedCharacter {
            ch: char::from(b),
            pos,
        }),
    }
}

fn parse_quantifier(bytes: &[u8], pos: usize) -> Result<(usize, usize, usize), PatternError> {
    match bytes.get(pos) {
        Some(b'?') => Ok((0, 1, pos + 1)),
        Some(b'{') => {
            let close = bytes[pos + 1..]
                .iter()
                .position(|&b| b == b'}')
                .map(|i| pos + 1 + i)
                .ok_or(PatternError::UnterminatedQuantifier(pos))?;
            let inner = String::from_utf8_lossy(&bytes[pos + 1..close]).into_owned();
            let (min, max) = parse_bounds(&inner)?;
            Ok((min, max, close + 1))
        }
        _ => Ok((1, 1, pos)),
    }
}

fn parse_bounds(inner: &str) -> Result<(usize, usize), PatternError> {
    let invalid = || PatternError::InvalidQuantifier(inner.to_string());
    let number = |s: &str| s.trim().parse::<usize>().map_err(|_| invalid());

    match inner.split(',').collect::<Vec<_>>().as_slice() {
        [exact] => {
            let n = number(*exact)?;
            Ok((n, n))
        }
        [min, max] => Ok((number(*min)?, number(*max)?)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_patterns() {
        let forward = RepeatPattern::parse(DEFAULT_FORWARD_PATTERN).unwrap();
        let reverse = RepeatPattern::parse(DEFAULT_REVERSE_PATTERN).unwrap();

        assert_eq!(forward, RepeatPattern::default_forward());
        assert_eq!(reverse, RepeatPattern::default_reverse());
        assert_eq!(forward.min_length(), 4);
        assert_eq!(forward.max_length(), 9);
    }

    #[test]
    fn test_display_round_trips_defaults() {
        assert_eq!(
            RepeatPattern::default_forward().to_string(),
            DEFAULT_FORWARD_PATTERN
        );
        assert_eq!(
            RepeatPattern::default_reverse().to_string(),
            DEFAULT_REVERSE_PATTERN
        );
    }

    #[test]
    fn test_parse_classes_and_quantifiers() {
        let pattern: RepeatPattern = "[tc]{2}a?G".parse().unwrap();
        let units = pattern.units();

        assert_eq!(units.len(), 3);
        assert!(units[0].class.contains(b'C'));
        assert!(units[0].class.contains(b'T'));
        assert!(!units[0].class.contains(b'A'));
        assert_eq!((units[0].min, units[0].max), (2, 2));
        assert_eq!((units[1].min, units[1].max), (0, 1));
        assert_eq!((units[2].min, units[2].max), (1, 1));
        assert_eq!(pattern.to_string(), "[CT]{2}A?G");
    }

    #[test]
    fn test_parse_lowercase_is_uppercased() {
        let pattern = RepeatPattern::parse("t{1,3}a{1,2}g{2,4}").unwrap();
        assert_eq!(pattern, RepeatPattern::default_reverse());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(RepeatPattern::parse("  "), Err(PatternError::Empty));
        assert_eq!(
            RepeatPattern::parse("C[AT"),
            Err(PatternError::UnterminatedClass(1))
        );
        assert_eq!(RepeatPattern::parse("[]"), Err(PatternError::EmptyClass));
        assert_eq!(
            RepeatPattern::parse("C{2,4"),
            Err(PatternError::UnterminatedQuantifier(1))
        );
        assert_eq!(
            RepeatPattern::parse("C{4,2}"),
            Err(PatternError::InvalidRange { min: 4, max: 2 })
        );
        assert_eq!(
            RepeatPattern::parse("C{x}"),
            Err(PatternError::InvalidQuantifier("x".to_string()))
        );
        assert_eq!(
            RepeatPattern::parse("C{1,2,3}"),
            Err(PatternError::InvalidQuantifier("1,2,3".to_string()))
        );
        assert_eq!(
            RepeatPattern::parse("C+"),
            Err(PatternError::UnexpectedCharacter { ch: '+', pos: 1 })
        );
        assert_eq!(
            RepeatPattern::parse("[C*]"),
            Err(PatternError::UnexpectedCharacter { ch: '*', pos: 2 })
        );
        assert_eq!(
            RepeatPattern::parse("{2}"),
            Err(PatternError::UnexpectedCharacter { ch: '{', pos: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_empty_matching_pattern() {
        assert!(matches!(
            RepeatPattern::parse("C?T{0,3}"),
            Err(PatternError::MatchesEmpty(_))
        ));
    }

    #[test]
    fn test_new_rejects_no_units() {
        assert_eq!(RepeatPattern::new(Vec::new()), Err(PatternError::Empty));
    }
}
