use serde::{Deserialize, Serialize};

/// Ambiguous base call, trimmed from both ends of every sequence
pub const AMBIGUOUS_BASE: u8 = b'N';

/// A single FASTA record as handed over by the sequence reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Full definition line (name and description)
    pub id: String,

    /// Raw bases, any case
    pub bases: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, bases: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
        }
    }
}

/// Uppercased sequence with terminal `N` runs removed.
///
/// Interior ambiguous bases are kept so that window positions still line up
/// with the assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSequence {
    bases: Vec<u8>,
}

impl NormalizedSequence {
    /// Uppercase `raw`, then strip leading and trailing `N`s.
    ///
    /// Stripping happens after uppercasing so `n` and `N` are treated alike.
    #[must_use]
    pub fn new(raw: &[u8]) -> Self {
        let upper: Vec<u8> = raw.iter().map(u8::to_ascii_uppercase).collect();

        let start = upper
            .iter()
            .position(|&b| b != AMBIGUOUS_BASE)
            .unwrap_or(upper.len());
        let end = upper
            .iter()
            .rposition(|&b| b != AMBIGUOUS_BASE)
            .map_or(start, |i| i + 1);

        Self {
            bases: upper[start..end].to_vec(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// First `n` bases, or the whole sequence if it is shorter
    #[must_use]
    pub fn leading(&self, n: usize) -> Window<'_> {
        let len = n.min(self.bases.len());
        Window {
            bases: &self.bases[..len],
            nominal_length: n,
        }
    }

    /// Last `n` bases, or the whole sequence if it is shorter
    #[must_use]
    pub fn trailing(&self, n: usize) -> Window<'_> {
        let start = self.bases.len().saturating_sub(n);
        Window {
            bases: &self.bases[start..],
            nominal_length: n,
        }
    }

    /// Window over the given terminus
    #[must_use]
    pub fn window(&self, terminus: Terminus, n: usize) -> Window<'_> {
        match terminus {
            Terminus::Start => self.leading(n),
            Terminus::End => self.trailing(n),
        }
    }
}

/// Which end of a contig a window was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminus {
    /// 5' end, scanned with the forward motif
    Start,
    /// 3' end, scanned with the reverse motif
    End,
}

impl std::fmt::Display for Terminus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Terminal slice of a normalized sequence.
///
/// `bases.len() == min(nominal_length, sequence length)`. For sequences shorter
/// than the configured length the start and end windows are both the whole
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    bases: &'a [u8],
    nominal_length: usize,
}

impl<'a> Window<'a> {
    #[must_use]
    pub fn bases(&self) -> &'a [u8] {
        self.bases
    }

    /// Configured window length, which may exceed the actual slice
    #[must_use]
    pub fn nominal_length(&self) -> usize {
        self.nominal_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.bases.len() < self.nominal_length
    }

    /// Window contents as text (sequences are ASCII after normalization)
    #[must_use]
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.bases).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_strips_terminal_ns() {
        let seq = NormalizedSequence::new(b"nnNacgtNNacgtNnn");
        assert_eq!(seq.as_bytes(), b"ACGTNNACGT");
    }

    #[test]
    fn test_normalize_keeps_interior_ns() {
        let seq = NormalizedSequence::new(b"ACnnGT");
        assert_eq!(seq.as_bytes(), b"ACNNGT");
    }

    #[test]
    fn test_normalize_empty_and_all_n() {
        assert!(NormalizedSequence::new(b"").is_empty());
        assert!(NormalizedSequence::new(b"NNnnN").is_empty());
    }

    #[test]
    fn test_normalize_never_grows() {
        for raw in [&b"acgt"[..], b"NNN", b"NaN", b"tTaGgG", b""] {
            let seq = NormalizedSequence::new(raw);
            assert!(seq.len() <= raw.len());
            assert!(!seq.as_bytes().starts_with(b"N"));
            assert!(!seq.as_bytes().ends_with(b"N"));
        }
    }

    #[test]
    fn test_windows_on_long_sequence() {
        let seq = NormalizedSequence::new(b"CCCTAAGGGGGGGGTTAGGG");
        assert_eq!(seq.leading(6).bases(), b"CCCTAA");
        assert_eq!(seq.trailing(6).bases(), b"TTAGGG");
        assert_eq!(seq.leading(6).nominal_length(), 6);
        assert!(!seq.trailing(6).is_truncated());
    }

    #[test]
    fn test_windows_on_short_sequence_cover_everything() {
        let seq = NormalizedSequence::new(b"NNACGTNN");
        let start = seq.leading(100);
        let end = seq.trailing(100);

        assert_eq!(start.bases(), b"ACGT");
        assert_eq!(end.bases(), b"ACGT");
        assert_eq!(start, end);
        assert_eq!(start.nominal_length(), 100);
        assert!(start.is_truncated());
    }

    #[test]
    fn test_window_exact_length() {
        let seq = NormalizedSequence::new(b"ACGT");
        assert_eq!(seq.window(Terminus::Start, 4).bases(), b"ACGT");
        assert_eq!(seq.window(Terminus::End, 4).bases(), b"ACGT");
    }

    #[test]
    fn test_windows_on_empty_sequence() {
        let seq = NormalizedSequence::new(b"NNNN");
        assert!(seq.leading(10).is_empty());
        assert!(seq.trailing(10).is_empty());
    }
}
