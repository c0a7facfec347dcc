//! Streaming FASTA reader using noodles.
//!
//! Yields [`SequenceRecord`]s one at a time in file order.
//! Supports both uncompressed and gzip/bgzip compressed files, and `-` for stdin.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

use crate::core::sequence::SequenceRecord;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Open a FASTA file (or stdin for `-`) for lazy, single-pass iteration.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open(path: &Path) -> Result<FastaRecords<Box<dyn BufRead>>, ParseError> {
    let reader: Box<dyn BufRead> = if is_stdin(path) {
        Box::new(BufReader::new(io::stdin()))
    } else if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(std::fs::File::open(path)?))
    };

    debug!("Reading FASTA records from {}", path.display());
    Ok(FastaRecords::new(reader))
}

/// Iterator over the records of a FASTA stream.
///
/// Yields an `InvalidFormat` error if the stream ends without a single record.
pub struct FastaRecords<R> {
    reader: fasta::io::Reader<R>,
    line: String,
    count: usize,
    done: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: fasta::io::Reader::new(inner),
            line: String::new(),
            count: 0,
            done: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<SequenceRecord>, ParseError> {
        self.line.clear();
        if self.reader.read_definition(&mut self.line)? == 0 {
            return Ok(None);
        }

        let line = self.line.trim_end();
        line.parse::<fasta::record::Definition>().map_err(|e| {
            ParseError::Noodles(format!("Failed to parse FASTA definition '{line}': {e}"))
        })?;

        // Report the full definition line as written, description included
        let id = line.strip_prefix('>').unwrap_or(line).to_string();

        let mut bases = Vec::new();
        self.reader.read_sequence(&mut bases)?;

        Ok(Some(SequenceRecord { id, bases }))
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<SequenceRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_record() {
            Ok(Some(record)) => {
                self.count += 1;
                Some(Ok(record))
            }
            Ok(None) => {
                self.done = true;
                if self.count == 0 {
                    Some(Err(ParseError::InvalidFormat(
                        "No sequences found in FASTA input".to_string(),
                    )))
                } else {
                    None
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read_all(content: &[u8]) -> Result<Vec<SequenceRecord>, ParseError> {
        FastaRecords::new(content).collect()
    }

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Assembly.FA")));

        assert!(!is_fasta_file(Path::new("test.fq")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_records_in_file_order() {
        let records = read_all(b">ctg1 len=12 circular\nACGTACGT\nacgt\n>ctg2\nNNGGGG\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "ctg1 len=12 circular");
        assert_eq!(records[0].bases, b"ACGTACGTacgt");
        assert_eq!(records[1].id, "ctg2");
        assert_eq!(records[1].bases, b"NNGGGG");
    }

    #[test]
    fn test_definition_whitespace_is_preserved() {
        let records = read_all(b">ctg1\tlen=5\nACGTA\n>ctg2  two spaces \nACGT\n").unwrap();

        assert_eq!(records[0].id, "ctg1\tlen=5");
        assert_eq!(records[1].id, "ctg2  two spaces");
    }

    #[test]
    fn test_empty_record_is_kept() {
        let records = read_all(b">empty\n>ctg\nACGT\n").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].bases.is_empty());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            read_all(b""),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_non_fasta_input_is_an_error() {
        assert!(read_all(b"@read1\nACGT\n+\nIIII\n").is_err());
    }

    #[test]
    fn test_open_uncompressed_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nCCCTAA\n>chr2\nTTAGGG\n").unwrap();
        temp.flush().unwrap();

        let records: Vec<_> = open(temp.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].bases, b"TTAGGG");
    }

    #[test]
    fn test_open_gzipped_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nCCCTAACCCTAA\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let records: Vec<_> = open(temp.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "chr1");
        assert_eq!(records[0].bases, b"CCCTAACCCTAA");
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            open(Path::new("/nonexistent/assembly.fa")),
            Err(ParseError::Io(_))
        ));
    }
}
