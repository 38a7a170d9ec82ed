//! Parser for FASTA files using noodles.
//!
//! The first two records of the file become the sequence pair. Supports both
//! uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use tracing::warn;

use crate::core::sequence::Sequence;
use crate::parsing::ParseError;

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

/// Parse a FASTA file and extract the first two records as the sequence pair.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, `ParseError::TooFewSequences` if the file holds fewer
/// than two records, or `ParseError::Sequence` if a record fails residue
/// validation.
pub fn parse_fasta_file(path: &Path) -> Result<(Sequence, Sequence), ParseError> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let decoder = GzDecoder::new(file);
        let reader = BufReader::new(decoder);
        let mut fasta_reader = fasta::io::Reader::new(reader);
        parse_fasta_reader(&mut fasta_reader)
    } else {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let mut fasta_reader = fasta::io::Reader::new(reader);
        parse_fasta_reader(&mut fasta_reader)
    }
}

/// Parse the pair from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<(Sequence, Sequence), ParseError> {
    let mut sequences = Vec::with_capacity(2);
    let mut extra_records = 0usize;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if sequences.len() == 2 {
            extra_records += 1;
            continue;
        }

        sequences.push(Sequence::new(record.sequence().as_ref())?);
    }

    if extra_records > 0 {
        warn!(extra_records, "FASTA file has more than two records, ignoring the rest");
    }

    let found = sequences.len();
    let mut iter = sequences.into_iter();
    match (iter.next(), iter.next()) {
        (Some(seq1), Some(seq2)) => Ok((seq1, seq2)),
        _ => Err(ParseError::TooFewSequences(found)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Pair.FA")));

        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test")));
    }

    #[test]
    fn test_parse_fasta_pair() {
        let fasta_content = b">seq1 description\nACGTACGT\nACGT\n>seq2\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let (seq1, seq2) = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(seq1.as_bytes(), b"ACGTACGTACGT"); // multi-line record joined
        assert_eq!(seq2.as_bytes(), b"GGGG");
    }

    #[test]
    fn test_parse_fasta_single_record() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">only\nACGT\n").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(matches!(result, Err(ParseError::TooFewSequences(1))));
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(matches!(result, Err(ParseError::TooFewSequences(0))));
    }

    #[test]
    fn test_extra_records_ignored() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">a\nAC\n>b\nGT\n>c\nTT\n").unwrap();
        temp.flush().unwrap();

        let (seq1, seq2) = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(seq1.as_bytes(), b"AC");
        assert_eq!(seq2.as_bytes(), b"GT");
    }
}
