//! Parser for two-line sequence-pair text files.
//!
//! The whole format: line one is sequence 1, line two is sequence 2, each
//! trimmed of surrounding whitespace. Further lines are ignored. An empty
//! second line is a valid empty sequence; a missing one is an error.

use std::path::Path;

use crate::core::sequence::Sequence;
use crate::parsing::ParseError;

/// Parse a sequence-pair file from disk.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::TooFewSequences` if it has fewer than two lines, or
/// `ParseError::Sequence` if a line fails residue validation.
pub fn parse_pair_file(path: &Path) -> Result<(Sequence, Sequence), ParseError> {
    let text = std::fs::read_to_string(path)?;
    parse_pair_text(&text)
}

/// Parse a sequence pair from raw text (first two lines).
///
/// # Errors
///
/// Returns `ParseError::TooFewSequences` if the text has fewer than two
/// lines, or `ParseError::Sequence` if a line fails residue validation.
pub fn parse_pair_text(text: &str) -> Result<(Sequence, Sequence), ParseError> {
    let mut lines = text.lines();

    let first = lines.next().ok_or(ParseError::TooFewSequences(0))?;
    let second = lines.next().ok_or(ParseError::TooFewSequences(1))?;

    let seq1 = Sequence::new(first.trim())?;
    let seq2 = Sequence::new(second.trim())?;

    Ok((seq1, seq2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_pair_text() {
        let (seq1, seq2) = parse_pair_text("MKWVTF\nMKYVTF\n").unwrap();
        assert_eq!(seq1.as_bytes(), b"MKWVTF");
        assert_eq!(seq2.as_bytes(), b"MKYVTF");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let (seq1, seq2) = parse_pair_text("  ACGT \r\nTTGA\r\n").unwrap();
        assert_eq!(seq1.as_bytes(), b"ACGT");
        assert_eq!(seq2.as_bytes(), b"TTGA");
    }

    #[test]
    fn test_empty_second_line_is_empty_sequence() {
        let (seq1, seq2) = parse_pair_text("ACGT\n\n").unwrap();
        assert_eq!(seq1.as_bytes(), b"ACGT");
        assert!(seq2.is_empty());
    }

    #[test]
    fn test_extra_lines_ignored() {
        let (seq1, seq2) = parse_pair_text("AC\nGT\nignored\n").unwrap();
        assert_eq!(seq1.as_bytes(), b"AC");
        assert_eq!(seq2.as_bytes(), b"GT");
    }

    #[test]
    fn test_too_few_lines() {
        assert!(matches!(parse_pair_text(""), Err(ParseError::TooFewSequences(0))));
        assert!(matches!(parse_pair_text("ACGT\n"), Err(ParseError::TooFewSequences(1))));
    }

    #[test]
    fn test_gap_symbol_rejected() {
        let result = parse_pair_text("AC-GT\nACGT\n");
        assert!(matches!(result, Err(ParseError::Sequence(_))));
    }

    #[test]
    fn test_parse_pair_file() {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        temp.write_all(b"HEAGAWGHEE\nPAWHEAE\n").unwrap();
        temp.flush().unwrap();

        let (seq1, seq2) = parse_pair_file(temp.path()).unwrap();
        assert_eq!(seq1.len(), 10);
        assert_eq!(seq2.len(), 7);
    }

    #[test]
    fn test_missing_file() {
        let result = parse_pair_file(Path::new("/nonexistent/pair.txt"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
