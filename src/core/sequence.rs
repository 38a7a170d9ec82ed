use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::GAP;

/// Maximum accepted sequence length.
///
/// The aligner allocates two `(len1+1) x (len2+1)` grids, so input length
/// bounds memory quadratically. 10 kb keeps the worst case around 500 MB.
pub const MAX_SEQUENCE_LEN: usize = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence contains reserved gap symbol '-' at position {0}")]
    GapSymbol(usize),

    #[error("Sequence contains non-printable or non-ASCII byte 0x{byte:02x} at position {position}")]
    InvalidResidue { byte: u8, position: usize },

    #[error("Sequence length {0} exceeds maximum allowed (10000)")]
    TooLong(usize),
}

/// A validated input sequence of residue symbols.
///
/// Residues are arbitrary printable ASCII (amino-acid or nucleotide codes,
/// including ambiguity codes and `*`); whether a residue is scorable is the
/// scoring matrix's concern, not the sequence's. The gap symbol `-` is
/// reserved for aligned output and rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    /// Validate and wrap a residue string.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::GapSymbol` if the input contains `-`,
    /// `SequenceError::InvalidResidue` for bytes outside printable ASCII, or
    /// `SequenceError::TooLong` past [`MAX_SEQUENCE_LEN`].
    pub fn new(residues: impl AsRef<[u8]>) -> Result<Self, SequenceError> {
        let bytes = residues.as_ref();

        if bytes.len() > MAX_SEQUENCE_LEN {
            return Err(SequenceError::TooLong(bytes.len()));
        }

        for (position, &byte) in bytes.iter().enumerate() {
            if byte == GAP {
                return Err(SequenceError::GapSymbol(position));
            }
            if !byte.is_ascii_graphic() {
                return Err(SequenceError::InvalidResidue { byte, position });
            }
        }

        Ok(Self(bytes.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Validated ASCII, so lossy conversion never actually loses anything
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_residue_codes() {
        let seq = Sequence::new("MKWVTFISLLLF").unwrap();
        assert_eq!(seq.len(), 12);
        assert_eq!(seq.as_bytes(), b"MKWVTFISLLLF");
        // Ambiguity codes and stop are fine; scoring decides their value
        assert!(Sequence::new("ACGTN").is_ok());
        assert!(Sequence::new("MKX*").is_ok());
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let seq = Sequence::new("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_rejects_gap_symbol() {
        assert_eq!(Sequence::new("AC-GT").unwrap_err(), SequenceError::GapSymbol(2));
    }

    #[test]
    fn test_rejects_control_bytes() {
        assert_eq!(
            Sequence::new("AC\tGT").unwrap_err(),
            SequenceError::InvalidResidue { byte: b'\t', position: 2 }
        );
        assert!(Sequence::new("ACGT\n").is_err());
    }

    #[test]
    fn test_rejects_oversized_input() {
        let long = vec![b'A'; MAX_SEQUENCE_LEN + 1];
        assert_eq!(Sequence::new(&long).unwrap_err(), SequenceError::TooLong(MAX_SEQUENCE_LEN + 1));
    }
}
