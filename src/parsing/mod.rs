//! Parsers for reading a pair of input sequences from disk.
//!
//! Two formats are supported:
//!
//! - **Sequence-pair text files**: first two lines are the sequences
//! - **FASTA files**: first two records are the sequences, plain or gzipped
//!
//! ## Example
//!
//! ```rust,no_run
//! use pairalign::parsing::read_sequence_pair;
//! use std::path::Path;
//!
//! let (seq1, seq2) = read_sequence_pair(Path::new("pair.txt")).unwrap();
//! ```

use std::path::Path;

use thiserror::Error;

use crate::core::sequence::{Sequence, SequenceError};

pub mod fasta;
pub mod pairfile;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Input must provide two sequences, found {0}")]
    TooFewSequences(usize),

    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SequenceError),
}

/// Read the sequence pair from `path`, dispatching on the file extension.
///
/// FASTA extensions (`.fa`, `.fasta`, `.fna`, optionally `.gz`) go through
/// the FASTA parser; everything else is treated as a two-line sequence-pair
/// text file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error of the
/// dispatched parser.
pub fn read_sequence_pair(path: &Path) -> Result<(Sequence, Sequence), ParseError> {
    if fasta::is_fasta_file(path) {
        fasta::parse_fasta_file(path)
    } else {
        pairfile::parse_pair_file(path)
    }
}
