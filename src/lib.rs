//! # pairalign
//!
//! A library for global pairwise sequence alignment with affine gap
//! penalties.
//!
//! Given two sequences, a substitution scoring scheme, and a pair of gap
//! penalties, `pairalign` computes an optimal end-to-end alignment
//! (Needleman-Wunsch family with Gotoh-style affine gaps) and reports the
//! aligned sequences, a per-column match track, the alignment score, and
//! percent identity.
//!
//! ## Features
//!
//! - **Affine gaps**: opening a gap costs more than extending one
//! - **Named matrices**: embedded NCBI BLOSUM45/62/80 and PAM250 tables
//! - **Pluggable scoring**: any [`SubstitutionScorer`] works, including
//!   simple match/mismatch schemes
//! - **Deterministic output**: documented tie-break order, reproducible
//!   alignments
//!
//! ## Example
//!
//! ```rust
//! use pairalign::{global_align, GapPenalties, Sequence, SubstitutionMatrix};
//!
//! let seq1 = Sequence::new("SEQ").unwrap();
//! let seq2 = Sequence::new("SEQ").unwrap();
//! let matrix = SubstitutionMatrix::blosum62();
//!
//! let alignment = global_align(&seq1, &seq2, &matrix, GapPenalties::new(-10, -1));
//!
//! assert_eq!(alignment.aligned1, "SEQ");
//! assert_eq!(alignment.match_track, "|||");
//! // S:S(4) + E:E(5) + Q:Q(5)
//! assert_eq!(alignment.score, 14);
//! assert_eq!(alignment.identity_display(), "3/3 (100.0%)");
//! ```
//!
//! ## Modules
//!
//! - [`align`]: the dynamic-programming engine and alignment result
//! - [`core`]: sequence and gap-penalty types
//! - [`scoring`]: substitution matrices and the scorer trait
//! - [`parsing`]: input readers for sequence-pair and FASTA files
//! - [`cli`]: command-line interface implementation

pub mod align;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod scoring;

// Re-export commonly used types for convenience
pub use crate::align::engine::global_align;
pub use crate::align::result::PairwiseAlignment;
pub use crate::core::sequence::{Sequence, SequenceError};
pub use crate::core::types::{GapPenalties, GAP};
pub use crate::scoring::{MatchMismatch, SubstitutionMatrix, SubstitutionScorer};
