//! Core data types for sequences and gap penalties.
//!
//! Everything the alignment engine consumes is defined here: the validated
//! [`Sequence`](sequence::Sequence) input type, the
//! [`GapPenalties`](types::GapPenalties) pair, and the reserved gap symbol.

pub mod sequence;
pub mod types;
