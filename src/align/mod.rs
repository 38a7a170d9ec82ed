//! Global pairwise alignment with affine gap penalties.
//!
//! The engine is the Needleman-Wunsch family recurrence with Gotoh-style
//! affine gaps in a simplified two-grid form: one score grid and one
//! traceback grid, filled in a single synchronized pass. See
//! [`engine::global_align`] for the entry point and [`result::PairwiseAlignment`]
//! for what comes back.

pub mod engine;
pub mod result;
