//! Substitution scoring for pairwise alignment.
//!
//! The alignment engine is generic over [`SubstitutionScorer`], a lookup from
//! an ordered residue pair to an integer score. Two implementations are
//! provided: [`SubstitutionMatrix`] backed by embedded NCBI tables (BLOSUM
//! variants and PAM250), and [`MatchMismatch`] for simple nucleotide-style
//! scoring.

use serde::Serialize;

mod tables;

use tables::AA_DIM;

/// Lookup from an ordered pair of residues to a substitution score.
///
/// Implementations own the treatment of unrecognized residues; the alignment
/// engine assumes every queried pair resolves to some integer.
pub trait SubstitutionScorer {
    fn score(&self, a: u8, b: u8) -> i32;
}

/// Maps an amino acid letter to a 0-based index in substitution matrices.
///
/// Standard 20 amino acids + B (Asx), Z (Glx), X (unknown), * (stop).
/// Returns `None` for unrecognized characters.
fn aa_to_index(aa: u8) -> Option<usize> {
    match aa.to_ascii_uppercase() {
        b'A' => Some(0),
        b'R' => Some(1),
        b'N' => Some(2),
        b'D' => Some(3),
        b'C' => Some(4),
        b'Q' => Some(5),
        b'E' => Some(6),
        b'G' => Some(7),
        b'H' => Some(8),
        b'I' => Some(9),
        b'L' => Some(10),
        b'K' => Some(11),
        b'M' => Some(12),
        b'F' => Some(13),
        b'P' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'W' => Some(17),
        b'Y' => Some(18),
        b'V' => Some(19),
        b'B' => Some(20),
        b'Z' => Some(21),
        b'X' => Some(22),
        b'*' => Some(23),
        _ => None,
    }
}

/// An amino acid substitution matrix with a named 24x24 NCBI score table.
///
/// Residue lookup is case-insensitive. Pairs involving a residue outside the
/// 24-symbol alphabet score `default_score` (0 unless overridden), so the
/// matrix is total over arbitrary input.
#[derive(Debug, Clone, Serialize)]
pub struct SubstitutionMatrix {
    name: &'static str,
    #[serde(skip)]
    scores: &'static [i32; AA_DIM * AA_DIM],
    /// Score for pairs with an unrecognized residue
    pub default_score: i32,
    /// Conventional gap-open penalty used with this matrix
    pub recommended_gap_open: i32,
    /// Conventional gap-extend penalty used with this matrix
    pub recommended_gap_extend: i32,
}

impl SubstitutionMatrix {
    /// BLOSUM62 substitution matrix. Conventional gaps: -11 open, -1 extend.
    pub fn blosum62() -> Self {
        Self {
            name: "BLOSUM62",
            scores: &tables::BLOSUM62,
            default_score: 0,
            recommended_gap_open: -11,
            recommended_gap_extend: -1,
        }
    }

    /// BLOSUM45 substitution matrix. Conventional gaps: -13 open, -3 extend.
    pub fn blosum45() -> Self {
        Self {
            name: "BLOSUM45",
            scores: &tables::BLOSUM45,
            default_score: 0,
            recommended_gap_open: -13,
            recommended_gap_extend: -3,
        }
    }

    /// BLOSUM80 substitution matrix. Conventional gaps: -10 open, -1 extend.
    pub fn blosum80() -> Self {
        Self {
            name: "BLOSUM80",
            scores: &tables::BLOSUM80,
            default_score: 0,
            recommended_gap_open: -10,
            recommended_gap_extend: -1,
        }
    }

    /// PAM250 substitution matrix. Conventional gaps: -11 open, -1 extend.
    pub fn pam250() -> Self {
        Self {
            name: "PAM250",
            scores: &tables::PAM250,
            default_score: 0,
            recommended_gap_open: -11,
            recommended_gap_extend: -1,
        }
    }

    /// All built-in matrices, in listing order.
    pub fn all() -> Vec<Self> {
        vec![Self::blosum45(), Self::blosum62(), Self::blosum80(), Self::pam250()]
    }

    /// Look up a built-in matrix by name.
    ///
    /// Accepts the full name in any case (`"BLOSUM62"`, `"blosum62"`,
    /// `"pam250"`) or a bare BLOSUM number (`"62"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BLOSUM45" | "45" => Some(Self::blosum45()),
            "BLOSUM62" | "62" => Some(Self::blosum62()),
            "BLOSUM80" | "80" => Some(Self::blosum80()),
            "PAM250" => Some(Self::pam250()),
            _ => None,
        }
    }

    /// Override the fallback score for unrecognized residue pairs.
    #[must_use]
    pub fn with_default(mut self, score: i32) -> Self {
        self.default_score = score;
        self
    }

    /// Matrix name (e.g. "BLOSUM62").
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl SubstitutionScorer for SubstitutionMatrix {
    fn score(&self, a: u8, b: u8) -> i32 {
        match (aa_to_index(a), aa_to_index(b)) {
            (Some(i), Some(j)) => self.scores[i * AA_DIM + j],
            _ => self.default_score,
        }
    }
}

/// Uniform match/mismatch scoring, suitable for nucleotide alignments.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchMismatch {
    pub match_score: i32,
    pub mismatch_score: i32,
}

impl MatchMismatch {
    pub fn new(match_score: i32, mismatch_score: i32) -> Self {
        Self { match_score, mismatch_score }
    }
}

impl SubstitutionScorer for MatchMismatch {
    fn score(&self, a: u8, b: u8) -> i32 {
        if a.to_ascii_uppercase() == b.to_ascii_uppercase() {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blosum62_diagonal() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(b'A', b'A'), 4);
        assert_eq!(m.score(b'W', b'W'), 11);
        assert_eq!(m.score(b'R', b'R'), 5);
        // Case insensitive
        assert_eq!(m.score(b'a', b'a'), 4);
    }

    #[test]
    fn blosum62_off_diagonal_symmetric() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(b'A', b'R'), -1);
        assert_eq!(m.score(b'R', b'A'), -1);
        assert_eq!(m.score(b'K', b'W'), -3);
    }

    #[test]
    fn blosum45_and_blosum80_diagonal() {
        let m45 = SubstitutionMatrix::blosum45();
        assert_eq!(m45.score(b'A', b'A'), 5);
        assert_eq!(m45.score(b'W', b'W'), 15);

        let m80 = SubstitutionMatrix::blosum80();
        assert_eq!(m80.score(b'A', b'A'), 7);
        assert_eq!(m80.score(b'W', b'W'), 16);
    }

    #[test]
    fn pam250_diagonal() {
        let m = SubstitutionMatrix::pam250();
        assert_eq!(m.score(b'A', b'A'), 2);
        assert_eq!(m.score(b'W', b'W'), 17);
    }

    #[test]
    fn unrecognized_residue_scores_default() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(b'?', b'A'), 0);
        assert_eq!(m.score(b'A', b'1'), 0);

        let m = m.with_default(-4);
        assert_eq!(m.score(b'?', b'A'), -4);
    }

    #[test]
    fn from_name_variants() {
        assert_eq!(SubstitutionMatrix::from_name("BLOSUM62").unwrap().name(), "BLOSUM62");
        assert_eq!(SubstitutionMatrix::from_name("blosum62").unwrap().name(), "BLOSUM62");
        assert_eq!(SubstitutionMatrix::from_name("62").unwrap().name(), "BLOSUM62");
        assert_eq!(SubstitutionMatrix::from_name("45").unwrap().name(), "BLOSUM45");
        assert_eq!(SubstitutionMatrix::from_name("pam250").unwrap().name(), "PAM250");
        assert!(SubstitutionMatrix::from_name("BLOSUM90").is_none());
        assert!(SubstitutionMatrix::from_name("").is_none());
    }

    #[test]
    fn match_mismatch_scoring() {
        let s = MatchMismatch::new(2, -1);
        assert_eq!(s.score(b'A', b'A'), 2);
        assert_eq!(s.score(b'A', b'a'), 2);
        assert_eq!(s.score(b'A', b'C'), -1);
    }
}
