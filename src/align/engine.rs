//! The dynamic-programming core: boundary initialization, affine-gap
//! recurrence, and traceback reconstruction.
//!
//! Gap cost for a cell depends on the traceback state of the neighbor being
//! extended from, not on separate gap-score arrays. This two-grid formulation
//! is intentionally simpler than canonical three-matrix Gotoh and can differ
//! from it in rare multi-branch tie scenarios; the tie-break order below is
//! part of the output contract and must not change.

use tracing::debug;

use crate::align::result::PairwiseAlignment;
use crate::core::sequence::Sequence;
use crate::core::types::{GapPenalties, GAP};
use crate::scoring::SubstitutionScorer;

/// Traceback step recorded for each interior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Consume one residue from each sequence (diagonal move)
    Substitute,
    /// Consume a seq1 residue against a gap in seq2 (vertical move)
    Delete,
    /// Consume a seq2 residue against a gap in seq1 (horizontal move)
    Insert,
}

/// Score and traceback grids sharing one row-major indexing scheme.
///
/// `score[i][j]` is the optimal score of aligning the length-`i` prefix of
/// seq1 against the length-`j` prefix of seq2. `step` is `None` on the
/// boundary row/column, which the recurrence reads as "not a gap run".
struct DpGrids {
    cols: usize,
    score: Vec<i32>,
    step: Vec<Option<Step>>,
}

impl DpGrids {
    /// Build both grids with the affine boundary: the first gap of a leading
    /// run costs `open`, each further position `extend`.
    fn new(rows: usize, cols: usize, gaps: GapPenalties) -> Self {
        let mut score = vec![0i32; rows * cols];
        let step = vec![None; rows * cols];

        for i in 1..rows {
            score[i * cols] = gaps.run_cost(i);
        }
        for j in 1..cols {
            score[j] = gaps.run_cost(j);
        }

        Self { cols, score, step }
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Fill every interior cell in row-major order, recording the chosen step.
    fn fill<S: SubstitutionScorer>(
        &mut self,
        seq1: &[u8],
        seq2: &[u8],
        scorer: &S,
        gaps: GapPenalties,
    ) {
        for i in 1..=seq1.len() {
            for j in 1..=seq2.len() {
                let diag = self.idx(i - 1, j - 1);
                let up = self.idx(i - 1, j);
                let left = self.idx(i, j - 1);

                let substitute = self.score[diag] + scorer.score(seq1[i - 1], seq2[j - 1]);
                let delete = self.score[up]
                    + if self.step[up] == Some(Step::Delete) { gaps.extend } else { gaps.open };
                let insert = self.score[left]
                    + if self.step[left] == Some(Step::Insert) { gaps.extend } else { gaps.open };

                // Tie-break order is load-bearing: the diagonal wins any tie
                // it participates in, and delete beats insert only strictly.
                let (best, step) = if substitute >= delete && substitute >= insert {
                    (substitute, Step::Substitute)
                } else if delete > insert {
                    (delete, Step::Delete)
                } else {
                    (insert, Step::Insert)
                };

                let cell = self.idx(i, j);
                self.score[cell] = best;
                self.step[cell] = Some(step);
            }
        }
    }

    /// Walk the step grid from the bottom-right corner back to the origin,
    /// then flush whichever prefix remains against gap symbols.
    fn traceback(&self, seq1: &[u8], seq2: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let mut aligned1 = Vec::with_capacity(seq1.len() + seq2.len());
        let mut aligned2 = Vec::with_capacity(seq1.len() + seq2.len());

        let mut i = seq1.len();
        let mut j = seq2.len();
        while i > 0 && j > 0 {
            match self.step[self.idx(i, j)] {
                Some(Step::Substitute) => {
                    aligned1.push(seq1[i - 1]);
                    aligned2.push(seq2[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                Some(Step::Delete) => {
                    aligned1.push(seq1[i - 1]);
                    aligned2.push(GAP);
                    i -= 1;
                }
                _ => {
                    aligned1.push(GAP);
                    aligned2.push(seq2[j - 1]);
                    j -= 1;
                }
            }
        }
        while i > 0 {
            aligned1.push(seq1[i - 1]);
            aligned2.push(GAP);
            i -= 1;
        }
        while j > 0 {
            aligned1.push(GAP);
            aligned2.push(seq2[j - 1]);
            j -= 1;
        }

        // Built back-to-front
        aligned1.reverse();
        aligned2.reverse();
        (aligned1, aligned2)
    }
}

/// Compute the optimal global alignment of two sequences.
///
/// Runs the full initialize/fill/traceback pipeline in `O(len1 * len2)` time
/// and space and returns the scored, reconstructed alignment. Total over all
/// validated inputs, including empty sequences on either side.
pub fn global_align<S: SubstitutionScorer>(
    seq1: &Sequence,
    seq2: &Sequence,
    scorer: &S,
    gaps: GapPenalties,
) -> PairwiseAlignment {
    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;

    let mut grids = DpGrids::new(rows, cols, gaps);
    grids.fill(seq1.as_bytes(), seq2.as_bytes(), scorer, gaps);

    let score = grids.score[grids.idx(seq1.len(), seq2.len())];
    let (aligned1, aligned2) = grids.traceback(seq1.as_bytes(), seq2.as_bytes());

    debug!(score, length = aligned1.len(), "alignment complete");

    PairwiseAlignment::from_aligned(&aligned1, &aligned2, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{MatchMismatch, SubstitutionMatrix};

    fn seq(s: &str) -> Sequence {
        Sequence::new(s).unwrap()
    }

    /// Recompute the score from the output columns: substitution columns use
    /// the scorer, gap columns cost `extend` when the previous column is a
    /// same-direction gap and `open` otherwise.
    fn score_from_columns<S: SubstitutionScorer>(
        aligned1: &str,
        aligned2: &str,
        scorer: &S,
        gaps: GapPenalties,
    ) -> i32 {
        let a = aligned1.as_bytes();
        let b = aligned2.as_bytes();
        let mut total = 0;
        for k in 0..a.len() {
            if a[k] == GAP {
                let extending = k > 0 && a[k - 1] == GAP;
                total += if extending { gaps.extend } else { gaps.open };
            } else if b[k] == GAP {
                let extending = k > 0 && b[k - 1] == GAP;
                total += if extending { gaps.extend } else { gaps.open };
            } else {
                total += scorer.score(a[k], b[k]);
            }
        }
        total
    }

    #[test]
    fn test_identical_sequences() {
        let scorer = MatchMismatch::new(1, 0);
        let result = global_align(&seq("SEQ"), &seq("SEQ"), &scorer, GapPenalties::new(-5, -1));

        assert_eq!(result.aligned1, "SEQ");
        assert_eq!(result.aligned2, "SEQ");
        assert_eq!(result.match_track, "|||");
        assert_eq!(result.score, 3);
        assert_eq!(result.matches, 3);
        assert_eq!(result.length, 3);
        assert!((result.identity - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_seq2_is_pure_deletion_run() {
        let scorer = MatchMismatch::new(1, 0);
        let result = global_align(&seq("AA"), &seq(""), &scorer, GapPenalties::new(-10, -2));

        assert_eq!(result.aligned1, "AA");
        assert_eq!(result.aligned2, "--");
        // Affine boundary: open + extend * (len - 1)
        assert_eq!(result.score, -12);
        assert_eq!(result.matches, 0);
        assert_eq!(result.length, 2);
    }

    #[test]
    fn test_empty_seq1_is_pure_insertion_run() {
        let scorer = MatchMismatch::new(1, 0);
        let result = global_align(&seq(""), &seq("ACG"), &scorer, GapPenalties::new(-10, -2));

        assert_eq!(result.aligned1, "---");
        assert_eq!(result.aligned2, "ACG");
        assert_eq!(result.score, -14);
    }

    #[test]
    fn test_both_empty() {
        let scorer = MatchMismatch::new(1, 0);
        let result = global_align(&seq(""), &seq(""), &scorer, GapPenalties::new(-5, -1));

        assert_eq!(result.aligned1, "");
        assert_eq!(result.aligned2, "");
        assert_eq!(result.score, 0);
        assert_eq!(result.length, 0);
        assert!((result.identity - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_leading_gap_run_priced_as_one_opening() {
        // Best alignment keeps the single A of seq2 on the last column; the
        // three leading gaps cost open + 2 * extend via the boundary column.
        let scorer = MatchMismatch::new(1, -1);
        let result = global_align(&seq("AAAA"), &seq("A"), &scorer, GapPenalties::new(-5, -1));

        assert_eq!(result.aligned1, "AAAA");
        assert_eq!(result.aligned2, "---A");
        assert_eq!(result.score, -6);
    }

    #[test]
    fn test_internal_deletion_with_blosum62() {
        let matrix = SubstitutionMatrix::blosum62();
        let result =
            global_align(&seq("MKW"), &seq("KW"), &matrix, GapPenalties::new(-10, -1));

        assert_eq!(result.aligned1, "MKW");
        assert_eq!(result.aligned2, "-KW");
        assert_eq!(result.match_track, " ||");
        // gap(-10) + K:K(5) + W:W(11)
        assert_eq!(result.score, 6);
        assert_eq!(result.matches, 2);
    }

    #[test]
    fn test_tie_prefers_diagonal() {
        // At the final cell the diagonal move exactly ties the vertical one
        // (both 0); the diagonal must win, putting the gap before the match.
        let scorer = MatchMismatch::new(1, 0);
        let result = global_align(&seq("AA"), &seq("A"), &scorer, GapPenalties::new(-1, -1));

        assert_eq!(result.aligned1, "AA");
        assert_eq!(result.aligned2, "-A");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_gap_tie_is_strict_for_delete() {
        // At the final cell both gap moves score -1 and beat the double
        // mismatch; delete wins only strictly, so the tie goes to insert.
        let scorer = MatchMismatch::new(1, -2);
        let result = global_align(&seq("AB"), &seq("BA"), &scorer, GapPenalties::new(-1, -1));

        assert_eq!(result.aligned1, "AB-");
        assert_eq!(result.aligned2, "-BA");
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_score_reproducible_from_output_columns() {
        let gaps = GapPenalties::new(-10, -1);
        let matrix = SubstitutionMatrix::blosum62();
        let cases = [
            ("HEAGAWGHEE", "PAWHEAE"),
            ("MKWVTFISLL", "MKWVTF"),
            ("KW", "MKWR"),
            ("A", "A"),
        ];
        for (s1, s2) in cases {
            let result = global_align(&seq(s1), &seq(s2), &matrix, gaps);
            assert_eq!(
                result.score,
                score_from_columns(&result.aligned1, &result.aligned2, &matrix, gaps),
                "score not reproducible for {s1} vs {s2}"
            );
        }
    }

    #[test]
    fn test_output_postconditions() {
        let gaps = GapPenalties::new(-8, -2);
        let matrix = SubstitutionMatrix::blosum62();
        let cases = [("MKWVTF", "KWTF"), ("ACDEFG", "G"), ("W", "WYYYW")];
        for (s1, s2) in cases {
            let result = global_align(&seq(s1), &seq(s2), &matrix, gaps);

            assert_eq!(result.aligned1.len(), result.aligned2.len());
            assert_eq!(result.length, result.aligned1.len());
            assert!(result.length >= s1.len().max(s2.len()));

            // No column may pair a gap with a gap
            let gap_gap = result
                .aligned1
                .bytes()
                .zip(result.aligned2.bytes())
                .any(|(a, b)| a == GAP && b == GAP);
            assert!(!gap_gap, "gap/gap column in {s1} vs {s2}");

            // Stripping gaps recovers the inputs
            let stripped1: Vec<u8> =
                result.aligned1.bytes().filter(|&b| b != GAP).collect();
            let stripped2: Vec<u8> =
                result.aligned2.bytes().filter(|&b| b != GAP).collect();
            assert_eq!(stripped1, s1.as_bytes());
            assert_eq!(stripped2, s2.as_bytes());
        }
    }

    #[test]
    fn test_cost_symmetry_under_swap() {
        let gaps = GapPenalties::new(-10, -1);
        let matrix = SubstitutionMatrix::blosum62();
        let cases = [("MKW", "KW"), ("SEQ", "SEQ"), ("AA", "")];
        for (s1, s2) in cases {
            let forward = global_align(&seq(s1), &seq(s2), &matrix, gaps);
            let reverse = global_align(&seq(s2), &seq(s1), &matrix, gaps);
            // Alignments may differ on ties (delete is preferred over
            // insert), but the optimal cost is direction-independent here.
            assert_eq!(forward.score, reverse.score, "asymmetric cost for {s1} vs {s2}");
        }
    }

    #[test]
    fn test_transposed_alignment_under_swap() {
        let gaps = GapPenalties::new(-10, -1);
        let matrix = SubstitutionMatrix::blosum62();
        let result = global_align(&seq("KW"), &seq("MKW"), &matrix, gaps);

        assert_eq!(result.aligned1, "-KW");
        assert_eq!(result.aligned2, "MKW");
        assert_eq!(result.score, 6);
    }
}
