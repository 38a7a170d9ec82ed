use serde::Serialize;

/// Safely convert usize to f64 for percentage calculations
///
/// Alignment lengths are far inside the f64 mantissa range, so the precision
/// loss allowed here is theoretical.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Result of one global alignment run.
///
/// Owns the reconstructed, gap-padded sequences plus the statistics derived
/// from them. Produced once per call and immediately rendered; nothing here
/// is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PairwiseAlignment {
    /// Aligned sequence 1, gap-padded with `-`
    pub aligned1: String,

    /// Per-column match track: `|` where the two columns agree, space otherwise
    pub match_track: String,

    /// Aligned sequence 2, gap-padded with `-`
    pub aligned2: String,

    /// Optimal alignment score (the bottom-right score-matrix cell)
    pub score: i32,

    /// Number of identical columns
    pub matches: usize,

    /// Total alignment length (columns, including gaps)
    pub length: usize,

    /// Percent identity: `100 * matches / length`
    pub identity: f64,
}

impl PairwiseAlignment {
    /// Derive the match track and identity statistics from two equal-length
    /// aligned byte strings.
    ///
    /// The match track compares columns literally, with no special-casing of
    /// the gap symbol; the traceback never produces a gap/gap column, so a
    /// gap can only ever pair with a residue and counts as a mismatch.
    #[must_use]
    pub fn from_aligned(aligned1: &[u8], aligned2: &[u8], score: i32) -> Self {
        debug_assert_eq!(aligned1.len(), aligned2.len());

        let length = aligned1.len();
        let match_track: String = aligned1
            .iter()
            .zip(aligned2)
            .map(|(a, b)| if a == b { '|' } else { ' ' })
            .collect();
        let matches = match_track.bytes().filter(|&b| b == b'|').count();

        // Both sequences empty is the only zero-length case; report 0 rather
        // than dividing by zero.
        let identity = if length == 0 {
            0.0
        } else {
            100.0 * count_to_f64(matches) / count_to_f64(length)
        };

        Self {
            aligned1: String::from_utf8_lossy(aligned1).into_owned(),
            match_track,
            aligned2: String::from_utf8_lossy(aligned2).into_owned(),
            score,
            matches,
            length,
            identity,
        }
    }

    /// Identity the way reports print it: `"<matches>/<length> (<pct>%)"`
    /// with the percentage at one decimal place.
    #[must_use]
    pub fn identity_display(&self) -> String {
        format!("{}/{} ({:.1}%)", self.matches, self.length, self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_track_and_identity() {
        let result = PairwiseAlignment::from_aligned(b"MKW-R", b"MQWTR", 7);

        assert_eq!(result.match_track, "| | |");
        assert_eq!(result.matches, 3);
        assert_eq!(result.length, 5);
        assert_eq!(result.score, 7);
        assert!((result.identity - 60.0).abs() < 1e-9);
        assert_eq!(result.identity_display(), "3/5 (60.0%)");
    }

    #[test]
    fn test_gap_against_residue_is_mismatch() {
        let result = PairwiseAlignment::from_aligned(b"A-", b"AG", 0);
        assert_eq!(result.match_track, "| ");
        assert_eq!(result.matches, 1);
    }

    #[test]
    fn test_empty_alignment() {
        let result = PairwiseAlignment::from_aligned(b"", b"", 0);
        assert_eq!(result.length, 0);
        assert_eq!(result.matches, 0);
        assert!((result.identity - 0.0).abs() < 1e-9);
        assert_eq!(result.identity_display(), "0/0 (0.0%)");
    }

    #[test]
    fn test_identity_rounding_one_decimal() {
        // 1/3 -> 33.333...% -> "33.3%"
        let result = PairwiseAlignment::from_aligned(b"AGG", b"ACC", 1);
        assert_eq!(result.identity_display(), "1/3 (33.3%)");
    }
}
