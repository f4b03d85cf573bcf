//! Local alignment with a flat per-position gap penalty.

use log::debug;

use crate::matrix::ScoreMatrix;
use crate::scoring::{floored_max, SubstitutionTable};
use crate::Sequence;

/// Fills the (n+1)×(m+1) matrix for `a` (rows) against `b` (columns).
///
/// ```text
/// H(i,j) = max(0,
///              H(i-1,j-1) + s(a[i], b[j]),
///              H(i-1,j) - p,
///              H(i,j-1) - p)
/// ```
///
/// With `exclude_diagonal`, every `H(i,i)` is pinned to 0.
pub fn fill(
    a: &Sequence,
    b: &Sequence,
    table: &SubstitutionTable,
    penalty: i32,
    exclude_diagonal: bool,
) -> ScoreMatrix {
    let (n, m) = (a.len(), b.len());
    debug!("constant fill: {}x{}, penalty {}", n + 1, m + 1, penalty);

    let mut matrix = ScoreMatrix::new(n + 1, m + 1);
    for (i, &base_a) in a.as_slice().iter().enumerate().map(|(k, base)| (k + 1, base)) {
        for (j, &base_b) in b.as_slice().iter().enumerate().map(|(k, base)| (k + 1, base)) {
            if exclude_diagonal && i == j {
                continue;
            }
            let diagonal = matrix.get(i - 1, j - 1) + table.score(base_a, base_b);
            let from_row_above = matrix.get(i - 1, j).saturating_sub(penalty);
            let from_left = matrix.get(i, j - 1).saturating_sub(penalty);
            matrix.set(i, j, floored_max([diagonal, from_row_above, from_left]));
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(data: &[u8]) -> Sequence {
        Sequence::new(data).unwrap()
    }

    fn nucleotides(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(prop::sample::select(b"ACGTN".to_vec()), 0..max_len)
    }

    #[test]
    fn test_identical_sequences_accumulate_on_diagonal() {
        let a = seq(b"ACGT");
        let matrix = fill(&a, &a, &SubstitutionTable::dna(), 25, false);
        assert_eq!(matrix.rows(), 5);
        assert_eq!(matrix.cols(), 5);
        for i in 1..=4 {
            assert_eq!(matrix.get(i, i), 5 * i as i32);
            for j in (0..=4).filter(|&j| j != i) {
                assert_eq!(matrix.get(i, j), 0, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_cheap_gaps_leak_off_diagonal() {
        let matrix = fill(&seq(b"AC"), &seq(b"AGC"), &SubstitutionTable::dna(), 3, false);
        let expected = ScoreMatrix::from_rows(&[
            vec![0, 0, 0, 0],
            vec![0, 5, 2, 0],
            vec![0, 2, 1, 7],
        ])
        .unwrap();
        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_excluded_diagonal_is_zero() {
        let a = seq(b"ACGTACGT");
        let matrix = fill(&a, &a, &SubstitutionTable::dna(), 25, true);
        for i in 0..=8 {
            assert_eq!(matrix.get(i, i), 0);
        }
        // The period-4 repeat survives on the offset-4 diagonals.
        assert_eq!(matrix.get(4, 8), 20);
        assert_eq!(matrix.get(8, 4), 20);
    }

    #[test]
    fn test_empty_sequence() {
        let matrix = fill(&seq(b""), &seq(b"ACG"), &SubstitutionTable::dna(), 25, false);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 4);
    }

    #[test]
    fn test_zero_penalty() {
        let matrix = fill(&seq(b"AA"), &seq(b"CA"), &SubstitutionTable::dna(), 0, false);
        // (1,2) matches on the diagonal; the gap carries 5 down to (2,2)
        assert_eq!(matrix.get(1, 2), 5);
        assert_eq!(matrix.get(2, 2), 5);
    }

    proptest! {
        #[test]
        fn prop_cells_never_negative(
            a in nucleotides(24),
            b in nucleotides(24),
            penalty in 0i32..40,
            exclude in any::<bool>(),
        ) {
            let matrix = fill(&seq(&a), &seq(&b), &SubstitutionTable::dna(), penalty, exclude);
            prop_assert!(matrix.min_value().unwrap_or(0) >= 0);
            prop_assert_eq!(matrix.rows(), a.len() + 1);
            prop_assert_eq!(matrix.cols(), b.len() + 1);
        }

        #[test]
        fn prop_exclusion_zeroes_diagonal(
            a in nucleotides(24),
            b in nucleotides(24),
            penalty in 0i32..40,
        ) {
            let matrix = fill(&seq(&a), &seq(&b), &SubstitutionTable::dna(), penalty, true);
            for i in 0..=a.len().min(b.len()) {
                prop_assert_eq!(matrix.get(i, i), 0);
            }
        }

        #[test]
        fn prop_fill_is_deterministic(a in nucleotides(24), b in nucleotides(24)) {
            let table = SubstitutionTable::dna();
            let first = fill(&seq(&a), &seq(&b), &table, 25, false);
            let second = fill(&seq(&a), &seq(&b), &table, 25, false);
            prop_assert_eq!(first, second);
        }
    }
}
