//! Three-state affine-gap local alignment.
//!
//! `matched` holds the substitution state, `gap_a` the state that consumes
//! columns without rows, `gap_b` the state that consumes rows without columns.
//! Opening a gap costs `open + extend`, staying in the same gap state costs
//! `extend`, and switching orientation counts as a fresh open.
//!
//! Once a cell is finished, `matched` is overwritten with the best of the
//! three states, so it doubles as the composite score matrix that later cells
//! and the diagonal profile read.

use log::debug;

use crate::matrix::ScoreMatrix;
use crate::scoring::{floored_max, SubstitutionTable};
use crate::Sequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineMatrices {
    matched: ScoreMatrix,
    gap_a: ScoreMatrix,
    gap_b: ScoreMatrix,
}

impl AffineMatrices {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            matched: ScoreMatrix::new(rows, cols),
            gap_a: ScoreMatrix::new(rows, cols),
            gap_b: ScoreMatrix::new(rows, cols),
        }
    }

    /// Fills all three matrices in one row-major pass. With
    /// `exclude_diagonal`, every state at `(i, i)` is left at 0.
    pub fn fill(
        a: &Sequence,
        b: &Sequence,
        table: &SubstitutionTable,
        open: i32,
        extend: i32,
        exclude_diagonal: bool,
    ) -> Self {
        let (n, m) = (a.len(), b.len());
        debug!(
            "affine fill: 3 x {}x{}, open {}, extend {}",
            n + 1,
            m + 1,
            open,
            extend
        );

        let mut matrices = Self::new(n + 1, m + 1);
        let open_cost = open.saturating_add(extend);
        for i in 1..=n {
            let base_a = a.as_slice()[i - 1];
            for j in 1..=m {
                if exclude_diagonal && i == j {
                    continue;
                }
                let substitution = table.score(base_a, b.as_slice()[j - 1]);
                matrices.fill_cell(i, j, substitution, open_cost, extend);
            }
        }
        matrices
    }

    // All three states of (i, j) read only (i-1, j-1), (i, j-1) and (i-1, j).
    #[inline]
    fn fill_cell(&mut self, i: usize, j: usize, substitution: i32, open_cost: i32, extend: i32) {
        let matched = floored_max([
            self.matched.get(i - 1, j - 1) + substitution,
            self.gap_a.get(i - 1, j - 1) + substitution,
            self.gap_b.get(i - 1, j - 1) + substitution,
        ]);
        let gap_a = floored_max([
            self.matched.get(i, j - 1).saturating_sub(open_cost),
            self.gap_a.get(i, j - 1).saturating_sub(extend),
            self.gap_b.get(i, j - 1).saturating_sub(open_cost),
        ]);
        let gap_b = floored_max([
            self.matched.get(i - 1, j).saturating_sub(open_cost),
            self.gap_a.get(i - 1, j).saturating_sub(open_cost),
            self.gap_b.get(i - 1, j).saturating_sub(extend),
        ]);

        self.gap_a.set(i, j, gap_a);
        self.gap_b.set(i, j, gap_b);
        self.matched.set(i, j, matched.max(gap_a).max(gap_b));
    }

    /// The composite matrix (best state per cell).
    pub fn composite(&self) -> &ScoreMatrix {
        &self.matched
    }

    pub fn gap_a(&self) -> &ScoreMatrix {
        &self.gap_a
    }

    pub fn gap_b(&self) -> &ScoreMatrix {
        &self.gap_b
    }

    pub fn into_composite(self) -> ScoreMatrix {
        self.matched
    }
}
