//! Local-alignment scoring matrices between two nucleotide sequences,
//! reduced to a diagonal-offset score profile.
//!
//! Peaks in the profile point at the dominant repeat period between the two
//! sequences, which is what makes it useful on rolling-circle consensus reads.

use std::path::PathBuf;
use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod affine;
pub mod alignment_mode;
pub mod cli;
pub mod config;
pub mod constant;
pub mod fasta;
pub mod matrix;
pub mod profile;
pub mod scoring;

pub use crate::affine::AffineMatrices;
pub use crate::alignment_mode::{AlignmentParams, GapModel};
pub use crate::config::RunConfig;
pub use crate::matrix::ScoreMatrix;
pub use crate::profile::{diagonal_sums, DiagonalProfile};
pub use crate::scoring::{Nucleotide, SubstitutionTable};

// Default scoring parameters
pub const DEFAULT_GAP_PENALTY: i32 = 25;
pub const DEFAULT_GAP_OPEN: i32 = 25;
pub const DEFAULT_GAP_EXTEND: i32 = 1;

pub const DEFAULT_OUTPUT_NAME: &str = "SW_PARSE.txt";

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("no FASTA records found in {}", .0.display())]
    EmptyInput(PathBuf),
    #[error("failed to read FASTA file {}: {source}", .path.display())]
    Fasta {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("gap penalties must be non-negative, got {0}")]
    InvalidPenalty(i32),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A validated nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    header: String,
    bases: Vec<Nucleotide>,
}

impl Sequence {
    /// Validates `data` against the nucleotide alphabet. Lowercase bases are
    /// accepted; anything else fails with the offending symbol and its
    /// 0-based position.
    pub fn new(data: &[u8]) -> Result<Self> {
        let bases = data
            .iter()
            .enumerate()
            .map(|(position, &byte)| {
                Nucleotide::from_byte(byte).ok_or(Error::InvalidSymbol {
                    symbol: char::from(byte),
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            header: String::new(),
            bases,
        })
    }

    pub fn with_header(header: impl Into<String>, data: &[u8]) -> Result<Self> {
        let mut seq = Self::new(data)?;
        seq.header = header.into();
        Ok(seq)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.bases
    }
}

/// Builds score matrices and diagonal profiles for one fixed set of
/// parameters.
///
/// ```
/// use diagscore::{AlignmentParams, DiagonalScorer, GapModel, Sequence};
///
/// let params = AlignmentParams::new(GapModel::Constant { penalty: 25 });
/// let scorer = DiagonalScorer::new(params)?;
/// let a = Sequence::new(b"ACGT")?;
/// let profile = scorer.profile(&a, &a);
/// assert_eq!(profile.as_slice(), &[50, 0, 0, 0, 0]);
/// # Ok::<(), diagscore::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DiagonalScorer {
    params: AlignmentParams,
    table: SubstitutionTable,
}

impl DiagonalScorer {
    pub fn new(params: AlignmentParams) -> Result<Self> {
        params.gap_model.validate()?;
        Ok(Self {
            params,
            table: SubstitutionTable::dna(),
        })
    }

    /// The externally visible score matrix: the single matrix of the
    /// constant model, or the composite of the affine triplet.
    pub fn score_matrix(&self, a: &Sequence, b: &Sequence) -> ScoreMatrix {
        let start_time = Instant::now();
        let exclude = self.params.exclude_diagonal;

        let matrix = match self.params.gap_model {
            GapModel::Constant { penalty } => constant::fill(a, b, &self.table, penalty, exclude),
            GapModel::Affine { open, extend } => {
                AffineMatrices::fill(a, b, &self.table, open, extend, exclude).into_composite()
            }
        };

        debug!(
            "filled {}x{} matrix in {:?}",
            matrix.rows(),
            matrix.cols(),
            start_time.elapsed()
        );
        matrix
    }

    pub fn profile(&self, a: &Sequence, b: &Sequence) -> DiagonalProfile {
        diagonal_sums(&self.score_matrix(a, b))
    }
}
