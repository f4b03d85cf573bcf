use std::fmt;

use crate::{Error, Result, DEFAULT_GAP_PENALTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapModel {
    /// Every gap position costs `penalty`.
    Constant { penalty: i32 },
    /// Opening a gap costs `open + extend`, each further position `extend`.
    Affine { open: i32, extend: i32 },
}

impl Default for GapModel {
    fn default() -> Self {
        GapModel::Constant {
            penalty: DEFAULT_GAP_PENALTY,
        }
    }
}

impl GapModel {
    pub fn validate(&self) -> Result<()> {
        let negative = match *self {
            GapModel::Constant { penalty } => Some(penalty).filter(|&p| p < 0),
            GapModel::Affine { open, extend } => [open, extend].into_iter().find(|&c| c < 0),
        };
        match negative {
            Some(cost) => Err(Error::InvalidPenalty(cost)),
            None => Ok(()),
        }
    }
}

impl fmt::Display for GapModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapModel::Constant { penalty } => write!(f, "constant (penalty {})", penalty),
            GapModel::Affine { open, extend } => {
                write!(f, "affine (open {}, extend {})", open, extend)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentParams {
    pub gap_model: GapModel,
    /// Force every cell `(i, i)` to zero.
    pub exclude_diagonal: bool,
}

impl AlignmentParams {
    pub fn new(gap_model: GapModel) -> Self {
        Self {
            gap_model,
            exclude_diagonal: false,
        }
    }

    pub fn with_excluded_diagonal(mut self, exclude: bool) -> Self {
        self.exclude_diagonal = exclude;
        self
    }
}
