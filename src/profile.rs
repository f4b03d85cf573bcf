//! Diagonal summation: collapses a score matrix to one sum per offset
//! `d = j - i` on and above the main diagonal.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::matrix::ScoreMatrix;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagonalProfile {
    sums: Vec<i64>,
}

/// Entry `d` is the sum of cells `(i, i + d)`. The profile has one entry per
/// matrix column, including offsets whose sum is 0.
pub fn diagonal_sums(matrix: &ScoreMatrix) -> DiagonalProfile {
    let mut sums = vec![0i64; matrix.cols()];
    for (i, row) in matrix.iter_rows().enumerate() {
        for (sum, &cell) in sums.iter_mut().zip(row.iter().skip(i)) {
            *sum += i64::from(cell);
        }
    }
    DiagonalProfile { sums }
}

impl DiagonalProfile {
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<i64> {
        self.sums.get(offset).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.sums
    }

    /// Offset >= 1 with the highest sum, i.e. the most likely repeat period.
    /// Ties go to the smallest offset.
    pub fn peak(&self) -> Option<(usize, i64)> {
        self.sums
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .fold(None, |best, (offset, sum)| match best {
                Some((_, best_sum)) if best_sum >= sum => best,
                _ => Some((offset, sum)),
            })
    }

    /// Writes one `offset:score` line per entry, in ascending offset order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (offset, sum) in self.sums.iter().enumerate() {
            writeln!(writer, "{}:{}", offset, sum)?;
        }
        Ok(())
    }
}

/// Writes the whole profile to `path`, replacing any existing file.
///
/// The profile goes to a temporary file in the destination directory that is
/// renamed into place only once complete, so a failed write never leaves a
/// partial profile at `path`.
pub fn write_profile_file(profile: &DiagonalProfile, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(tmp);
    profile.write_to(&mut writer)?;
    let tmp = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
    tmp.persist(path).map_err(io::Error::from)?;
    Ok(())
}
