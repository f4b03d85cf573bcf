use std::io::{self, Write};

/// Dense row-major score grid. Row 0 and column 0 stay at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from explicit rows. Returns `None` if the rows are
    /// ragged or there are none.
    pub fn from_rows(rows: &[Vec<i32>]) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            data: rows.concat(),
            rows: rows.len(),
            cols,
        })
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    pub fn min_value(&self) -> Option<i32> {
        self.data.iter().copied().min()
    }

    /// Raw dump: one row per line, cells separated by a single space.
    pub fn write_rows<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in self.iter_rows() {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(writer, "{}", first)?;
            }
            for cell in cells {
                write!(writer, " {}", cell)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
