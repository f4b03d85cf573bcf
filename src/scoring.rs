//! Fixed nucleotide substitution scores.

pub const DNA_MATCH: i32 = 5;
pub const DNA_MISMATCH: i32 = -4;

/// Nucleotide alphabet. `N` is a wildcard that scores 0 against everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    N = 4,
}

impl Nucleotide {
    pub const COUNT: usize = 5;

    /// Case-insensitive conversion from a raw sequence byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            b'N' => Some(Nucleotide::N),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
            Nucleotide::N => b'N',
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Symbol-to-symbol substitution scores, one entry per ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionTable {
    scores: [[i32; Nucleotide::COUNT]; Nucleotide::COUNT],
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::dna()
    }
}

impl SubstitutionTable {
    /// +5 on a match, -4 on a mismatch, 0 for any pair involving `N`.
    pub fn dna() -> Self {
        let mut scores = [[0; Nucleotide::COUNT]; Nucleotide::COUNT];
        let wildcard = Nucleotide::N.index();
        for (i, row) in scores.iter_mut().enumerate() {
            for (j, score) in row.iter_mut().enumerate() {
                *score = if i == wildcard || j == wildcard {
                    0
                } else if i == j {
                    DNA_MATCH
                } else {
                    DNA_MISMATCH
                };
            }
        }
        Self { scores }
    }

    #[inline]
    pub fn score(&self, a: Nucleotide, b: Nucleotide) -> i32 {
        self.scores[a.index()][b.index()]
    }
}

/// Largest candidate, floored at 0.
#[inline]
pub(crate) fn floored_max(candidates: [i32; 3]) -> i32 {
    candidates.into_iter().fold(0, i32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: [Nucleotide; Nucleotide::COUNT] = [
        Nucleotide::A,
        Nucleotide::C,
        Nucleotide::G,
        Nucleotide::T,
        Nucleotide::N,
    ];

    #[test]
    fn test_dna_matches_and_mismatches() {
        let table = SubstitutionTable::dna();
        assert_eq!(table.score(Nucleotide::A, Nucleotide::A), 5);
        assert_eq!(table.score(Nucleotide::T, Nucleotide::T), 5);
        assert_eq!(table.score(Nucleotide::A, Nucleotide::C), -4);
        assert_eq!(table.score(Nucleotide::G, Nucleotide::T), -4);
    }

    #[test]
    fn test_wildcard_scores_zero() {
        let table = SubstitutionTable::default();
        for base in ALPHABET {
            assert_eq!(table.score(Nucleotide::N, base), 0);
            assert_eq!(table.score(base, Nucleotide::N), 0);
        }
    }

    #[test]
    fn test_table_is_symmetric() {
        let table = SubstitutionTable::dna();
        for a in ALPHABET {
            for b in ALPHABET {
                assert_eq!(table.score(a, b), table.score(b, a));
            }
        }
    }

    #[test]
    fn test_from_byte() {
        assert_eq!(Nucleotide::from_byte(b'g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_byte(b'N'), Some(Nucleotide::N));
        assert_eq!(Nucleotide::from_byte(b'U'), None);
        assert_eq!(Nucleotide::from_byte(b'-'), None);
        for base in ALPHABET {
            assert_eq!(Nucleotide::from_byte(base.as_byte()), Some(base));
        }
    }

    #[test]
    fn test_floored_max() {
        assert_eq!(floored_max([-3, -1, -20]), 0);
        assert_eq!(floored_max([4, 9, -2]), 9);
    }
}
