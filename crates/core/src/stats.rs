use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// 行種別ごとの集計値
///
/// `blanks + comments + code == lines` always holds for values produced by
/// [`crate::parser::count_bytes`] and for any sum of such values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCounts {
    /// Number of lines.
    pub lines: usize,
    /// Whitespace-only lines outside block comments.
    pub blanks: usize,
    /// Comment lines, including blank lines inside block comments.
    pub comments: usize,
    /// Everything else.
    pub code: usize,
}

impl LineCounts {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            lines: 0,
            blanks: 0,
            comments: 0,
            code: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.blanks + self.comments + self.code == self.lines
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            blanks: self.blanks + rhs.blanks,
            comments: self.comments + rhs.comments,
            code: self.code + rhs.code,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.blanks += rhs.blanks;
        self.comments += rhs.comments;
        self.code += rhs.code;
    }
}

impl core::iter::Sum for LineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_consistency() {
        let a = LineCounts {
            lines: 3,
            blanks: 1,
            comments: 1,
            code: 1,
        };
        let b = LineCounts {
            lines: 4,
            blanks: 0,
            comments: 3,
            code: 1,
        };
        let sum = a + b;
        assert_eq!(sum.lines, 7);
        assert_eq!(sum.comments, 4);
        assert!(sum.is_consistent());
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let sum: LineCounts = core::iter::empty().sum();
        assert_eq!(sum, LineCounts::zero());
    }
}
