//! Lazy decimal digit sequence.

use std::iter::FusedIterator;

/// Yields the decimal digits of a number from the most significant to the
/// least significant.
///
/// The sequence is finite and computed on demand; to walk it again, build a
/// new `Digits`.
///
/// # Example
///
/// ```
/// use aoc_collections::Digits;
///
/// assert_eq!(Digits::new(4096).collect::<Vec<_>>(), vec![4, 0, 9, 6]);
/// assert_eq!(Digits::new(0).collect::<Vec<_>>(), vec![0]);
/// assert_eq!(Digits::new(123).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Digits {
    n: u64,
    /// Place value of the next digit, 0 once exhausted.
    divisor: u64,
}

impl Digits {
    pub fn new(n: u64) -> Self {
        let mut divisor = 1;
        while n / divisor >= 10 {
            divisor *= 10;
        }
        Self { n, divisor }
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.divisor == 0 {
            return None;
        }
        let digit = (self.n / self.divisor % 10) as u8;
        self.divisor /= 10;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut len = 0;
        let mut divisor = self.divisor;
        while divisor > 0 {
            len += 1;
            divisor /= 10;
        }
        (len, Some(len))
    }
}

impl ExactSizeIterator for Digits {}

impl FusedIterator for Digits {}
