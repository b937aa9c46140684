//! Element access and equality.

use std::fmt;
use std::iter::FusedIterator;

use super::Range;
use crate::error::{RangeError, Result};

impl<T: Clone> Range<T> {
    /// The element at `index`, or `IndexOutOfRange` unless `index < len`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(RangeError::IndexOutOfRange { index, len: self.len });
        }
        return Ok(self.at(index));
    }

    /// The element at index 0, or `None` on an empty range.
    pub fn first(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.at(0))
    }

    /// The element at index `len - 1`, or `None` on an empty range.
    pub fn last(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.at(self.len - 1))
    }

    /// True if this range and every range in `others` have one length and
    /// `eq` holds between each adjacent pair at every index.
    ///
    /// Pairs that view the same window of the same indexer are equal
    /// without calling `eq`.
    pub fn equal_by<F>(&self, others: &[&Range<T>], mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        if others.iter().any(|other| other.len != self.len) {
            return false;
        }
        let mut prev = self;
        for &next in others {
            if !prev.same_view(next) {
                for i in 0..self.len {
                    if !eq(&prev.at(i), &next.at(i)) {
                        return false;
                    }
                }
            }
            prev = next;
        }
        true
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            range: self,
            front: 0,
            back: self.len,
        }
    }
}

impl<T: Clone + PartialEq> PartialEq for Range<T> {
    fn eq(&self, other: &Range<T>) -> bool {
        self.equal_by(&[other], |a, b| a == b)
    }
}

impl<T: Clone + Eq> Eq for Range<T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a range's elements, produced by [`Range::iter`].
pub struct Iter<'a, T> {
    range: &'a Range<T>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.range.at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.range.at(self.back))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}

impl<T: Clone> FusedIterator for Iter<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a Range<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_checks_bounds() {
        let range = Range::vector(vec!['a', 'b', 'c']);
        assert_eq!(range.get(0), Ok('a'));
        assert_eq!(range.get(2), Ok('c'));
        assert_eq!(
            range.get(3),
            Err(RangeError::IndexOutOfRange { index: 3, len: 3 }),
        );
    }

    #[test]
    fn get_respects_window_offset() {
        let range = Range::new(100, |i| i).drop(40).unwrap();
        assert_eq!(range.get(0), Ok(40));
        assert_eq!(range.get(59), Ok(99));
        assert!(range.get(60).is_err());
    }

    #[test]
    fn first_and_last() {
        let range = Range::vector(vec![3, 1, 4]);
        assert_eq!(range.first(), Some(3));
        assert_eq!(range.last(), Some(4));

        let empty: Range<i32> = Range::empty();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn equal_compares_lengths_then_elements() {
        let a = Range::vector(vec![1, 2, 3]);
        let b = Range::new(3, |i| i as i32 + 1);
        let c = Range::vector(vec![1, 2]);
        let d = Range::vector(vec![1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a.equal_by(&[&b, &a], |x, y| x == y));
        assert!(!a.equal_by(&[&b, &d], |x, y| x == y));
    }

    #[test]
    fn empty_ranges_are_equal() {
        let a: Range<i32> = Range::empty();
        let b = Range::vector(vec![5, 6]).take(0).unwrap();
        assert!(a.equal_by(&[&b], |_, _| false));
    }

    #[test]
    fn identical_views_skip_comparison() {
        let a = Range::vector(vec![1.0, f64::NAN]);
        let b = a.clone();
        let mut calls = 0;
        assert!(a.equal_by(&[&b], |_, _| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 0);
        // NaN is not equal to itself elementwise, but the view is shared.
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_lazy_about_mismatch() {
        let a = Range::vector(vec![1, 9, 3, 4]);
        let b = Range::vector(vec![1, 2, 3, 4]);
        let mut calls = 0;
        assert!(!a.equal_by(&[&b], |x, y| {
            calls += 1;
            x == y
        }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn iterates_both_ends() {
        let range = Range::vector(vec![1, 2, 3, 4]);
        let mut iter = range.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!((&range).into_iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn debug_prints_as_list() {
        let range = Range::vector(vec![1, 2]).reverse();
        assert_eq!(format!("{range:?}"), "[2, 1]");
    }
}
