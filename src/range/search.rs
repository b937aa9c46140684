//! Linear index search and the `*_while` windows built on it.

use super::Range;
use crate::error::{RangeError, Result};

impl<T: Clone> Range<T> {
    /// Index of the first element satisfying `pred`.
    pub fn index<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        (0..self.len).find(|&i| pred(&self.at(i)))
    }

    /// First index, within the shortest range, where `pred` holds.
    pub fn index_with<F>(&self, others: &[&Range<T>], mut pred: F) -> Option<usize>
    where
        F: FnMut(&[T]) -> bool,
    {
        let len = self.shared_len(others);
        (0..len).find(|&i| pred(&self.pack(others, i)))
    }

    /// Index of the last element satisfying `pred`.
    pub fn index_right<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        (0..self.len).rev().find(|&i| pred(&self.at(i)))
    }

    /// Last index where `pred` holds across all ranges.
    ///
    /// Unlike [`Range::index_with`], every range must have the same length:
    /// unequal ranges have no common right edge to align on.
    pub fn index_right_with<F>(&self, others: &[&Range<T>], mut pred: F) -> Result<Option<usize>>
    where
        F: FnMut(&[T]) -> bool,
    {
        if let Some(other) = others.iter().find(|other| other.len != self.len) {
            return Err(RangeError::LengthMismatch {
                expected: self.len,
                found: other.len,
            });
        }
        return Ok((0..self.len).rev().find(|&i| pred(&self.pack(others, i))));
    }

    /// The longest prefix whose elements all satisfy `pred`.
    pub fn take_while<F>(&self, mut pred: F) -> Range<T>
    where
        F: FnMut(&T) -> bool,
    {
        match self.index(|item| !pred(item)) {
            Some(i) => self.take_unchecked(i),
            None => self.clone(),
        }
    }

    /// Everything after the longest prefix satisfying `pred`.
    pub fn drop_while<F>(&self, mut pred: F) -> Range<T>
    where
        F: FnMut(&T) -> bool,
    {
        match self.index(|item| !pred(item)) {
            Some(i) => self.drop_unchecked(i),
            None => Range::empty(),
        }
    }

    /// The longest suffix whose elements all satisfy `pred`.
    pub fn take_while_right<F>(&self, mut pred: F) -> Range<T>
    where
        F: FnMut(&T) -> bool,
    {
        match self.index_right(|item| !pred(item)) {
            Some(i) => self.take_right_unchecked(self.len - i - 1),
            None => self.clone(),
        }
    }

    /// Everything before the longest suffix satisfying `pred`.
    pub fn drop_while_right<F>(&self, mut pred: F) -> Range<T>
    where
        F: FnMut(&T) -> bool,
    {
        match self.index_right(|item| !pred(item)) {
            Some(i) => self.drop_right_unchecked(self.len - i - 1),
            None => Range::empty(),
        }
    }
}
