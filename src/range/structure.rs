//! Structural operations: windowing, reversal and concatenation.
//!
//! Windowing shares the indexer and leaves complexity unchanged. Reversal
//! and append wrap the indexer in a new layer and pass the result through
//! the materialization gate.

use std::iter::FusedIterator;
use std::sync::Arc;

use super::{Indexer, Range};
use crate::error::{RangeError, Result};

impl<T> Range<T> {
    /// Split into `[0, index)` and `[index, len)`.
    pub fn split_at(&self, index: usize) -> Result<(Range<T>, Range<T>)> {
        self.check_count(index)?;
        if index == 0 {
            return Ok((Range::empty(), self.clone()));
        }
        if index == self.len {
            return Ok((self.clone(), Range::empty()));
        }
        return Ok((self.take_unchecked(index), self.drop_unchecked(index)));
    }

    /// The elements in `[start, end)`.
    pub fn subrange(&self, start: usize, end: usize) -> Result<Range<T>> {
        if start > end {
            return Err(RangeError::IndexOutOfRange { index: start, len: self.len });
        }
        self.check_count(end)?;
        if start == 0 && end == self.len {
            return Ok(self.clone());
        }
        return Ok(self.window(start, end - start));
    }

    /// Consecutive subranges of `size` elements; the last may be shorter.
    pub fn segment(&self, size: usize) -> Result<Segments<T>> {
        if size == 0 {
            return Err(RangeError::InvalidArgument("segment size must be positive"));
        }
        return Ok(Segments {
            range: self.clone(),
            size,
            offset: 0,
        });
    }

    /// The first `n` elements.
    pub fn take(&self, n: usize) -> Result<Range<T>> {
        self.check_count(n)?;
        Ok(self.take_unchecked(n))
    }

    /// The last `n` elements.
    pub fn take_right(&self, n: usize) -> Result<Range<T>> {
        self.check_count(n)?;
        Ok(self.take_right_unchecked(n))
    }

    /// Everything but the first `n` elements.
    pub fn drop(&self, n: usize) -> Result<Range<T>> {
        self.check_count(n)?;
        Ok(self.drop_unchecked(n))
    }

    /// Everything but the last `n` elements.
    pub fn drop_right(&self, n: usize) -> Result<Range<T>> {
        self.check_count(n)?;
        Ok(self.drop_right_unchecked(n))
    }

    fn check_count(&self, n: usize) -> Result<()> {
        if n > self.len {
            return Err(RangeError::IndexOutOfRange { index: n, len: self.len });
        }
        Ok(())
    }

    pub(crate) fn take_unchecked(&self, n: usize) -> Range<T> {
        self.window(0, n)
    }

    pub(crate) fn take_right_unchecked(&self, n: usize) -> Range<T> {
        self.window(self.len - n, n)
    }

    pub(crate) fn drop_unchecked(&self, n: usize) -> Range<T> {
        self.window(n, self.len - n)
    }

    pub(crate) fn drop_right_unchecked(&self, n: usize) -> Range<T> {
        self.window(0, self.len - n)
    }
}

impl<T: Clone> Range<T> {
    /// The same elements back to front.
    pub fn reverse(&self) -> Range<T> {
        let reversed = Range {
            start: 0,
            len: self.len,
            indexer: Indexer::Reversed(Arc::new(self.clone())),
            complexity: self.complexity + 1,
        };
        return reversed.gate();
    }

    /// This range followed by `other`.
    ///
    /// # Panics
    ///
    /// If the combined length overflows `usize`.
    pub fn append(&self, other: &Range<T>) -> Range<T> {
        let len = self.len.checked_add(other.len).expect("appended range length overflows usize");
        let appended = Range {
            start: 0,
            len,
            indexer: Indexer::Appended(Arc::from(vec![self.clone(), other.clone()])),
            complexity: 1 + self.complexity + other.complexity,
        };
        return appended.gate();
    }

    /// All `ranges` in order, as one range.
    ///
    /// No ranges give the empty range and a single range is returned as is.
    ///
    /// # Panics
    ///
    /// If the combined length overflows `usize`.
    pub fn concat(ranges: &[&Range<T>]) -> Range<T> {
        match ranges {
            [] => Range::empty(),
            [only] => (*only).clone(),
            [a, b] => a.append(b),
            _ => {
                let len = ranges
                    .iter()
                    .try_fold(0usize, |total, r| total.checked_add(r.len))
                    .expect("concatenated range length overflows usize");
                let nested: usize = ranges.iter().map(|r| r.complexity).sum();
                let parts: Arc<[Range<T>]> = ranges.iter().map(|&r| r.clone()).collect();
                let appended = Range {
                    start: 0,
                    len,
                    indexer: Indexer::Appended(parts),
                    complexity: ranges.len() + nested,
                };
                appended.gate()
            }
        }
    }
}

/// Iterator over fixed-size pieces of a range, produced by [`Range::segment`].
pub struct Segments<T> {
    range: Range<T>,
    size: usize,
    offset: usize,
}

impl<T> Iterator for Segments<T> {
    type Item = Range<T>;

    fn next(&mut self) -> Option<Range<T>> {
        let remaining = self.range.len - self.offset;
        if remaining == 0 {
            return None;
        }
        let len = self.size.min(remaining);
        let segment = self.range.window(self.offset, len);
        self.offset += len;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len - self.offset;
        let count = remaining.div_ceil(self.size);
        (count, Some(count))
    }
}

impl<T> ExactSizeIterator for Segments<T> {}

impl<T> FusedIterator for Segments<T> {}
