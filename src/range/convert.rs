//! Conversions between ranges and plain sequences.

use std::collections::LinkedList;
use std::fmt;
use std::fmt::Write;
use std::iter::FusedIterator;
use std::sync::Arc;

use super::Range;

impl<T: Clone> Range<T> {
    /// Copy `items` into a new backing array.
    ///
    /// Unlike [`Range::vector`] the range owns its copy, so later changes to
    /// the caller's sequence do not show through.
    pub fn from_slice(items: &[T]) -> Range<T> {
        Range::vector(Arc::<[T]>::from(items))
    }

    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        for i in 0..self.len {
            out.push(self.at(i));
        }
        out
    }

    pub fn to_list(&self) -> LinkedList<T> {
        self.fold_right(LinkedList::new(), |mut list, item| {
            list.push_front(item);
            list
        })
    }

    /// A single-use producer of this range's elements, front to back.
    pub fn to_generator(&self) -> Generator<T> {
        Generator {
            range: self.clone(),
            cursor: 0,
        }
    }
}

impl<T> From<Vec<T>> for Range<T> {
    fn from(items: Vec<T>) -> Range<T> {
        Range::vector(items)
    }
}

impl<T> FromIterator<T> for Range<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Range<T> {
        let items: Arc<[T]> = iter.into_iter().collect();
        Range::vector(items)
    }
}

impl From<&Range<char>> for String {
    fn from(range: &Range<char>) -> String {
        let mut text = String::with_capacity(range.len);
        for i in 0..range.len {
            text.push(range.at(i));
        }
        text
    }
}

impl fmt::Display for Range<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

/// Pull-based producer returned by [`Range::to_generator`].
///
/// Holds a private cursor. Once exhausted it keeps returning `None`; there
/// is no way to rewind it.
pub struct Generator<T> {
    range: Range<T>,
    cursor: usize,
}

impl<T: Clone> Iterator for Generator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor >= self.range.len {
            return None;
        }
        let item = self.range.at(self.cursor);
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Generator<T> {}

impl<T: Clone> FusedIterator for Generator<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_vec_and_to_list_preserve_order() {
        let r = Range::vector(vec![3, 1, 4]).reverse();
        assert_eq!(r.to_vec(), vec![4, 1, 3]);
        assert_eq!(r.to_list().into_iter().collect::<Vec<_>>(), vec![4, 1, 3]);
    }

    #[test]
    fn from_slice_copies() {
        let mut source = vec![1, 2, 3];
        let r = Range::from_slice(&source);
        source[0] = 99;
        assert_eq!(r.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn collect_into_range() {
        let r: Range<u32> = (1..=4).map(|x| x * x).collect();
        assert_eq!(r.to_vec(), vec![1, 4, 9, 16]);
        assert_eq!(Range::from(vec!['x']).get(0), Ok('x'));
    }

    #[test]
    fn string_round_trip() {
        let r = Range::string("naïve café");
        assert_eq!(String::from(&r), "naïve café");
        assert_eq!(r.reverse().to_string(), "éfac evïan");
        assert_eq!(r.subrange(6, 10).unwrap().to_string(), "café");
    }

    #[test]
    fn generator_is_single_use() {
        let r = Range::vector(vec!['p', 'q']);
        let mut generator = r.to_generator();
        assert_eq!(generator.len(), 2);
        assert_eq!(generator.next(), Some('p'));
        assert_eq!(generator.next(), Some('q'));
        assert_eq!(generator.next(), None);
        assert_eq!(generator.next(), None);

        // A fresh generator starts over; the old one stays exhausted.
        assert_eq!(r.to_generator().collect::<String>(), "pq");
        assert_eq!(generator.next(), None);
    }
}
