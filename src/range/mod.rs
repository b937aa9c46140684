//! Range core: the `Range` type, its constructors, and the materialization gate.
//!
//! A range is a window `[start, start + len)` over an indexer. The indexer is
//! a small tagged tree rather than a chain of closures, so every composed
//! layer is visible to the complexity counter:
//!
//! ```text
//! Empty        - canonical empty range, never consulted
//! Slice(arc)   - array-backed, cloned out element by element
//! Func(f)      - caller-supplied (or numeric) mapping
//! Reversed(r)  - reads `r` back to front
//! Appended(rs) - resolves an index by scanning cumulative lengths
//! ```
//!
//! Reversal and append add layers. Once a range's complexity climbs past
//! `MATERIALIZE_THRESHOLD` it is flattened into a fresh `Slice`, which bounds
//! the dispatch depth of every reachable range.

mod access;
mod convert;
mod numeric;
mod search;
mod structure;
mod traverse;

pub use access::Iter;
pub use convert::Generator;
pub use numeric::Progression;
pub use structure::Segments;

use std::sync::Arc;

use smallvec::SmallVec;

/// Complexity above which a composed range is flattened into an array.
pub const MATERIALIZE_THRESHOLD: usize = 16;

type IndexFn<T> = dyn Fn(usize) -> T + Send + Sync;

/// One element per participating range, for the multi-range callbacks.
pub(crate) type Pack<T> = SmallVec<[T; 4]>;

pub(crate) enum Indexer<T> {
    Empty,
    Slice(Arc<[T]>),
    Func(Arc<IndexFn<T>>),
    Reversed(Arc<Range<T>>),
    Appended(Arc<[Range<T>]>),
}

impl<T> Clone for Indexer<T> {
    fn clone(&self) -> Self {
        match self {
            Indexer::Empty => Indexer::Empty,
            Indexer::Slice(items) => Indexer::Slice(Arc::clone(items)),
            Indexer::Func(f) => Indexer::Func(Arc::clone(f)),
            Indexer::Reversed(inner) => Indexer::Reversed(Arc::clone(inner)),
            Indexer::Appended(parts) => Indexer::Appended(Arc::clone(parts)),
        }
    }
}

impl<T> Indexer<T> {
    /// True when both indexers are the same allocation.
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Indexer::Empty, Indexer::Empty) => true,
            (Indexer::Slice(a), Indexer::Slice(b)) => Arc::ptr_eq(a, b),
            (Indexer::Func(a), Indexer::Func(b)) => Arc::ptr_eq(a, b),
            (Indexer::Reversed(a), Indexer::Reversed(b)) => Arc::ptr_eq(a, b),
            (Indexer::Appended(a), Indexer::Appended(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Clone> Indexer<T> {
    /// Resolve an absolute index. Callers stay inside the owning range's window.
    fn fetch(&self, absolute: usize) -> T {
        match self {
            Indexer::Empty => unreachable!("the empty range has no elements"),
            Indexer::Slice(items) => items[absolute].clone(),
            Indexer::Func(f) => f(absolute),
            Indexer::Reversed(inner) => inner.at(inner.len - 1 - absolute),
            Indexer::Appended(parts) => {
                let last = parts.len() - 1;
                let mut offset = absolute;
                for part in &parts[..last] {
                    if offset < part.len {
                        return part.at(offset);
                    }
                    offset -= part.len;
                }
                parts[last].at(offset)
            }
        }
    }
}

/// An immutable, lazily-evaluated view of `len` elements.
///
/// Cloning a range is cheap: clones share the indexer.
pub struct Range<T> {
    start: usize,
    len: usize,
    indexer: Indexer<T>,
    complexity: usize,
}

impl<T> Clone for Range<T> {
    fn clone(&self) -> Self {
        Range {
            start: self.start,
            len: self.len,
            indexer: self.indexer.clone(),
            complexity: self.complexity,
        }
    }
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Range::empty()
    }
}

impl<T> Range<T> {
    /// Create a range of `len` elements, where element `i` is `indexer(i)`.
    ///
    /// The indexer must be pure: it may be called any number of times for
    /// any index in `0..len`, and never outside it.
    pub fn new<F>(len: usize, indexer: F) -> Range<T>
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        return Range {
            start: 0,
            len,
            indexer: Indexer::Func(Arc::new(indexer)),
            complexity: 0,
        };
    }

    /// The canonical empty range.
    pub fn empty() -> Range<T> {
        return Range {
            start: 0,
            len: 0,
            indexer: Indexer::Empty,
            complexity: 0,
        };
    }

    /// Wrap a backing array in place. Passing an `Arc<[T]>` shares it.
    pub fn vector(items: impl Into<Arc<[T]>>) -> Range<T> {
        let items = items.into();
        return Range {
            start: 0,
            len: items.len(),
            indexer: Indexer::Slice(items),
            complexity: 0,
        };
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of composition layers wrapped since the last materialization.
    pub fn complexity(&self) -> usize {
        self.complexity
    }

    /// Re-window this range. `offset + len` must not exceed `self.len`.
    pub(crate) fn window(&self, offset: usize, len: usize) -> Range<T> {
        debug_assert!(offset + len <= self.len);
        return Range {
            start: self.start + offset,
            len,
            indexer: self.indexer.clone(),
            complexity: self.complexity,
        };
    }

    /// True when both ranges view the same window of the same indexer.
    pub(crate) fn same_view(&self, other: &Range<T>) -> bool {
        self.start == other.start
            && self.len == other.len
            && self.indexer.same_as(&other.indexer)
    }

    /// The effective length of a multi-range traversal: the shortest input.
    pub(crate) fn shared_len(&self, others: &[&Range<T>]) -> usize {
        let mut len = self.len;
        for other in others {
            if len == 0 {
                break;
            }
            len = len.min(other.len);
        }
        len
    }
}

impl Range<char> {
    /// A range over the characters of `text`.
    ///
    /// `str` cannot be indexed by character in constant time, so the text is
    /// decoded into a character array first.
    pub fn string(text: &str) -> Range<char> {
        let chars: Arc<[char]> = text.chars().collect();
        return Range::vector(chars);
    }
}

impl<T: Clone> Range<T> {
    /// Element at local index `local`, which must be below `len`.
    #[inline]
    pub(crate) fn at(&self, local: usize) -> T {
        self.indexer.fetch(self.start + local)
    }

    /// The element at `index` of this range and of every range in `others`.
    pub(crate) fn pack(&self, others: &[&Range<T>], index: usize) -> Pack<T> {
        let mut pack = Pack::with_capacity(others.len() + 1);
        pack.push(self.at(index));
        for other in others {
            pack.push(other.at(index));
        }
        pack
    }

    /// Flatten into a fresh array-backed range with complexity 0.
    ///
    /// The elements are unchanged; only the cost of reaching them is.
    pub fn materialize(&self) -> Range<T> {
        log::trace!("materializing range of {} elements", self.len);
        let items: Arc<[T]> = self.iter().collect();
        return Range::vector(items);
    }

    /// Materialize if composition has pushed complexity past the threshold.
    pub(crate) fn gate(self) -> Range<T> {
        if self.complexity <= MATERIALIZE_THRESHOLD {
            return self;
        }
        log::debug!(
            "complexity {} exceeds {}, flattening {} elements",
            self.complexity,
            MATERIALIZE_THRESHOLD,
            self.len,
        );
        return self.materialize();
    }
}
