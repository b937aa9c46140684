//! Higher-order traversal: folds, maps, filters and counting predicates.
//!
//! Each operation has a single-range form and a `_with` form taking
//! `others: &[&Range<T>]`. The `_with` forms walk the shortest input and
//! hand the callback one element per range, in argument order, as a slice.
//! With no `others` they agree with the single-range form.
//!
//! The `zip_*` forms pair this range with one range of another element type,
//! again over the shorter length.
//!
//! Predicates borrow elements; transforms take them by value.

use super::Range;

impl<T: Clone> Range<T> {
    // =========================================================================
    // Folds
    // =========================================================================

    /// Left fold in ascending index order.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        for i in 0..self.len {
            acc = f(acc, self.at(i));
        }
        acc
    }

    pub fn fold_with<A, F>(&self, others: &[&Range<T>], init: A, mut f: F) -> A
    where
        F: FnMut(A, &[T]) -> A,
    {
        let len = self.shared_len(others);
        let mut acc = init;
        for i in 0..len {
            acc = f(acc, &self.pack(others, i));
        }
        acc
    }

    /// Right fold: the last element is combined with `init` first.
    pub fn fold_right<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        for i in (0..self.len).rev() {
            acc = f(acc, self.at(i));
        }
        acc
    }

    /// Right fold over the first `min(len)` indices of every range.
    pub fn fold_right_with<A, F>(&self, others: &[&Range<T>], init: A, mut f: F) -> A
    where
        F: FnMut(A, &[T]) -> A,
    {
        let len = self.shared_len(others);
        let mut acc = init;
        for i in (0..len).rev() {
            acc = f(acc, &self.pack(others, i));
        }
        acc
    }

    // =========================================================================
    // Eager transforms
    // =========================================================================

    /// Apply `f` to every element, realizing the results into a new array.
    pub fn map<U, F>(&self, f: F) -> Range<U>
    where
        F: FnMut(T) -> U,
    {
        Range::vector(self.map_to_vec(f))
    }

    pub fn map_with<U, F>(&self, others: &[&Range<T>], f: F) -> Range<U>
    where
        F: FnMut(&[T]) -> U,
    {
        Range::vector(self.map_to_vec_with(others, f))
    }

    pub fn map_to_vec<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        let mut out = Vec::with_capacity(self.len);
        for i in 0..self.len {
            out.push(f(self.at(i)));
        }
        out
    }

    pub fn map_to_vec_with<U, F>(&self, others: &[&Range<T>], mut f: F) -> Vec<U>
    where
        F: FnMut(&[T]) -> U,
    {
        let len = self.shared_len(others);
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            out.push(f(&self.pack(others, i)));
        }
        out
    }

    /// Keep the `Some` results of `f`, in order.
    pub fn filter_map<U, F>(&self, f: F) -> Range<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        Range::vector(self.filter_map_to_vec(f))
    }

    pub fn filter_map_with<U, F>(&self, others: &[&Range<T>], f: F) -> Range<U>
    where
        F: FnMut(&[T]) -> Option<U>,
    {
        Range::vector(self.filter_map_to_vec_with(others, f))
    }

    pub fn filter_map_to_vec<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        let mut out = Vec::new();
        for i in 0..self.len {
            if let Some(value) = f(self.at(i)) {
                out.push(value);
            }
        }
        out
    }

    pub fn filter_map_to_vec_with<U, F>(&self, others: &[&Range<T>], mut f: F) -> Vec<U>
    where
        F: FnMut(&[T]) -> Option<U>,
    {
        let len = self.shared_len(others);
        let mut out = Vec::new();
        for i in 0..len {
            if let Some(value) = f(&self.pack(others, i)) {
                out.push(value);
            }
        }
        out
    }

    /// The elements satisfying `pred`, compacted into a new array.
    pub fn filter<F>(&self, pred: F) -> Range<T>
    where
        F: FnMut(&T) -> bool,
    {
        Range::vector(self.filter_to_vec(pred))
    }

    /// The elements failing `pred`; the complement of [`Range::filter`].
    pub fn remove<F>(&self, pred: F) -> Range<T>
    where
        F: FnMut(&T) -> bool,
    {
        Range::vector(self.remove_to_vec(pred))
    }

    pub fn filter_to_vec<F>(&self, mut pred: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| pred(item)).collect()
    }

    pub fn remove_to_vec<F>(&self, mut pred: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| !pred(item)).collect()
    }

    // =========================================================================
    // Two ranges of different element types
    // =========================================================================

    /// Left fold over pairs from this range and `other`, up to the shorter length.
    pub fn zip_fold<U, A, F>(&self, other: &Range<U>, init: A, mut f: F) -> A
    where
        U: Clone,
        F: FnMut(A, T, U) -> A,
    {
        let len = self.len.min(other.len);
        let mut acc = init;
        for i in 0..len {
            acc = f(acc, self.at(i), other.at(i));
        }
        acc
    }

    /// Right fold over pairs, starting from the last shared index.
    pub fn zip_fold_right<U, A, F>(&self, other: &Range<U>, init: A, mut f: F) -> A
    where
        U: Clone,
        F: FnMut(A, T, U) -> A,
    {
        let len = self.len.min(other.len);
        let mut acc = init;
        for i in (0..len).rev() {
            acc = f(acc, self.at(i), other.at(i));
        }
        acc
    }

    /// Combine pairs into a new array-backed range.
    pub fn zip_map<U, V, F>(&self, other: &Range<U>, f: F) -> Range<V>
    where
        U: Clone,
        F: FnMut(T, U) -> V,
    {
        Range::vector(self.zip_map_to_vec(other, f))
    }

    pub fn zip_map_to_vec<U, V, F>(&self, other: &Range<U>, mut f: F) -> Vec<V>
    where
        U: Clone,
        F: FnMut(T, U) -> V,
    {
        let len = self.len.min(other.len);
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            out.push(f(self.at(i), other.at(i)));
        }
        out
    }

    // =========================================================================
    // Observers
    // =========================================================================

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        for i in 0..self.len {
            f(self.at(i));
        }
    }

    pub fn for_each_with<F>(&self, others: &[&Range<T>], mut f: F)
    where
        F: FnMut(&[T]),
    {
        let len = self.shared_len(others);
        for i in 0..len {
            f(&self.pack(others, i));
        }
    }

    /// Number of elements satisfying `pred`.
    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.fold(0, |n, item| if pred(&item) { n + 1 } else { n })
    }

    pub fn count_with<F>(&self, others: &[&Range<T>], mut pred: F) -> usize
    where
        F: FnMut(&[T]) -> bool,
    {
        self.fold_with(others, 0, |n, items| if pred(items) { n + 1 } else { n })
    }

    /// True if `pred` holds anywhere. Every element is visited.
    pub fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.fold(false, |found, item| pred(&item) || found)
    }

    pub fn any_with<F>(&self, others: &[&Range<T>], mut pred: F) -> bool
    where
        F: FnMut(&[T]) -> bool,
    {
        self.fold_with(others, false, |found, items| pred(items) || found)
    }

    /// The last `Some` that `f` produces over a full scan.
    pub fn any_map<U, F>(&self, mut f: F) -> Option<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        self.fold(None, |last, item| f(item).or(last))
    }

    pub fn any_map_with<U, F>(&self, others: &[&Range<T>], mut f: F) -> Option<U>
    where
        F: FnMut(&[T]) -> Option<U>,
    {
        self.fold_with(others, None, |last, items| f(items).or(last))
    }

    /// True unless some element fails `pred`; stops at the first failure.
    pub fn every<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        for i in 0..self.len {
            if !pred(&self.at(i)) {
                return false;
            }
        }
        true
    }

    pub fn every_with<F>(&self, others: &[&Range<T>], mut pred: F) -> bool
    where
        F: FnMut(&[T]) -> bool,
    {
        let len = self.shared_len(others);
        for i in 0..len {
            if !pred(&self.pack(others, i)) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> Range<i32> {
        Range::vector(vec![1, 2, 3, 4, 5])
    }

    #[test]
    fn fold_is_ascending() {
        let order = digits().fold(vec![], |mut seen, x| {
            seen.push(x);
            seen
        });
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
        assert_eq!(digits().fold(0, |acc, x| acc * 10 + x), 12345);
    }

    #[test]
    fn fold_right_associates_from_the_end() {
        assert_eq!(digits().fold_right(0, |acc, x| acc * 10 + x), 54321);
        let built = digits().fold_right(vec![], |mut out, x| {
            out.insert(0, x);
            out
        });
        assert_eq!(built, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn multi_fold_uses_shortest_length() {
        let a = Range::vector(vec![1, 2, 3]);
        let b = Range::vector(vec![10, 20]);
        let sum = a.fold_with(&[&b], 0, |acc, xs| acc + xs[0] + xs[1]);
        assert_eq!(sum, 33);

        let pairs = a.fold_right_with(&[&b], vec![], |mut out, xs| {
            out.push((xs[0], xs[1]));
            out
        });
        assert_eq!(pairs, vec![(2, 20), (1, 10)]);
    }

    #[test]
    fn multi_forms_agree_with_single_forms() {
        let r = digits();
        assert_eq!(
            r.fold_with(&[], 0, |acc, xs| acc * 10 + xs[0]),
            r.fold(0, |acc, x| acc * 10 + x),
        );
        assert_eq!(r.map_to_vec_with(&[], |xs| xs[0] * 2), r.map_to_vec(|x| x * 2));
        assert_eq!(r.count_with(&[], |xs| xs[0] > 2), r.count(|x| *x > 2));
    }

    #[test]
    fn map_realizes_a_flat_range() {
        let doubled = digits().reverse().map(|x| x * 2);
        assert_eq!(doubled.complexity(), 0);
        assert_eq!(doubled.to_vec(), vec![10, 8, 6, 4, 2]);

        let labels = digits().map(|x| format!("#{x}"));
        assert_eq!(labels.get(0), Ok("#1".to_string()));
    }

    #[test]
    fn map_with_zips() {
        let a = Range::vector(vec![1, 2, 3]);
        let b = Range::vector(vec![4, 5, 6, 7]);
        let c = Range::vector(vec![7, 8, 9]);
        let sums = a.map_with(&[&b, &c], |xs| xs.iter().sum::<i32>());
        assert_eq!(sums.to_vec(), vec![12, 15, 18]);
    }

    #[test]
    fn filter_and_remove_split_elements() {
        let evens = digits().filter(|x| x % 2 == 0);
        let odds = digits().remove(|x| x % 2 == 0);
        assert_eq!(evens.to_vec(), vec![2, 4]);
        assert_eq!(odds.to_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn filter_map_drops_none() {
        let halves = digits().filter_map(|x| if x % 2 == 0 { Some(x / 2) } else { None });
        assert_eq!(halves.to_vec(), vec![1, 2]);

        let a = Range::vector(vec![1, 2, 3]);
        let b = Range::vector(vec![3, 2, 1]);
        let same = a.filter_map_to_vec_with(&[&b], |xs| (xs[0] == xs[1]).then_some(xs[0]));
        assert_eq!(same, vec![2]);
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = vec![];
        digits().take(3).unwrap().for_each(|x| seen.push(x));
        assert_eq!(seen, vec![1, 2, 3]);

        let mut products = vec![];
        let b = Range::vector(vec![2, 2]);
        digits().for_each_with(&[&b], |xs| products.push(xs[0] * xs[1]));
        assert_eq!(products, vec![2, 4]);
    }

    #[test]
    fn count_matches() {
        assert_eq!(digits().count(|x| *x >= 3), 3);
        let b = Range::vector(vec![1, 0, 3]);
        assert_eq!(digits().count_with(&[&b], |xs| xs[0] == xs[1]), 2);
    }

    #[test]
    fn any_scans_everything() {
        let mut calls = 0;
        assert!(digits().any(|x| {
            calls += 1;
            *x == 1
        }));
        assert_eq!(calls, 5);
        assert!(!digits().any(|x| *x > 5));
    }

    #[test]
    fn any_map_returns_last_hit() {
        let hit = digits().any_map(|x| (x % 2 == 1).then_some(x * 100));
        assert_eq!(hit, Some(500));
        assert_eq!(digits().any_map(|_| None::<i32>), None);

        let b = Range::vector(vec![1, 2, 0, 4]);
        let hit = digits().any_map_with(&[&b], |xs| (xs[0] == xs[1]).then_some(xs[0]));
        assert_eq!(hit, Some(4));
    }

    #[test]
    fn every_stops_on_first_failure() {
        let mut calls = 0;
        assert!(!digits().every(|x| {
            calls += 1;
            *x < 2
        }));
        assert_eq!(calls, 2);
        assert!(digits().every(|x| *x > 0));
    }

    #[test]
    fn every_is_vacuous_on_empty() {
        let empty: Range<i32> = Range::empty();
        assert!(empty.every(|_| false));
        assert!(digits().every_with(&[&empty], |_| false));
        assert!(!digits().any_with(&[&empty], |_| true));
    }

    #[test]
    fn zip_mixes_element_types() {
        let positions = Range::numeric(0usize, 10).unwrap();
        let letters = Range::string("abc");
        let tagged = letters.zip_map(&positions, |c, i| format!("{c}{i}"));
        assert_eq!(tagged.to_vec(), vec!["a0", "b1", "c2"]);

        let weighted = positions.zip_fold(&letters, 0, |acc, i, c| acc + i * c.len_utf8());
        assert_eq!(weighted, 3);

        let reversed = letters.zip_fold_right(&positions, String::new(), |mut out, c, i| {
            out.push(c);
            out.push_str(&i.to_string());
            out
        });
        assert_eq!(reversed, "c2b1a0");
    }

    #[test]
    fn zip_stops_at_shorter_range() {
        let empty: Range<f64> = Range::empty();
        assert!(digits().zip_map(&empty, |x, y| x as f64 + y).is_empty());
        assert_eq!(digits().zip_fold(&empty, 7, |acc, _, _| acc + 1), 7);
        let flags = Range::vector(vec![true, false]);
        assert_eq!(digits().zip_map_to_vec(&flags, |x, keep| keep.then_some(x)), vec![Some(1), None]);
    }
}
