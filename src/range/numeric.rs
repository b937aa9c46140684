//! Arithmetic progressions.

use super::Range;
use crate::error::{RangeError, Result};

/// A numeric type a range can step through.
pub trait Progression: Copy + PartialOrd + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// `ceil(max(0, (end - start) / step))` for a non-zero `step`, or `None`
    /// when that count is not a finite `usize`.
    fn span(start: Self, end: Self, step: Self) -> Option<usize>;

    /// `start + n * step`.
    fn nth(start: Self, step: Self, n: usize) -> Self;

    /// True when stepping `len - 1` times from `start` would not land where
    /// exact arithmetic says it should.
    fn drifts(start: Self, end: Self, step: Self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let second = Self::nth(start, step, 1);
        let last = Self::nth(start, step, len - 1);
        if step > Self::ZERO && start < end {
            return !(second > start && last < end);
        }
        if step < Self::ZERO && start > end {
            return !(second < start && last > end);
        }
        false
    }
}

macro_rules! integer_progression {
    ($($t:ty),*) => {$(
        impl Progression for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn span(start: Self, end: Self, step: Self) -> Option<usize> {
                let diff = end as i128 - start as i128;
                let step = step as i128;
                if diff == 0 || (diff > 0) != (step > 0) {
                    return Some(0);
                }
                let (diff, step) = (diff.abs(), step.abs());
                usize::try_from((diff + step - 1) / step).ok()
            }

            fn nth(start: Self, step: Self, n: usize) -> Self {
                (start as i128 + n as i128 * step as i128) as $t
            }

            // Integer steps are exact.
            fn drifts(_: Self, _: Self, _: Self, _: usize) -> bool {
                false
            }
        }
    )*};
}

macro_rules! float_progression {
    ($($t:ty),*) => {$(
        impl Progression for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn span(start: Self, end: Self, step: Self) -> Option<usize> {
                let steps = (end - start) / step;
                if steps.is_nan() || steps == <$t>::INFINITY {
                    return None;
                }
                let len = steps.max(0.0).ceil();
                if len >= usize::MAX as $t {
                    return None;
                }
                Some(len as usize)
            }

            fn nth(start: Self, step: Self, n: usize) -> Self {
                start + n as $t * step
            }
        }
    )*};
}

integer_progression!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
float_progression!(f32, f64);

impl<N: Progression> Range<N> {
    /// `start, start + 1, ...` up to but excluding `end`.
    pub fn numeric(start: N, end: N) -> Result<Range<N>> {
        Range::numeric_step(start, end, N::ONE)
    }

    /// `start, start + step, ...` up to but excluding `end`.
    ///
    /// Fails when `step` is zero, or when floating-point rounding would make
    /// the progression disagree with its own computed length.
    pub fn numeric_step(start: N, end: N, step: N) -> Result<Range<N>> {
        if step == N::ZERO {
            return Err(RangeError::InvalidArgument("numeric range with zero step"));
        }
        let Some(len) = N::span(start, end, step) else {
            log::trace!("numeric range length is not representable");
            return Err(RangeError::InvalidArgument("invalid numeric range parameters"));
        };
        if N::drifts(start, end, step, len) {
            log::trace!("numeric range of {len} steps drifts under rounding");
            return Err(RangeError::InvalidArgument("invalid numeric range parameters"));
        }
        return Ok(Range::new(len, move |i| N::nth(start, step, i)));
    }
}
