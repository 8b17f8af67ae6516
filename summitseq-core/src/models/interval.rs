// Interval layout follows rust-lapper:
// https://github.com/sstadick/rust-lapper/blob/7e3904daed85181f1faa39b15f51935f13945976/src/lib.rs#L92
use num_traits::{PrimInt, Unsigned, identities::zero};
use std::cmp::Ordering;

/// A `[start, end)` interval on a single chromosome carrying a payload `val`.
///
/// Intervals order by `(start, end)` and compare equal on coordinates alone;
/// the payload does not take part in either.
#[derive(Eq, Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Half-open overlap test against `[start, end)`.
    #[inline]
    pub fn overlap(&self, start: I, end: I) -> bool {
        self.start < end && start < self.end
    }

    #[inline]
    pub fn len(&self) -> I {
        self.end.checked_sub(&self.start).unwrap_or_else(zero::<I>)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == zero::<I>()
    }
}

impl<I, T> Ord for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I, T>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<I, T> PartialOrd for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, T> PartialEq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_overlap_is_half_open() {
        let a = Interval { start: 10u32, end: 20, val: () };

        assert!(a.overlap(15, 16));
        assert!(a.overlap(0, 11));
        assert!(!a.overlap(20, 25));
        assert!(!a.overlap(0, 10));
    }

    #[rstest]
    fn test_len_and_order() {
        let a = Interval { start: 10u32, end: 20, val: "a" };
        let b = Interval { start: 10u32, end: 30, val: "b" };
        let c = Interval { start: 10u32, end: 20, val: "c" };

        assert_eq!(a.len(), 10);
        assert!(!a.is_empty());
        assert!(a < b);
        assert_eq!(a, c);
    }
}
