use num_traits::{
    PrimInt, Unsigned,
    identities::{one, zero},
};

use super::Overlapper;
use summitseq_core::models::Interval;

/// A Binary Interval Search data structure for overlap queries on one chromosome.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// Keeps the intervals sorted by start alongside separately sorted start and end
/// coordinates, so an overlap count is two binary searches and a listing is a
/// bounded linear scan.
///
/// ```
/// use summitseq_overlaprs::{Bits, Overlapper, Interval};
///
/// let peaks = vec![
///     Interval { start: 100u32, end: 200, val: 0usize },
///     Interval { start: 150, end: 250, val: 1 },
///     Interval { start: 400, end: 500, val: 2 },
/// ];
///
/// let mut bits = Bits::build(peaks);
/// assert_eq!(bits.count(180, 220), 2);
/// assert!(!bits.any_overlap(250, 400));
///
/// bits.insert(Interval { start: 300, end: 350, val: 3 });
/// assert!(bits.any_overlap(250, 400));
/// ```
#[derive(Debug, Clone)]
pub struct Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// List of intervals, sorted by (start, end)
    pub intervals: Vec<Interval<I, T>>,
    /// Sorted list of start positions,
    starts: Vec<I>,
    /// Sorted list of end positions,
    ends: Vec<I>,
    /// The length of the longest interval
    max_len: I,
}

impl<I, T> Overlapper<I, T> for Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Create a new instance of Bits from a vector of Intervals. The vector is
    /// sorted by start on the way in.
    fn build(mut intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        intervals.sort();
        let (mut starts, mut ends): (Vec<_>, Vec<_>) =
            intervals.iter().map(|x| (x.start, x.end)).unzip();
        starts.sort();
        ends.sort();
        let max_len = intervals
            .iter()
            .map(|interval| interval.len())
            .max()
            .unwrap_or_else(zero::<I>);

        Bits {
            intervals,
            starts,
            ends,
            max_len,
        }
    }

    /// Find all intervals that overlap start .. stop
    #[inline]
    fn find(&self, start: I, stop: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, stop).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        stop: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(IterFind {
            inner: self,
            off: Self::lower_bound(
                start.checked_sub(&self.max_len).unwrap_or_else(zero::<I>),
                &self.intervals,
            ),
            start,
            stop,
        })
    }

    /// Insert a new interval after the Bits has been created, keeping every
    /// internal list sorted. Linear in the number of stored intervals.
    fn insert(&mut self, elem: Interval<I, T>) {
        let starts_insert_index = Self::bsearch_seq(elem.start, &self.starts);
        let stops_insert_index = Self::bsearch_seq(elem.end, &self.ends);
        let intervals_insert_index = Self::bsearch_seq_ref(&elem, &self.intervals);

        self.max_len = self.max_len.max(elem.len());
        self.starts.insert(starts_insert_index, elem.start);
        self.ends.insert(stops_insert_index, elem.end);
        self.intervals.insert(intervals_insert_index, elem);
    }

    #[inline]
    fn any_overlap(&self, start: I, stop: I) -> bool {
        start < stop && self.count(start, stop) > 0
    }
}

impl<I, T> Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Get the number over intervals in Bits
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check if Bits is empty (i.e. has no intervals)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate the stored intervals in start order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<I, T>> {
        self.intervals.iter()
    }

    /// First index that can overlap a query, found by binary search.
    /// `start` must already have the longest interval length subtracted.
    #[inline]
    pub fn lower_bound(start: I, intervals: &[Interval<I, T>]) -> usize {
        intervals.partition_point(|v| v.start < start)
    }

    /// Insertion position of `key` in a sorted slice.
    #[inline]
    pub fn bsearch_seq<K>(key: K, elems: &[K]) -> usize
    where
        K: PartialEq + PartialOrd,
    {
        Self::bsearch_seq_ref(&key, elems)
    }

    /// Insertion position of `key` in a sorted slice: the first index where
    /// `elems[index] >= key`, or `elems.len()` when every element is smaller.
    #[inline]
    pub fn bsearch_seq_ref<K>(key: &K, elems: &[K]) -> usize
    where
        K: PartialEq + PartialOrd,
    {
        elems.partition_point(|elem| elem < key)
    }

    /// Count all intervals that overlap start .. stop. Two binary searches find
    /// the intervals ending at or before `start` and those starting at or after
    /// `stop`; everything else overlaps. See
    /// [BITS](https://arxiv.org/pdf/1208.3407.pdf) for details.
    #[inline]
    pub fn count(&self, start: I, stop: I) -> usize {
        let len = self.intervals.len();
        // Plus one to account for half-openness of the intervals compared to BITS paper.
        // Every end is <= I::max_value(), so nothing can overlap a query starting there.
        let first = match start.checked_add(&one::<I>()) {
            Some(after_start) => Self::bsearch_seq(after_start, &self.ends),
            None => len,
        };
        let last = Self::bsearch_seq(stop, &self.starts);
        let num_cant_after = len - last;
        len.saturating_sub(first + num_cant_after)
    }
}

/// Iterator over the intervals of a [`Bits`] that overlap a query range.
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    inner: &'a Bits<I, T>,
    off: usize,
    start: I,
    stop: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a Interval<I, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(interval) = self.inner.intervals.get(self.off) {
            self.off += 1;
            if interval.overlap(self.start, self.stop) {
                return Some(interval);
            } else if interval.start >= self.stop {
                break;
            }
        }
        None
    }
}

impl<'a, I, T> IntoIterator for &'a Bits<I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a Interval<I, T>;
    type IntoIter = std::slice::Iter<'a, Interval<I, T>>;

    fn into_iter(self) -> std::slice::Iter<'a, Interval<I, T>> {
        self.intervals.iter()
    }
}
