use core::ops::{Bound, Range, RangeBounds};

/// Resolves `range` against a sequence of length `len`.
///
/// # Panics
///
/// Panics if the range starts after it ends or ends past `len`.
#[track_caller]
#[must_use]
pub(crate) fn range<R>(range: R, len: usize) -> Range<usize>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .unwrap_or_else(|| panic!("attempted to erase from after maximum usize")),
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .unwrap_or_else(|| panic!("attempted to erase up to maximum usize")),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        panic!("erase range starts at {start} but ends at {end}");
    }
    if end > len {
        panic!("erase range end {end} out of range for vector of length {len}");
    }

    start..end
}
