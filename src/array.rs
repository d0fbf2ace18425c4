//! Range helpers over plain slices.

use log::trace;

use crate::Error;

/// Reverses `items[start..=end]` in place and returns the whole slice.
///
/// Bounds are clamped rather than rejected: a `start` outside `0..len`
/// becomes `0`, and an `end` that is `None` or outside `0..len` becomes the
/// last index. After clamping the range must contain at least two elements.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] when the clamped `start` is not before the
/// clamped `end`, which includes every empty or single-element slice.
///
/// # Examples
///
/// ```
/// use indexed_list::array::reverse_range;
///
/// let mut items = [1, 9, 2, 8, 3, 7];
/// reverse_range(&mut items, None, None).unwrap();
/// assert_eq!(items, [7, 3, 8, 2, 9, 1]);
///
/// let mut items = [1, 9, 2, 8, 3, 7, 4, 6];
/// reverse_range(&mut items, Some(3), Some(6)).unwrap();
/// assert_eq!(items, [1, 9, 2, 4, 7, 3, 8, 6]);
///
/// let mut empty: [i32; 0] = [];
/// assert!(reverse_range(&mut empty, Some(3), Some(6)).is_err());
/// ```
pub fn reverse_range<T>(
    items: &mut [T],
    start: Option<usize>,
    end: Option<usize>,
) -> Result<&mut [T], Error> {
    let len = items.len();
    let start = start.filter(|&start| start < len).unwrap_or(0);
    let end = end
        .filter(|&end| end < len)
        .unwrap_or_else(|| len.saturating_sub(1));

    if start >= end {
        return Err(Error::InvalidRange { start, end });
    }

    trace!("reversing range {start}..={end} of {len} items");
    items[start..=end].reverse();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_reverse_whole_slice() {
        let mut items = vec![1, 9, 2, 8, 3, 7];
        let reversed = reverse_range(&mut items, None, None).unwrap();
        assert_eq!(reversed, [7, 3, 8, 2, 9, 1]);
    }

    #[test]
    fn test_reverse_inner_range_is_inclusive() {
        let mut items = vec![1, 9, 2, 8, 3, 7, 4, 6];
        reverse_range(&mut items, Some(3), Some(6)).unwrap();
        assert_eq!(items, [1, 9, 2, 4, 7, 3, 8, 6]);
    }

    #[test]
    fn test_out_of_range_bounds_clamp() {
        let mut items = vec![1, 9, 2, 8, 3, 7, 4, 6];
        reverse_range(&mut items, Some(42), Some(99)).unwrap();
        assert_eq!(items, [6, 4, 7, 3, 8, 2, 9, 1]);
    }

    #[test]
    fn test_two_elements() {
        let mut items = ['a', 'b'];
        reverse_range(&mut items, None, None).unwrap();
        assert_eq!(items, ['b', 'a']);
    }

    #[test]
    fn test_invalid_ranges() {
        let mut empty: [u8; 0] = [];
        assert_eq!(
            reverse_range(&mut empty, Some(3), Some(6)),
            Err(Error::InvalidRange { start: 0, end: 0 })
        );

        let mut single = [5];
        assert_eq!(
            reverse_range(&mut single, None, None),
            Err(Error::InvalidRange { start: 0, end: 0 })
        );

        let mut items = [1, 2, 3, 4];
        assert_eq!(
            reverse_range(&mut items, Some(3), Some(1)),
            Err(Error::InvalidRange { start: 3, end: 1 })
        );
        assert_eq!(items, [1, 2, 3, 4]);
    }
}
