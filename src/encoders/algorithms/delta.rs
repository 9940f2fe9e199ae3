//! Gap (delta) transform for sorted sequences.
//!
//! Sorted posting or adjacency lists compress far better as gaps between
//! neighbours. Arithmetic wraps, so any input round-trips even if it is not
//! actually sorted.

/// Replace `data[i]` with `data[i] - data[i - 1]`, in place.
pub fn to_gaps_inplace(data: &mut [u32]) {
    // Backwards so each subtraction still sees the original predecessor.
    for i in (1..data.len()).rev() {
        data[i] = data[i].wrapping_sub(data[i - 1]);
    }
}

/// Prefix-sum `data` in place, undoing [`to_gaps_inplace`].
pub fn from_gaps_inplace(data: &mut [u32]) {
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(data[i - 1]);
    }
}

/// Gap-encode a copy of `sorted`.
pub fn to_gaps(sorted: &[u32]) -> Vec<u32> {
    let mut data = sorted.to_vec();
    to_gaps_inplace(&mut data);
    data
}

/// Rebuild the original sequence from gaps.
pub fn from_gaps(gaps: &[u32]) -> Vec<u32> {
    let mut data = gaps.to_vec();
    from_gaps_inplace(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_of_sorted_list() {
        let sorted = [3, 7, 7, 20, 1_000_000];
        let gaps = to_gaps(&sorted);
        assert_eq!(gaps, vec![3, 4, 0, 13, 999_980]);
        assert_eq!(from_gaps(&gaps), sorted);
    }

    #[test]
    fn test_gaps_wrap_on_unsorted_input() {
        let data = [10, 2, u32::MAX, 0];
        let gaps = to_gaps(&data);
        assert_eq!(gaps[1], 2u32.wrapping_sub(10));
        assert_eq!(from_gaps(&gaps), data);
    }

    #[test]
    fn test_gaps_short_inputs() {
        assert!(to_gaps(&[]).is_empty());
        assert_eq!(to_gaps(&[42]), vec![42]);
        assert_eq!(from_gaps(&[42]), vec![42]);
    }
}
