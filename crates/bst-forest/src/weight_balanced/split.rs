use tracing::trace;

/// Result of [`find_split_point`]: the chosen key and the weight sums of
/// the subranges strictly before and after it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Split {
    pub index: usize,
    pub sum_before: f64,
    pub sum_after: f64,
}

impl Split {
    fn at(index: usize, sum_before: f64, sum_after: f64) -> Self {
        Self {
            index,
            sum_before,
            sum_after,
        }
    }
}

/// Picks the index in `start..end` whose removal leaves the weight on
/// either side as even as the greedy scan can find.
///
/// `sum` must be the total weight of `weights[start..end]`. Two cursors
/// walk toward each other: `i` up from `start`, `j` down from `end - 1`.
/// Each round `i` moves first; a cursor stops as soon as one more step
/// would make its imbalance `|after - before|` strictly worse, and the
/// first cursor to stop wins. A cursor that reaches the far end of the
/// range stops there.
///
/// This is a local search, not an exhaustive one.
///
/// # Panics
///
/// If the range is empty or runs past `weights`.
pub fn find_split_point(start: usize, end: usize, sum: f64, weights: &[f64]) -> Split {
    assert!(
        start < end && end <= weights.len(),
        "invalid split range {start}..{end} over {} weights",
        weights.len()
    );
    if end == start + 1 {
        return Split::at(start, 0.0, 0.0);
    }

    let mut i = start;
    let mut j = end - 1;
    let mut i_before = 0.0;
    let mut i_after = sum - weights[i];
    let mut j_before = sum - weights[j];
    let mut j_after = 0.0;
    let mut i_diff = i_after;
    let mut j_diff = j_before;

    loop {
        if i + 1 == end {
            return stop(start, end, 'i', Split::at(i, i_before, i_after));
        }
        let next = ((i_after - weights[i + 1]) - (i_before + weights[i])).abs();
        if next > i_diff {
            return stop(start, end, 'i', Split::at(i, i_before, i_after));
        }
        i_before += weights[i];
        i += 1;
        i_after -= weights[i];
        i_diff = next;

        if j == start {
            return stop(start, end, 'j', Split::at(j, j_before, j_after));
        }
        let next = ((j_before - weights[j - 1]) - (j_after + weights[j])).abs();
        if next > j_diff {
            return stop(start, end, 'j', Split::at(j, j_before, j_after));
        }
        j_after += weights[j];
        j -= 1;
        j_before -= weights[j];
        j_diff = next;
    }
}

#[inline]
fn stop(start: usize, end: usize, cursor: char, split: Split) -> Split {
    trace!(
        start,
        end,
        %cursor,
        index = split.index,
        before = split.sum_before,
        after = split.sum_after,
        "split found"
    );
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_all(weights: &[f64]) -> Split {
        find_split_point(0, weights.len(), weights.iter().sum(), weights)
    }

    #[test]
    fn singleton_range_returns_its_only_index() {
        assert_eq!(
            find_split_point(2, 3, 9.0, &[1.0, 1.0, 9.0, 1.0]),
            Split::at(2, 0.0, 0.0)
        );
    }

    #[test]
    fn picks_balanced_index() {
        assert_eq!(split_all(&[3.0, 4.0, 1.0, 2.0]), Split::at(1, 3.0, 3.0));
    }

    #[test]
    fn descending_cursor_can_win() {
        // Right half of the [3, 4, 1, 2] tree.
        assert_eq!(
            find_split_point(2, 4, 3.0, &[3.0, 4.0, 1.0, 2.0]),
            Split::at(3, 1.0, 0.0)
        );
    }

    #[test]
    fn ties_keep_advancing() {
        // Imbalance stays at 1 from index 3 to 4; only a strict increase stops.
        assert_eq!(split_all(&[1.0; 8]), Split::at(4, 4.0, 3.0));
    }

    #[test]
    fn ascending_cursor_checked_first() {
        // Both cursors stop in the same round (i at 2, j at 1); i wins.
        assert_eq!(split_all(&[2.0, 0.0, 0.0, 2.0]), Split::at(2, 2.0, 2.0));
    }

    #[test]
    fn zero_weights_stop_at_range_end() {
        assert_eq!(split_all(&[0.0, 0.0]), Split::at(1, 0.0, 0.0));
        assert_eq!(split_all(&[0.0, 0.0, 0.0]).index, 2);
    }

    #[test]
    fn heavy_first_weight() {
        let split = split_all(&[100.0, 0.4, 0.3, 0.2, 0.1, 0.0]);
        assert_eq!(split.index, 0);
        assert_eq!(split.sum_before, 0.0);
    }

    #[test]
    #[should_panic(expected = "invalid split range")]
    fn empty_range_panics() {
        find_split_point(1, 1, 0.0, &[1.0, 1.0]);
    }
}
