//! Small robust-statistics helpers shared by the discovery stage.

use std::collections::HashSet;
use std::hash::Hash;

/// Median with the even-length convention of averaging the two middle values.
///
/// Sorts `values` in place. Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let m = values.len();
    let mid = if m % 2 == 1 {
        values[m / 2]
    } else {
        0.5 * (values[m / 2 - 1] + values[m / 2])
    };
    Some(mid)
}

/// Median of a projection over borrowed records.
pub fn median_by<T, F>(items: &[T], f: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    let mut values: Vec<f64> = items.iter().map(f).collect();
    median(&mut values)
}

/// Number of distinct frame keys in `timestamps`.
pub fn distinct_timestamps<I>(timestamps: I) -> usize
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    timestamps.into_iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&mut []), None);
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn median_ignores_outlier_magnitude() {
        let mut base: Vec<f64> = vec![40.0; 20];
        base.push(400.0);
        let with_big = median(&mut base.clone()).unwrap();
        *base.last_mut().unwrap() = 4.0e6;
        let with_huge = median(&mut base).unwrap();
        assert_eq!(with_big, 40.0);
        assert_eq!(with_huge, 40.0);
    }

    #[test]
    fn distinct_counts_each_key_once() {
        let keys: Vec<Timestamp> = [0.0f64, -0.0, 1.0, 1.0, 2.5]
            .into_iter()
            .map(Timestamp::from)
            .chain([Timestamp::Int(1), Timestamp::from("1")])
            .collect();
        // A `&str` key is always a label, even when it looks numeric.
        assert_eq!(distinct_timestamps(&keys), 4);
        assert_eq!(distinct_timestamps(Vec::<Timestamp>::new()), 0);
    }

    #[test]
    fn nanosecond_frame_ids_do_not_collapse() {
        let base: i64 = 1_700_000_000_000_000_000;
        let keys: Vec<Timestamp> = (0..10).map(|i| Timestamp::Int(base + i)).collect();
        assert_eq!(distinct_timestamps(&keys), 10);
    }
}
