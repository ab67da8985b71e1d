use std::cmp::Ordering;

use itertools::Itertools;

pub mod equivalence;
pub mod input;

pub use equivalence::{AbsoluteValue, Equivalence, Reflection};

pub type Integer = i64;
pub type Count = usize;

/// Position of the first element that is greater than its successor, with
/// both values.
pub fn first_inversion(values: &[Integer]) -> Option<(usize, Integer, Integer)> {
    values
        .iter()
        .copied()
        .tuple_windows()
        .find_position(|(previous, next)| previous > next)
        .map(|(index, (previous, next))| (index, previous, next))
}

pub fn is_non_decreasing(values: &[Integer]) -> bool {
    first_inversion(values).is_none()
}

/// Counts the equivalence classes present in a non-decreasing sequence with a
/// single two-pointer pass.
///
/// Adjacent equal values at either end are collapsed before the ends are
/// compared against each other; that order is what keeps duplicates on one
/// side from being counted as separate classes.
///
/// `values` must be sorted. This is only checked in debug builds; unsorted
/// input gives an unspecified count.
pub fn count_unique_by<E>(values: &[Integer], equivalence: &E) -> Count
where
    E: Equivalence + ?Sized,
{
    debug_assert!(
        is_non_decreasing(values),
        "input must be sorted in non-decreasing order"
    );

    let mut equivalent = 0;
    let (mut head, mut tail) = (0, values.len().saturating_sub(1));
    while head < tail {
        if values[head] == values[head + 1] {
            equivalent += 1;
            head += 1;
            continue;
        }

        if values[tail - 1] == values[tail] {
            equivalent += 1;
            tail -= 1;
            continue;
        }

        match equivalence.balance(values[head], values[tail]) {
            Ordering::Equal => {
                equivalent += 1;
                head += 1;
                tail -= 1;
            }
            Ordering::Less => head += 1,
            Ordering::Greater => tail -= 1,
        }
    }

    let count = values.len() - equivalent;
    tracing::trace!(len = values.len(), equivalent, count, "scan finished");
    count
}

/// Number of distinct absolute values in a non-decreasing sequence.
pub fn count_unique_absolute_values(values: &[Integer]) -> Count {
    count_unique_by(values, &AbsoluteValue)
}

/// Number of distinct distances from `pivot` in a non-decreasing sequence.
pub fn count_unique_distances(values: &[Integer], pivot: Integer) -> Count {
    count_unique_by(values, &Reflection { pivot })
}

pub fn summary(count: Count) -> String {
    format!("Number of unique elements is {count}")
}
