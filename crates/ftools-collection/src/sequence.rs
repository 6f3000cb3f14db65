//! Flat helpers for sequences.

/// Collect the elements at `indices`, in the order given.
///
/// Indices past the end are skipped.
///
/// # Example
///
/// ```
/// use ftools_collection::sequence;
///
/// assert_eq!(sequence::pick([1, 2], &[1, 2, 3]), vec![2, 3]);
/// assert_eq!(sequence::pick([1, 2], &[1, 2]), vec![2]);
/// ```
pub fn pick<T: Clone>(indices: impl IntoIterator<Item = usize>, sequence: &[T]) -> Vec<T> {
    indices
        .into_iter()
        .filter_map(|idx| sequence.get(idx).cloned())
        .collect()
}

/// Copy `sequence` without the elements at `indices`.
///
/// Indices past the end are ignored, and an index listed twice is removed
/// once.
pub fn omit<T: Clone>(indices: impl IntoIterator<Item = usize>, sequence: &[T]) -> Vec<T> {
    let mut indices: Vec<usize> = indices.into_iter().collect();
    indices.sort_unstable();
    indices.dedup();
    sequence
        .iter()
        .enumerate()
        .filter(|(idx, _)| indices.binary_search(idx).is_err())
        .map(|(_, item)| item.clone())
        .collect()
}

/// All but the last element.
pub fn initial<T>(sequence: &[T]) -> &[T] {
    match sequence.split_last() {
        Some((_, init)) => init,
        None => sequence,
    }
}

pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}
