use num_traits::{Float, FromPrimitive};

/// Returns `n` evenly spaced values covering `[start, end]`.
///
/// The last value is pinned to `end` exactly, so a grid built from knot
/// extremes always spans the full knot range. Requires `n >= 2`.
pub(crate) fn linspace<T>(start: T, end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    debug_assert!(n >= 2);
    let dx = (end - start) / T::from(n - 1).unwrap();
    (0..n).map(move |k| {
        if k == n - 1 {
            end
        } else {
            start + T::from(k).unwrap() * dx
        }
    })
}
