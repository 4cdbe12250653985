//! Positional pairing of two sequences.

/// Zips two sequences index by index, stopping at the shorter one.
///
/// Position `i` of `a` is always paired with position `i` of `b`; there is no
/// reordering or matching beyond index alignment.
pub fn pair<A, B>(a: impl IntoIterator<Item = A>, b: impl IntoIterator<Item = B>) -> Vec<(A, B)> {
    a.into_iter().zip(b).collect()
}
