//! Fisher–Yates shuffle over a copy of the input.

use rand::Rng;

/// Uniformly random permutation of `items`, drawn from the thread-local
/// generator. The input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// [`shuffle`] with a caller-supplied generator.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    rng: &mut R,
) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
