//! Random permutations.

use rand::Rng;

use crate::collection::map;

/// Returns a shuffled copy of `array`, using the thread-local generator.
///
/// # Examples
///
/// ```rust
/// use eachfold::function::shuffle;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&numbers);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, numbers);
/// ```
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::rng())
}

/// Returns a shuffled copy of `array`, drawing from `rng`.
///
/// Fisher–Yates: walking down from the last position, each position is
/// swapped with a uniformly chosen position at or below it, so every
/// permutation is equally likely. `array` is left untouched.
///
/// # Examples
///
/// ```rust
/// use eachfold::function::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let letters = ["a", "b", "c", "d"];
/// let first = shuffle_with(&letters, &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&letters, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, G>(array: &[T], rng: &mut G) -> Vec<T>
where
    T: Clone,
    G: Rng + ?Sized,
{
    let mut shuffled = map(array, |value, _, _| value.clone());
    let mut position = shuffled.len();
    while position > 1 {
        position -= 1;
        let other = rng.random_range(0..=position);
        shuffled.swap(position, other);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use rustc_hash::FxHashSet;

    #[rstest]
    #[case(&[])]
    #[case(&[42])]
    fn test_short_arrays_are_copied(#[case] array: &[i32]) {
        assert_eq!(shuffle(array), array.to_vec());
    }

    #[rstest]
    fn test_input_is_not_mutated() {
        let numbers: Vec<i32> = (0..20).collect();
        let _ = shuffle(&numbers);
        assert_eq!(numbers, (0..20).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_result_is_a_permutation() {
        let numbers: Vec<i32> = (0..50).collect();
        let mut shuffled = shuffle_with(&numbers, &mut StdRng::seed_from_u64(1));
        shuffled.sort_unstable();
        assert_eq!(shuffled, numbers);
    }

    #[rstest]
    fn test_every_permutation_of_three_appears() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: FxHashSet<Vec<char>> = (0..600)
            .map(|_| shuffle_with(&['a', 'b', 'c'], &mut rng))
            .collect();
        assert_eq!(seen.len(), 6);
    }
}
