// Copyright 2026 The studydeck Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;

/// Returns a uniformly random permutation of `deck`.
///
/// Fisher-Yates over a copy: the input is never mutated. Empty and
/// single-element decks come back unchanged.
pub fn shuffle<T: Clone, R: Rng>(deck: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled: Vec<T> = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let deck: Vec<u32> = (0..100).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let shuffled = shuffle(&deck, &mut rng);
        assert_eq!(shuffled.len(), deck.len());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, deck);
    }

    #[test]
    fn test_shuffle_does_not_mutate_the_input() {
        let deck: Vec<u32> = (0..50).collect();
        let original = deck.clone();
        let mut rng = StdRng::seed_from_u64(2);
        let _ = shuffle(&deck, &mut rng);
        assert_eq!(deck, original);
    }

    #[test]
    fn test_shuffle_empty_and_singleton() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&[7], &mut rng), vec![7]);
    }

    #[test]
    fn test_shuffle_is_deterministic_under_a_seed() {
        let deck: Vec<u32> = (0..20).collect();
        let mut a = StdRng::seed_from_u64(4);
        let mut b = StdRng::seed_from_u64(4);
        assert_eq!(shuffle(&deck, &mut a), shuffle(&deck, &mut b));
    }
}
