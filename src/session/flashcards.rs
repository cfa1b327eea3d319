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

use std::collections::HashSet;

use rand::Rng;

use crate::shuffle::shuffle;
use crate::types::flashcard::Flashcard;

/// Which cards the working deck is built from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterMode {
    All,
    /// Only cards not yet marked as known.
    Unknown,
}

/// One pass through the flashcard deck.
///
/// The working deck is the full deck run through a filter-then-shuffle
/// pipeline. Known-card ids survive reshuffles and filter changes; only
/// `reset_progress` clears them. When the filter leaves no cards, the
/// session is *exhausted* and `reset_progress` is the only way out.
pub struct FlashcardSession {
    /// Every card in the catalog deck.
    full_deck: Vec<Flashcard>,
    /// The filtered, shuffled working deck.
    deck: Vec<Flashcard>,
    /// Valid position into `deck`, or 0 when the deck is empty.
    position: usize,
    flipped: bool,
    known_ids: HashSet<u32>,
    filter_mode: FilterMode,
}

impl FlashcardSession {
    pub fn new<R: Rng>(cards: Vec<Flashcard>, rng: &mut R) -> Self {
        let mut session = Self {
            full_deck: cards,
            deck: Vec::new(),
            position: 0,
            flipped: false,
            known_ids: HashSet::new(),
            filter_mode: FilterMode::All,
        };
        session.rebuild(rng);
        session
    }

    /// Re-runs the filter-then-shuffle pipeline from the full deck.
    fn rebuild<R: Rng>(&mut self, rng: &mut R) {
        let cards: Vec<Flashcard> = match self.filter_mode {
            FilterMode::All => self.full_deck.clone(),
            FilterMode::Unknown => self
                .full_deck
                .iter()
                .filter(|card| !self.known_ids.contains(&card.id))
                .cloned()
                .collect(),
        };
        self.deck = shuffle(&cards, rng);
        self.position = 0;
        self.flipped = false;
    }

    pub fn deck(&self) -> &[Flashcard] {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.deck.get(self.position)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn known_count(&self) -> usize {
        self.known_ids.len()
    }

    pub fn total_count(&self) -> usize {
        self.full_deck.len()
    }

    /// True when the filtered deck has no cards left.
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn set_filter_mode<R: Rng>(&mut self, mode: FilterMode, rng: &mut R) {
        self.filter_mode = mode;
        self.rebuild(rng);
    }

    /// Toggles between question and answer. Position and progress are
    /// untouched.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Moves forward one card; a no-op at the last card.
    pub fn next(&mut self) {
        if self.position + 1 < self.deck.len() {
            self.position += 1;
            self.flipped = false;
        }
    }

    /// Moves back one card; a no-op at the first card.
    pub fn previous(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.flipped = false;
        }
    }

    /// Records the current card as known.
    ///
    /// Under the `Unknown` filter the card no longer matches and leaves
    /// the working deck at once, so marking the last remaining card
    /// exhausts the session. Under `All` the card stays and the session
    /// advances past it.
    pub fn mark_known(&mut self) {
        let Some(card) = self.current() else {
            return;
        };
        self.known_ids.insert(card.id);
        match self.filter_mode {
            FilterMode::All => self.next(),
            FilterMode::Unknown => {
                self.deck.remove(self.position);
                if self.position >= self.deck.len() && !self.deck.is_empty() {
                    self.position = self.deck.len() - 1;
                }
                if self.deck.is_empty() {
                    self.position = 0;
                }
                self.flipped = false;
            }
        }
    }

    /// Forgets all known cards and rebuilds the working deck.
    pub fn reset_progress<R: Rng>(&mut self, rng: &mut R) {
        self.known_ids.clear();
        self.rebuild(rng);
    }

    /// Reorders the current working deck; filter and known cards are kept.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.deck = shuffle(&self.deck, rng);
        self.position = 0;
        self.flipped = false;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn cards(n: u32) -> Vec<Flashcard> {
        (1..=n)
            .map(|id| Flashcard {
                id,
                question: format!("q{id}"),
                answer: format!("a{id}"),
            })
            .collect()
    }

    #[test]
    fn test_navigation_clamps_at_the_boundaries() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = FlashcardSession::new(cards(3), &mut rng);
        session.previous();
        assert_eq!(session.position(), 0);
        session.next();
        session.next();
        assert_eq!(session.position(), 2);
        session.next();
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn test_moving_resets_the_flip() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = FlashcardSession::new(cards(2), &mut rng);
        session.flip();
        assert!(session.is_flipped());
        session.next();
        assert!(!session.is_flipped());
        session.flip();
        // No-op at the boundary: the flip stays.
        session.next();
        assert!(session.is_flipped());
    }

    #[test]
    fn test_marking_every_card_exhausts_the_unknown_deck() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = FlashcardSession::new(cards(3), &mut rng);
        session.set_filter_mode(FilterMode::Unknown, &mut rng);
        session.mark_known();
        session.mark_known();
        session.mark_known();
        assert!(session.is_exhausted());
        assert!(session.current().is_none());
        // Marking with no card left is a no-op.
        session.mark_known();
        assert_eq!(session.known_count(), 3);

        session.reset_progress(&mut rng);
        assert!(!session.is_exhausted());
        assert_eq!(session.deck().len(), 3);
        assert_eq!(session.known_count(), 0);
    }

    #[test]
    fn test_mark_known_under_all_keeps_the_deck() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = FlashcardSession::new(cards(3), &mut rng);
        session.mark_known();
        assert_eq!(session.deck().len(), 3);
        assert_eq!(session.known_count(), 1);
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_known_cards_survive_reshuffle_and_filter_changes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = FlashcardSession::new(cards(4), &mut rng);
        session.mark_known();
        session.reshuffle(&mut rng);
        assert_eq!(session.known_count(), 1);
        session.set_filter_mode(FilterMode::Unknown, &mut rng);
        assert_eq!(session.deck().len(), 3);
        session.set_filter_mode(FilterMode::All, &mut rng);
        assert_eq!(session.deck().len(), 4);
        assert_eq!(session.known_count(), 1);
    }

    #[test]
    fn test_reshuffle_keeps_the_working_deck_contents() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = FlashcardSession::new(cards(5), &mut rng);
        session.next();
        session.flip();
        let mut before: Vec<u32> = session.deck().iter().map(|c| c.id).collect();
        session.reshuffle(&mut rng);
        let mut after: Vec<u32> = session.deck().iter().map(|c| c.id).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(session.position(), 0);
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_empty_deck_is_exhausted_from_the_start() {
        let mut rng = StdRng::seed_from_u64(7);
        let session = FlashcardSession::new(Vec::new(), &mut rng);
        assert!(session.is_exhausted());
        assert!(session.current().is_none());
    }
}
