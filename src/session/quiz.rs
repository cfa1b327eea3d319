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

use std::collections::HashMap;

use rand::Rng;

use crate::error::Fallible;
use crate::error::fail;
use crate::shuffle::shuffle;
use crate::types::question::Question;
use crate::types::tier::Tier;

/// One quiz over a shuffled deck of questions.
///
/// The session is in progress until `submit` freezes the answers and
/// computes the score; `reset` starts over with a fresh shuffle of the
/// same question bank. Every operation is total: nothing here panics on
/// any input.
pub struct QuizSession {
    /// The unshuffled question bank this session draws from.
    bank: Vec<Question>,
    /// The questions in presentation order.
    deck: Vec<Question>,
    /// Chosen option index per deck position.
    answers: HashMap<usize, usize>,
    submitted: bool,
    /// Meaningful only once submitted.
    score: usize,
}

impl QuizSession {
    pub fn new<R: Rng>(bank: Vec<Question>, rng: &mut R) -> Self {
        let deck = shuffle(&bank, rng);
        Self {
            bank,
            deck,
            answers: HashMap::new(),
            submitted: false,
            score: 0,
        }
    }

    pub fn deck(&self) -> &[Question] {
        &self.deck
    }

    pub fn answer(&self, position: usize) -> Option<usize> {
        self.answers.get(&position).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Records (or overwrites) the answer for a deck position.
    ///
    /// Once submitted, answers are frozen and this is a silent no-op. An
    /// out-of-range position or option index is rejected without touching
    /// the session.
    pub fn select_option(&mut self, position: usize, option: usize) -> Fallible<()> {
        if self.submitted {
            return Ok(());
        }
        let Some(question) = self.deck.get(position) else {
            return fail("position is out of range.");
        };
        if option >= question.options.len() {
            return fail("option index is out of range.");
        }
        self.answers.insert(position, option);
        Ok(())
    }

    /// Freezes the answers and computes the score.
    ///
    /// Unanswered positions count as incorrect. Submitting twice is a
    /// no-op: the score is computed once and never changes afterwards.
    pub fn submit(&mut self) {
        if self.submitted {
            return;
        }
        self.score = self
            .deck
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answers.get(i) == Some(&q.correct_index))
            .count();
        self.submitted = true;
    }

    /// Starts over: clears the answers and score and reshuffles the same
    /// question bank. The only operation that produces a new ordering.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.deck = shuffle(&self.bank, rng);
        self.answers.clear();
        self.submitted = false;
        self.score = 0;
    }

    /// The score as a rounded percentage. An empty deck yields 0.
    pub fn percentage(&self) -> u32 {
        if self.deck.is_empty() {
            return 0;
        }
        (100.0 * self.score as f64 / self.deck.len() as f64).round() as u32
    }

    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }
}
