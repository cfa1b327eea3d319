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

use std::sync::Arc;

use rand::Rng;

use crate::catalog::Catalog;
use crate::session::exam::exam_bank;
use crate::session::flashcards::FlashcardSession;
use crate::session::quiz::QuizSession;
use crate::types::topic::Topic;
use crate::types::video::Video;

/// Which screen is active. Exactly one at any time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppMode {
    Topics,
    Flashcards,
    Videos,
    /// The comprehensive exam aggregated from every topic quiz.
    Exam,
    /// The review module: condensed theory plus its own question bank.
    Review,
}

/// Content or quiz, within a topic or the review module.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StudyMode {
    Learn,
    Quiz,
}

/// Owns the navigation state and the live sessions behind each screen.
///
/// Sessions are created lazily on entry and dropped on leaving their
/// screen, so coming back always starts fresh. Switching never fails.
pub struct Controller {
    catalog: Arc<Catalog>,
    app_mode: AppMode,
    active_topic_id: String,
    study_mode: StudyMode,
    selected_video_id: Option<String>,
    /// Quiz session for the active topic or the comprehensive exam.
    quiz: Option<QuizSession>,
    flashcards: Option<FlashcardSession>,
    review_quiz: Option<QuizSession>,
}

impl Controller {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let active_topic_id = catalog
            .topics
            .first()
            .map(|t| t.id.clone())
            .unwrap_or_default();
        let selected_video_id = catalog.videos.first().map(|v| v.id.clone());
        Self {
            catalog,
            app_mode: AppMode::Topics,
            active_topic_id,
            study_mode: StudyMode::Learn,
            selected_video_id,
            quiz: None,
            flashcards: None,
            review_quiz: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn app_mode(&self) -> AppMode {
        self.app_mode
    }

    pub fn study_mode(&self) -> StudyMode {
        self.study_mode
    }

    pub fn active_topic(&self) -> Option<&Topic> {
        self.catalog.topic(&self.active_topic_id)
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.selected_video_id
            .as_deref()
            .and_then(|id| self.catalog.video(id))
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.quiz.as_mut()
    }

    pub fn flashcards(&self) -> Option<&FlashcardSession> {
        self.flashcards.as_ref()
    }

    pub fn flashcards_mut(&mut self) -> Option<&mut FlashcardSession> {
        self.flashcards.as_mut()
    }

    pub fn review_quiz(&self) -> Option<&QuizSession> {
        self.review_quiz.as_ref()
    }

    pub fn review_quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.review_quiz.as_mut()
    }

    /// The quiz session the current screen acts on.
    pub fn active_quiz_mut(&mut self) -> Option<&mut QuizSession> {
        match self.app_mode {
            AppMode::Review => self.review_quiz.as_mut(),
            _ => self.quiz.as_mut(),
        }
    }

    /// Progress is session-scoped: leaving a screen drops its sessions.
    fn leave(&mut self) {
        self.quiz = None;
        self.flashcards = None;
        self.review_quiz = None;
    }

    pub fn select_topic(&mut self, id: &str) {
        self.leave();
        self.app_mode = AppMode::Topics;
        self.study_mode = StudyMode::Learn;
        if self.catalog.topic(id).is_some() {
            self.active_topic_id = id.to_string();
        }
    }

    /// Jumps straight into a quiz over every topic's questions.
    pub fn select_exam<R: Rng>(&mut self, rng: &mut R) {
        self.leave();
        self.app_mode = AppMode::Exam;
        self.study_mode = StudyMode::Quiz;
        self.quiz = Some(QuizSession::new(exam_bank(&self.catalog.topics), rng));
    }

    pub fn select_flashcards<R: Rng>(&mut self, rng: &mut R) {
        if self.app_mode == AppMode::Flashcards {
            return;
        }
        self.leave();
        self.app_mode = AppMode::Flashcards;
        self.flashcards = Some(FlashcardSession::new(self.catalog.flashcards.clone(), rng));
    }

    pub fn select_videos(&mut self) {
        if self.app_mode == AppMode::Videos {
            return;
        }
        self.leave();
        self.app_mode = AppMode::Videos;
    }

    pub fn select_review(&mut self) {
        if self.app_mode == AppMode::Review {
            return;
        }
        self.leave();
        self.app_mode = AppMode::Review;
        self.study_mode = StudyMode::Learn;
    }

    pub fn select_video(&mut self, id: &str) {
        if self.catalog.video(id).is_some() {
            self.selected_video_id = Some(id.to_string());
        }
    }

    /// Switches to the content view of the current screen.
    pub fn enter_learn(&mut self) {
        self.study_mode = StudyMode::Learn;
    }

    /// Switches to the quiz view, creating the session on first entry.
    pub fn enter_quiz<R: Rng>(&mut self, rng: &mut R) {
        self.study_mode = StudyMode::Quiz;
        match self.app_mode {
            AppMode::Review => {
                if self.review_quiz.is_none() {
                    let bank = match &self.catalog.review {
                        Some(review) => review.questions.clone(),
                        None => Vec::new(),
                    };
                    self.review_quiz = Some(QuizSession::new(bank, rng));
                }
            }
            _ => {
                if self.quiz.is_none() {
                    let bank = match self.active_topic() {
                        Some(topic) => topic.quiz.clone(),
                        None => Vec::new(),
                    };
                    self.quiz = Some(QuizSession::new(bank, rng));
                }
            }
        }
    }
}
