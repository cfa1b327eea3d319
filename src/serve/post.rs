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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::serve::state::ServerState;
use crate::session::flashcards::FilterMode;

#[derive(Debug, Deserialize)]
enum Action {
    // Navigation.
    Topic,
    Learn,
    Quiz,
    Exam,
    Flashcards,
    Videos,
    Review,
    Video,
    // Quiz session.
    Select,
    Submit,
    Retry,
    // Flashcard session.
    Flip,
    Next,
    Previous,
    Known,
    Shuffle,
    Filter,
    ResetProgress,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    topic: Option<String>,
    video: Option<String>,
    position: Option<usize>,
    option: Option<usize>,
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<FormData>) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    let controller = &mut mutable.controller;
    let mut rng = rand::rng();
    match form.action {
        Action::Topic => match form.topic {
            Some(id) => controller.select_topic(&id),
            None => log::error!("Topic action without a topic id."),
        },
        Action::Learn => controller.enter_learn(),
        Action::Quiz => controller.enter_quiz(&mut rng),
        Action::Exam => controller.select_exam(&mut rng),
        Action::Flashcards => controller.select_flashcards(&mut rng),
        Action::Videos => controller.select_videos(),
        Action::Review => controller.select_review(),
        Action::Video => match form.video {
            Some(id) => controller.select_video(&id),
            None => log::error!("Video action without a video id."),
        },
        Action::Select => {
            if let (Some(position), Some(option)) = (form.position, form.option) {
                match controller.active_quiz_mut() {
                    Some(session) => {
                        if let Err(e) = session.select_option(position, option) {
                            log::error!("{e}");
                        }
                    }
                    None => log::error!("Select action without a live quiz session."),
                }
            } else {
                log::error!("Select action without a position and option.");
            }
        }
        Action::Submit => match controller.active_quiz_mut() {
            Some(session) => session.submit(),
            None => log::error!("Submit action without a live quiz session."),
        },
        Action::Retry => match controller.active_quiz_mut() {
            Some(session) => session.reset(&mut rng),
            None => log::error!("Retry action without a live quiz session."),
        },
        Action::Flip => {
            if let Some(session) = controller.flashcards_mut() {
                session.flip();
            }
        }
        Action::Next => {
            if let Some(session) = controller.flashcards_mut() {
                session.next();
            }
        }
        Action::Previous => {
            if let Some(session) = controller.flashcards_mut() {
                session.previous();
            }
        }
        Action::Known => {
            if let Some(session) = controller.flashcards_mut() {
                session.mark_known();
            }
        }
        Action::Shuffle => {
            if let Some(session) = controller.flashcards_mut() {
                session.reshuffle(&mut rng);
            }
        }
        Action::Filter => {
            if let Some(session) = controller.flashcards_mut() {
                let mode = match session.filter_mode() {
                    FilterMode::All => FilterMode::Unknown,
                    FilterMode::Unknown => FilterMode::All,
                };
                session.set_filter_mode(mode, &mut rng);
            }
        }
        Action::ResetProgress => {
            if let Some(session) = controller.flashcards_mut() {
                session.reset_progress(&mut rng);
            }
        }
    }
    Redirect::to("/")
}
