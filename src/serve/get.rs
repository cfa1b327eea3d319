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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::markdown::markdown_to_html;
use crate::markdown::markdown_to_html_inline;
use crate::serve::state::ServerState;
use crate::serve::template::page_template;
use crate::session::flashcards::FilterMode;
use crate::session::flashcards::FlashcardSession;
use crate::session::nav::AppMode;
use crate::session::nav::Controller;
use crate::session::nav::StudyMode;
use crate::session::quiz::QuizSession;
use crate::types::question::Question;
use crate::types::topic::Topic;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let controller = &mutable.controller;
    let body = html! {
        div.app {
            (sidebar(controller))
            main.screen {
                (screen(controller))
            }
        }
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn screen(controller: &Controller) -> Markup {
    match controller.app_mode() {
        AppMode::Topics => match controller.study_mode() {
            StudyMode::Learn => match controller.active_topic() {
                Some(topic) => learn_view(topic),
                None => empty_view("No topics in this catalog."),
            },
            StudyMode::Quiz => {
                let title = controller
                    .active_topic()
                    .map(|t| t.title.as_str())
                    .unwrap_or("Quiz");
                quiz_view(title, controller.quiz(), true)
            }
        },
        AppMode::Exam => quiz_view("Comprehensive Exam", controller.quiz(), false),
        AppMode::Flashcards => flashcards_view(controller.flashcards()),
        AppMode::Videos => videos_view(controller),
        AppMode::Review => review_view(controller),
    }
}

fn sidebar(controller: &Controller) -> Markup {
    let catalog = controller.catalog();
    let active_topic_id = controller
        .active_topic()
        .map(|t| t.id.as_str())
        .unwrap_or("");
    let in_topics = controller.app_mode() == AppMode::Topics;
    html! {
        aside.sidebar {
            div.brand {
                h1 { "study" span.light { "deck" } }
            }
            nav.topics {
                @for category in catalog.categories() {
                    div.category {
                        h3 { (category) }
                        ul {
                            @for topic in catalog.topics.iter().filter(|t| t.category == category) {
                                li {
                                    form action="/" method="post" {
                                        input type="hidden" name="topic" value=(topic.id);
                                        button.topic-link.active[in_topics && topic.id == active_topic_id]
                                            type="submit" name="action" value="Topic" {
                                            (topic.short_title())
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div.modules {
                form action="/" method="post" {
                    button.module-link.active[controller.app_mode() == AppMode::Flashcards]
                        type="submit" name="action" value="Flashcards" { "Flashcards" }
                }
                form action="/" method="post" {
                    button.module-link.active[controller.app_mode() == AppMode::Videos]
                        type="submit" name="action" value="Videos" { "Videos" }
                }
                @if catalog.review.is_some() {
                    form action="/" method="post" {
                        button.module-link.active[controller.app_mode() == AppMode::Review]
                            type="submit" name="action" value="Review" { "Review" }
                    }
                }
            }
            div.exam {
                form action="/" method="post" {
                    button.exam-link.active[controller.app_mode() == AppMode::Exam]
                        type="submit" name="action" value="Exam" {
                        span { "Final Exam" }
                        span.sub { "All-in-one examination" }
                    }
                }
            }
        }
    }
}

fn learn_view(topic: &Topic) -> Markup {
    html! {
        div.learn {
            header.learn-header {
                div {
                    span.category-label { (topic.category) }
                    h1 { (topic.title) }
                    p.description { (topic.description) }
                }
                @if !topic.quiz.is_empty() {
                    form action="/" method="post" {
                        button.start-quiz type="submit" name="action" value="Quiz" {
                            "Start Quiz"
                            span.count { (topic.quiz.len()) " Qs" }
                        }
                    }
                }
            }
            div.sections {
                @for (index, section) in topic.sections.iter().enumerate() {
                    section.lesson {
                        h2 {
                            span.index { (index + 1) }
                            (section.title)
                        }
                        div.rich-text {
                            (PreEscaped(markdown_to_html(&section.content)))
                        }
                        @if let Some(snippet) = &section.code_snippet {
                            pre {
                                code class=(format!("language-{}", snippet.language)) {
                                    (snippet.code)
                                }
                            }
                            @if let Some(description) = &snippet.description {
                                p.snippet-description { (description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn quiz_view(title: &str, session: Option<&QuizSession>, is_topic: bool) -> Markup {
    let Some(session) = session else {
        return empty_view("No quiz session.");
    };
    if session.deck().is_empty() {
        return html! {
            div.no-quiz {
                h1 { "No Quiz Data" }
                p { "This module does not have an active examination." }
                @if is_topic {
                    form action="/" method="post" {
                        button.secondary type="submit" name="action" value="Learn" {
                            "Return to Content"
                        }
                    }
                }
            }
        };
    }
    let total = session.deck().len();
    let all_answered = session.answered_count() == total;
    html! {
        div.quiz {
            header.quiz-header {
                div {
                    h1 { (title) }
                    span.count { "Question count: " (total) }
                }
                @if session.is_submitted() {
                    div.result {
                        div class=(format!("percentage {}", session.tier().as_str())) {
                            (session.percentage()) "%"
                        }
                        div.score { "Score: " (session.score()) " / " (total) }
                    }
                }
            }
            @for (position, question) in session.deck().iter().enumerate() {
                (question_view(position, question, session))
            }
            div.quiz-controls {
                @if session.is_submitted() {
                    form action="/" method="post" {
                        button.primary type="submit" name="action" value="Retry" {
                            "Retake Examination"
                        }
                    }
                } @else {
                    form action="/" method="post" {
                        @if all_answered {
                            button.primary type="submit" name="action" value="Submit" {
                                "Submit"
                            }
                        } @else {
                            button.primary type="submit" name="action" value="Submit" disabled {
                                "Answer all " (total) " questions to submit"
                            }
                        }
                    }
                }
                @if is_topic {
                    form action="/" method="post" {
                        button.secondary type="submit" name="action" value="Learn" {
                            "Back to Content"
                        }
                    }
                }
            }
        }
    }
}

fn question_view(position: usize, question: &Question, session: &QuizSession) -> Markup {
    let chosen = session.answer(position);
    let submitted = session.is_submitted();
    html! {
        div.question {
            div.question-head {
                span.index { (position + 1) }
                p { (question.question) }
                @if let Some(tag) = &question.topic {
                    span.tag { (tag) }
                }
            }
            div.options {
                @for (option, text) in question.options.iter().enumerate() {
                    (option_view(position, option, text, question, chosen, submitted))
                }
            }
            @if submitted {
                div.explanation {
                    strong { "Explanation" }
                    (PreEscaped(markdown_to_html_inline(&question.explanation)))
                }
            }
        }
    }
}

fn option_view(
    position: usize,
    option: usize,
    text: &str,
    question: &Question,
    chosen: Option<usize>,
    submitted: bool,
) -> Markup {
    if submitted {
        let class = if option == question.correct_index {
            "option correct"
        } else if chosen == Some(option) {
            "option wrong"
        } else {
            "option dimmed"
        };
        html! {
            div class=(class) {
                (text)
                @if option == question.correct_index {
                    span.badge { "Correct answer" }
                }
            }
        }
    } else {
        let class = if chosen == Some(option) {
            "option selected"
        } else {
            "option"
        };
        html! {
            form action="/" method="post" {
                input type="hidden" name="position" value=(position);
                input type="hidden" name="option" value=(option);
                button class=(class) type="submit" name="action" value="Select" {
                    (text)
                }
            }
        }
    }
}

fn flashcards_view(session: Option<&FlashcardSession>) -> Markup {
    let Some(session) = session else {
        return empty_view("No flashcard session.");
    };
    if session.is_exhausted() {
        return html! {
            div.exhausted {
                @if session.total_count() == 0 {
                    h1 { "No Flashcards" }
                    p { "This catalog has no flashcard deck." }
                } @else {
                    h1 { "All Cards Known!" }
                    p { "You have worked through every card in the deck." }
                    form action="/" method="post" {
                        button.primary type="submit" name="action" value="ResetProgress" {
                            "Start Over"
                        }
                    }
                }
            }
        };
    }
    // The exhausted branch guarantees a current card below.
    let card = session.current();
    let total = session.deck().len();
    let progress = 100 * (session.position() + 1) / total;
    let filter_label = match session.filter_mode() {
        FilterMode::All => "All cards",
        FilterMode::Unknown => "Unknown only",
    };
    let at_start = session.position() == 0;
    let at_end = session.position() + 1 == total;
    html! {
        div.flashcards {
            header.flashcards-header {
                div {
                    h1 { "Flashcards" }
                    p.progress-text {
                        "Card " (session.position() + 1) " of " (total)
                        " | Known: " (session.known_count()) "/" (session.total_count())
                    }
                }
                div.deck-controls {
                    form action="/" method="post" {
                        button type="submit" name="action" value="Filter" { (filter_label) }
                    }
                    form action="/" method="post" {
                        button type="submit" name="action" value="Shuffle" { "Shuffle" }
                    }
                    form action="/" method="post" {
                        button type="submit" name="action" value="ResetProgress" { "Reset" }
                    }
                }
            }
            div.progress-bar {
                div.progress-fill style=(format!("width: {progress}%")) {}
            }
            form.card action="/" method="post" {
                button #flip .card-face type="submit" name="action" value="Flip" {
                    @if let Some(card) = card {
                        @if session.is_flipped() {
                            span.face-label { "Answer" }
                            div.face-text { (card.answer) }
                        } @else {
                            span.face-label { "Question" }
                            div.face-text { (card.question) }
                        }
                    }
                }
            }
            div.card-controls {
                form action="/" method="post" {
                    @if at_start {
                        button #previous type="submit" name="action" value="Previous" disabled { "\u{2190}" }
                    } @else {
                        button #previous type="submit" name="action" value="Previous" { "\u{2190}" }
                    }
                }
                form action="/" method="post" {
                    button.known type="submit" name="action" value="Known" { "\u{2713} Got it" }
                }
                form action="/" method="post" {
                    @if at_end {
                        button #next type="submit" name="action" value="Next" disabled { "\u{2192}" }
                    } @else {
                        button #next type="submit" name="action" value="Next" { "\u{2192}" }
                    }
                }
            }
            p.hints {
                "Space flips the card; the arrow keys navigate."
            }
        }
    }
}

fn videos_view(controller: &Controller) -> Markup {
    let catalog = controller.catalog();
    if catalog.videos.is_empty() {
        return empty_view("No videos in this catalog.");
    }
    let selected = controller.selected_video();
    html! {
        div.videos {
            header.videos-header {
                h1 { "Lectures" }
                p { (catalog.videos.len()) " available" }
            }
            div.videos-body {
                div.video-list {
                    @for video in &catalog.videos {
                        form action="/" method="post" {
                            input type="hidden" name="video" value=(video.id);
                            button.video-link.active[selected.is_some_and(|s| s.id == video.id)]
                                type="submit" name="action" value="Video" {
                                span.title { (video.title) }
                                @if let Some(description) = &video.description {
                                    span.sub { (description) }
                                }
                            }
                        }
                    }
                }
                @if let Some(video) = selected {
                    div.video-player {
                        video controls src=(format!("/video/{}", video.filename)) {
                            "Your browser does not support the video tag."
                        }
                        h2 { (video.title) }
                        @if let Some(description) = &video.description {
                            p { (description) }
                        }
                    }
                }
            }
        }
    }
}

fn review_view(controller: &Controller) -> Markup {
    let Some(review) = &controller.catalog().review else {
        return empty_view("No review module in this catalog.");
    };
    let in_quiz = controller.study_mode() == StudyMode::Quiz;
    html! {
        div.review {
            header.review-header {
                div {
                    span.category-label { "Exam preparation" }
                    h1 { "Review" }
                }
                div.deck-controls {
                    form action="/" method="post" {
                        button.active[!in_quiz] type="submit" name="action" value="Learn" { "Theory" }
                    }
                    form action="/" method="post" {
                        button.active[in_quiz] type="submit" name="action" value="Quiz" { "Quiz" }
                    }
                }
            }
            @if in_quiz {
                (quiz_view("Review Quiz", controller.review_quiz(), false))
            } @else {
                div.rich-text {
                    (PreEscaped(markdown_to_html(&review.theory)))
                }
            }
        }
    }
}

fn empty_view(message: &str) -> Markup {
    html! {
        div.empty {
            p { (message) }
        }
    }
}
