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
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::flashcard::Flashcard;
use crate::types::question::Question;
use crate::types::topic::Topic;
use crate::types::video::Video;

/// The curriculum: topics, flashcards, videos, and the optional review
/// module. Loaded once at startup and shared read-only by all sessions.
pub struct Catalog {
    /// Topics in catalog order (lexicographic order of their file paths).
    pub topics: Vec<Topic>,
    pub flashcards: Vec<Flashcard>,
    pub videos: Vec<Video>,
    pub review: Option<Review>,
}

/// Condensed exam-preparation material: a theory document plus its own
/// question bank, where every question carries a topic tag.
#[derive(Deserialize)]
pub struct Review {
    /// Markdown.
    pub theory: String,
    pub questions: Vec<Question>,
}

#[derive(Deserialize)]
struct FlashcardFile {
    cards: Vec<Flashcard>,
}

#[derive(Deserialize)]
struct VideoFile {
    videos: Vec<Video>,
}

impl Catalog {
    pub fn load(directory: &Path) -> Fallible<Self> {
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        let directory = directory.canonicalize()?;

        log::debug!("Loading catalog...");
        let start = Instant::now();

        let topics_dir = directory.join("topics");
        if !topics_dir.exists() {
            return fail("topics directory does not exist.");
        }
        let mut topic_paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&topics_dir) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                topic_paths.push(path.to_path_buf());
            }
        }
        topic_paths.sort();
        let mut topics: Vec<Topic> = Vec::new();
        for path in &topic_paths {
            topics.push(parse_file(path)?);
        }

        let flashcards = match read_optional::<FlashcardFile>(&directory.join("flashcards.toml"))? {
            Some(file) => file.cards,
            None => Vec::new(),
        };
        let videos = match read_optional::<VideoFile>(&directory.join("videos.toml"))? {
            Some(file) => file.videos,
            None => Vec::new(),
        };
        let review = read_optional::<Review>(&directory.join("review.toml"))?;

        let catalog = Self {
            topics,
            flashcards,
            videos,
            review,
        };
        catalog.validate()?;

        let duration = start.elapsed().as_millis();
        log::debug!("Catalog loaded in {duration}ms.");
        Ok(catalog)
    }

    /// The total number of questions across all topic quizzes.
    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.quiz.len()).sum()
    }

    /// Sidebar categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for topic in &self.topics {
            if !categories.contains(&topic.category.as_str()) {
                categories.push(&topic.category);
            }
        }
        categories
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    fn validate(&self) -> Fallible<()> {
        let mut topic_ids: HashSet<&str> = HashSet::new();
        for topic in &self.topics {
            if !topic_ids.insert(&topic.id) {
                return Err(ErrorReport::new(format!(
                    "duplicate topic id: {}",
                    topic.id
                )));
            }
            for question in &topic.quiz {
                check_question(&topic.id, question)?;
            }
        }
        let mut card_ids: HashSet<u32> = HashSet::new();
        for card in &self.flashcards {
            if !card_ids.insert(card.id) {
                return Err(ErrorReport::new(format!(
                    "duplicate flashcard id: {}",
                    card.id
                )));
            }
        }
        for video in &self.videos {
            if video.filename.is_empty()
                || video.filename.contains('/')
                || video.filename.contains("..")
            {
                return Err(ErrorReport::new(format!(
                    "invalid video filename: {:?}",
                    video.filename
                )));
            }
        }
        if let Some(review) = &self.review {
            for question in &review.questions {
                check_question("review", question)?;
            }
        }
        Ok(())
    }
}

fn check_question(context: &str, question: &Question) -> Fallible<()> {
    if question.options.len() < 2 {
        return Err(ErrorReport::new(format!(
            "{context}: question {:?} has fewer than two options",
            question.question
        )));
    }
    if question.correct_index >= question.options.len() {
        return Err(ErrorReport::new(format!(
            "{context}: question {:?} has correct_index {} out of range",
            question.question, question.correct_index
        )));
    }
    Ok(())
}

fn parse_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Fallible<T> {
    let content = read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ErrorReport::new(format!("{}: {}", path.display(), e)))
}

fn read_optional<T: for<'de> Deserialize<'de>>(path: &Path) -> Fallible<Option<T>> {
    if path.exists() {
        Ok(Some(parse_file(path)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_non_existent_directory() {
        let directory = PathBuf::from("./derpherp");
        assert!(Catalog::load(&directory).is_err());
    }

    #[test]
    fn test_load_test_catalog() -> Fallible<()> {
        let catalog = Catalog::load(&PathBuf::from("./test"))?;
        assert_eq!(catalog.topics.len(), 3);
        assert_eq!(catalog.flashcards.len(), 3);
        assert_eq!(catalog.videos.len(), 1);
        assert!(catalog.review.is_some());
        assert_eq!(catalog.question_count(), 5);
        assert_eq!(catalog.categories(), vec!["OOP", "Android System"]);
        Ok(())
    }

    #[test]
    fn test_catalog_order_follows_file_order() -> Fallible<()> {
        let catalog = Catalog::load(&PathBuf::from("./test"))?;
        assert_eq!(catalog.topics[0].id, "oop-basics");
        assert_eq!(catalog.topics[1].id, "components-lifecycle");
        assert_eq!(catalog.topics[2].id, "coroutines");
        Ok(())
    }

    #[test]
    fn test_out_of_range_correct_index_is_rejected() -> Fallible<()> {
        let dir = tempdir()?;
        create_dir_all(dir.path().join("topics"))?;
        write(
            dir.path().join("topics").join("01-bad.toml"),
            r#"
id = "bad"
title = "Bad"
category = "OOP"
description = ""
sections = []

[[quiz]]
question = "Pick one."
options = ["a", "b"]
correct_index = 2
explanation = ""
"#,
        )?;
        assert!(Catalog::load(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_duplicate_flashcard_id_is_rejected() -> Fallible<()> {
        let dir = tempdir()?;
        create_dir_all(dir.path().join("topics"))?;
        write(
            dir.path().join("flashcards.toml"),
            r#"
[[cards]]
id = 1
question = "q"
answer = "a"

[[cards]]
id = 1
question = "q2"
answer = "a2"
"#,
        )?;
        assert!(Catalog::load(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_video_filename_with_path_components_is_rejected() -> Fallible<()> {
        let dir = tempdir()?;
        create_dir_all(dir.path().join("topics"))?;
        write(
            dir.path().join("videos.toml"),
            r#"
[[videos]]
id = "evil"
title = "Evil"
filename = "../secret.mp4"
"#,
        )?;
        assert!(Catalog::load(dir.path()).is_err());
        Ok(())
    }
}
