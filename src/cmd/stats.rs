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

use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Fallible;

pub fn print_catalog_stats(directory: &PathBuf) -> Fallible<()> {
    let catalog = Catalog::load(directory)?;
    let stats = Stats::from_catalog(&catalog);
    let stats_json = serde_json::to_string_pretty(&stats)?;
    println!("{}", stats_json);
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    topic_count: usize,
    question_count: usize,
    flashcard_count: usize,
    video_count: usize,
    review_question_count: usize,
}

impl Stats {
    fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            topic_count: catalog.topics.len(),
            question_count: catalog.question_count(),
            flashcard_count: catalog.flashcards.len(),
            video_count: catalog.videos.len(),
            review_question_count: catalog
                .review
                .as_ref()
                .map(|r| r.questions.len())
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_stats_from_the_test_catalog() -> Fallible<()> {
        let catalog = Catalog::load(&PathBuf::from("./test"))?;
        let stats = Stats::from_catalog(&catalog);
        let json = serde_json::to_string(&stats)?;
        assert!(json.contains("\"topicCount\":3"));
        assert!(json.contains("\"questionCount\":5"));
        assert!(json.contains("\"flashcardCount\":3"));
        assert!(json.contains("\"videoCount\":1"));
        assert!(json.contains("\"reviewQuestionCount\":3"));
        Ok(())
    }
}
