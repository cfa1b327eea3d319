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

use crate::types::question::Question;
use crate::types::topic::Topic;

/// Flattens every topic's question bank, in catalog order, into the
/// comprehensive exam bank. Topics without a quiz contribute nothing and
/// question fields are preserved unchanged. The result is unshuffled;
/// the exam session shuffles it once on creation.
pub fn exam_bank(topics: &[Topic]) -> Vec<Question> {
    topics
        .iter()
        .flat_map(|topic| topic.quiz.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, question_count: usize) -> Topic {
        Topic {
            id: id.to_string(),
            title: id.to_string(),
            category: "OOP".to_string(),
            description: String::new(),
            sections: Vec::new(),
            quiz: (0..question_count)
                .map(|i| Question {
                    question: format!("{id}-{i}"),
                    options: vec!["a".to_string(), "b".to_string()],
                    correct_index: 0,
                    explanation: String::new(),
                    topic: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_length_is_the_sum_of_the_topic_banks() {
        let topics = vec![topic("a", 3), topic("b", 0), topic("c", 2)];
        let bank = exam_bank(&topics);
        assert_eq!(bank.len(), 5);
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let topics = vec![topic("a", 2), topic("b", 1)];
        let bank = exam_bank(&topics);
        let texts: Vec<&str> = bank.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, vec!["a-0", "a-1", "b-0"]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let topics = vec![topic("a", 2), topic("b", 3)];
        assert_eq!(exam_bank(&topics), exam_bank(&topics));
    }

    #[test]
    fn test_no_topics_yield_an_empty_bank() {
        assert!(exam_bank(&[]).is_empty());
    }
}
