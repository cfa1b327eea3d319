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

use serde::Deserialize;

use crate::types::question::Question;

/// A study topic: lesson sections plus an optional quiz.
#[derive(Clone, Debug, Deserialize)]
pub struct Topic {
    /// Unique identifier within the catalog.
    pub id: String,
    pub title: String,
    /// Sidebar grouping. Categories appear in catalog order.
    pub category: String,
    pub description: String,
    pub sections: Vec<Section>,
    /// Question bank for this topic. May be empty.
    #[serde(default)]
    pub quiz: Vec<Question>,
}

impl Topic {
    /// The part of the title before the first colon, for narrow listings.
    pub fn short_title(&self) -> &str {
        match self.title.split_once(':') {
            Some((head, _)) => head,
            None => &self.title,
        }
    }
}

/// One lesson section: markdown content and an optional code snippet.
#[derive(Clone, Debug, Deserialize)]
pub struct Section {
    pub title: String,
    /// Markdown.
    pub content: String,
    #[serde(default)]
    pub code_snippet: Option<CodeSnippet>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CodeSnippet {
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}
