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

/// A lecture video, backed by a file in the catalog's `videos/` directory.
#[derive(Clone, Debug, Deserialize)]
pub struct Video {
    /// Unique identifier within the catalog.
    pub id: String,
    pub title: String,
    /// File name under `videos/`, without any directory components.
    pub filename: String,
    #[serde(default)]
    pub description: Option<String>,
}
