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

use std::fmt::Display;
use std::fmt::Formatter;

/// An error with a human-readable message.
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(message: &str) -> Fallible<T> {
    Err(ErrorReport::new(message))
}

impl From<std::io::Error> for ErrorReport {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<walkdir::Error> for ErrorReport {
    fn from(e: walkdir::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(test)]
impl From<reqwest::Error> for ErrorReport {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}
