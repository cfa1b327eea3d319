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
use std::sync::Arc;
use std::sync::Mutex;

use crate::catalog::Catalog;
use crate::session::nav::Controller;

#[derive(Clone)]
pub struct ServerState {
    /// The catalog directory; video files are served from under it.
    pub directory: PathBuf,
    pub catalog: Arc<Catalog>,
    pub mutable: Arc<Mutex<MutableState>>,
}

/// Every POST action runs as one synchronous critical section over this,
/// so session operations never interleave mid-computation.
pub struct MutableState {
    pub controller: Controller,
}
