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

use std::env::current_dir;
use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_catalog;
use crate::cmd::stats::print_catalog_stats;
use crate::error::Fallible;
use crate::serve::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the study app for a catalog directory.
    Serve {
        /// Optional path to the catalog directory.
        directory: Option<String>,
        /// Port to bind the local server to.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Check that a catalog directory is well-formed.
    Check {
        /// Optional path to the catalog directory.
        directory: Option<String>,
    },
    /// Print catalog statistics as JSON.
    Stats {
        /// Optional path to the catalog directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve { directory, port } => {
            start_server(resolve_directory(directory)?, port).await
        }
        Command::Check { directory } => check_catalog(&resolve_directory(directory)?),
        Command::Stats { directory } => print_catalog_stats(&resolve_directory(directory)?),
    }
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    match directory {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(current_dir()?),
    }
}
