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
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::catalog::Catalog;
use crate::error::Fallible;
use crate::serve::get::get_handler;
use crate::serve::post::post_handler;
use crate::serve::state::MutableState;
use crate::serve::state::ServerState;
use crate::session::nav::Controller;

pub async fn start_server(directory: PathBuf, port: u16) -> Fallible<()> {
    let catalog = Catalog::load(&directory)?;
    let directory = directory.canonicalize()?;
    let catalog = Arc::new(catalog);
    let controller = Controller::new(catalog.clone());

    let state = ServerState {
        directory,
        catalog,
        mutable: Arc::new(Mutex::new(MutableState { controller })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.route("/script.js", get(script));
    let app = app.route("/video/{filename}", get(video));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("0.0.0.0:{port}");

    // Start a separate task to open the browser.
    let url = format!("http://{bind}/");
    let connect = bind.clone();
    tokio::spawn(async move {
        loop {
            if let Ok(stream) = TcpStream::connect(&connect).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        let _ = open::that(url);
    });

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static [u8]) {
    let bytes = include_bytes!("script.js");
    (StatusCode::OK, [(CONTENT_TYPE, "text/javascript")], bytes)
}

/// Serves a video file from the catalog's `videos/` directory. Only
/// filenames listed in the catalog are served.
async fn video(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> Result<(StatusCode, [(HeaderName, &'static str); 1], Vec<u8>), StatusCode> {
    let known = state
        .catalog
        .videos
        .iter()
        .any(|video| video.filename == filename);
    if !known {
        return Err(StatusCode::NOT_FOUND);
    }
    let path = state.directory.join("videos").join(&filename);
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        log::error!("reading {}: {e}", path.display());
        StatusCode::NOT_FOUND
    })?;
    let content_type = if filename.ends_with(".mp4") {
        "video/mp4"
    } else if filename.ends_with(".webm") {
        "video/webm"
    } else {
        "application/octet-stream"
    };
    Ok((StatusCode::OK, [(CONTENT_TYPE, content_type)], bytes))
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
