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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use reqwest::StatusCode;
    use serial_test::serial;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::error::Fallible;
    use crate::serve::server::start_server;

    async fn start_test_server(port: u16) {
        let directory = PathBuf::from("./test").canonicalize().unwrap();
        spawn(async move { start_server(directory, port).await });
        loop {
            if let Ok(stream) = TcpStream::connect(("0.0.0.0", port)).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
    }

    async fn post_action(port: u16, form: &[(&str, &str)]) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://0.0.0.0:{port}/"))
            .form(form)
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() {
        let directory = PathBuf::from("./derpherp");
        let result = start_server(directory, 8701).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[tokio::test]
    #[serial]
    async fn test_e2e() -> Fallible<()> {
        let port = 8702;
        start_test_server(port).await;

        // The stylesheet and script endpoints.
        let response = reqwest::get(format!("http://0.0.0.0:{port}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");
        let response = reqwest::get(format!("http://0.0.0.0:{port}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // An unknown route.
        let response = reqwest::get(format!("http://0.0.0.0:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The root endpoint: first topic in learn mode, sidebar present.
        let response = reqwest::get(format!("http://0.0.0.0:{port}/")).await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Objects &amp; Classes"));
        assert!(html.contains("OOP"));
        assert!(html.contains("Start Quiz"));

        // Enter the topic quiz.
        let html = post_action(port, &[("action", "Quiz")]).await?;
        assert!(html.contains("Question count: 3"));
        assert!(html.contains("Answer all 3 questions to submit"));

        // Answer one question, then submit.
        let html = post_action(
            port,
            &[("action", "Select"), ("position", "0"), ("option", "0")],
        )
        .await?;
        assert!(html.contains("option selected"));
        let html = post_action(port, &[("action", "Submit")]).await?;
        assert!(html.contains("Retake Examination"));
        assert!(html.contains("Correct answer"));
        assert!(html.contains("%"));

        // Retake: a fresh, unsubmitted session over the same bank.
        let html = post_action(port, &[("action", "Retry")]).await?;
        assert!(html.contains("Answer all 3 questions to submit"));
        assert!(!html.contains("Retake Examination"));

        // The comprehensive exam aggregates every topic bank.
        let html = post_action(port, &[("action", "Exam")]).await?;
        assert!(html.contains("Comprehensive Exam"));
        assert!(html.contains("Question count: 5"));

        // Flashcards.
        let html = post_action(port, &[("action", "Flashcards")]).await?;
        assert!(html.contains("Card 1 of 3"));
        assert!(html.contains("Question"));
        let html = post_action(port, &[("action", "Flip")]).await?;
        assert!(html.contains("Answer"));

        // Videos.
        let html = post_action(port, &[("action", "Videos")]).await?;
        assert!(html.contains("Lectures"));
        assert!(html.contains("App Fundamentals"));
        assert!(html.contains("/video/fundamentals.mp4"));

        // The review module: theory first, then its own quiz.
        let html = post_action(port, &[("action", "Review")]).await?;
        assert!(html.contains("Theory"));
        assert!(html.contains("Minimum Theory"));
        let html = post_action(port, &[("action", "Quiz")]).await?;
        assert!(html.contains("Review Quiz"));
        assert!(html.contains("Question count: 3"));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_video_endpoint() -> Fallible<()> {
        let port = 8703;
        start_test_server(port).await;

        let response = reqwest::get(format!("http://0.0.0.0:{port}/video/fundamentals.mp4")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "video/mp4");

        // Not listed in the catalog.
        let response = reqwest::get(format!("http://0.0.0.0:{port}/video/missing.mp4")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
