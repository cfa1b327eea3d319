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

use pulldown_cmark::Options;
use pulldown_cmark::Parser;
use pulldown_cmark::html::push_html;

pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Like `markdown_to_html`, but strips the paragraph wrapper from
/// single-paragraph input.
pub fn markdown_to_html_inline(markdown: &str) -> String {
    let text = markdown_to_html(markdown);
    if text.starts_with("<p>") && text.ends_with("</p>\n") {
        let len = text.len();
        text[3..len - 5].to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("This is **bold** text.");
        assert_eq!(html, "<p>This is <strong>bold</strong> text.</p>\n");
    }

    #[test]
    fn test_markdown_to_html_table() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_markdown_to_html_inline() {
        let html = markdown_to_html_inline("This is **bold** text.");
        assert_eq!(html, "This is <strong>bold</strong> text.");
    }

    #[test]
    fn test_markdown_to_html_inline_heading() {
        let html = markdown_to_html_inline("# Foo");
        assert_eq!(html, "<h1>Foo</h1>\n");
    }
}
