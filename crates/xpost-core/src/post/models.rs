use serde::{Deserialize, Serialize};

use super::link::strip_url_prefix;

pub type PostId = u32;

/// A post in the feed. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user_handle: String,
    pub user_name: String,
    /// Relative timestamp label ("1h")
    pub time: String,
    pub content: String,
    /// Link opened in the page viewer
    #[serde(default)]
    pub url: Option<String>,
    /// Display text for the link
    #[serde(default)]
    pub url_text: Option<String>,
}

impl Post {
    /// Whether tapping the post's link does anything
    pub fn has_link(&self) -> bool {
        self.url.is_some()
    }

    /// Text shown in the link zone of the post card
    pub fn link_label(&self) -> Option<String> {
        match (&self.url_text, &self.url) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(url)) => Some(strip_url_prefix(url)),
            (None, None) => None,
        }
    }

    /// "@handle · 1h"
    pub fn byline(&self) -> String {
        format!("{} · {}", self.user_handle, self.time)
    }

    /// Single-line teaser used when the card is partially collapsed:
    /// text before the first line break, then before the first period, plus "...".
    pub fn first_sentence(&self) -> String {
        let first_line = self.content.split('\n').next().unwrap_or("");
        let sentence = first_line.split('.').next().unwrap_or("");
        format!("{}...", sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str, url: Option<&str>, url_text: Option<&str>) -> Post {
        Post {
            id: 1,
            user_handle: "@peter_mullih".into(),
            user_name: "Peter Muli".into(),
            time: "1h".into(),
            content: content.into(),
            url: url.map(String::from),
            url_text: url_text.map(String::from),
        }
    }

    #[test]
    fn test_first_sentence() {
        let p = post(
            "Urgently looking for a designer. Salary 100,000.\n\nMungu Mbele.",
            None,
            None,
        );
        assert_eq!(p.first_sentence(), "Urgently looking for a designer...");
    }

    #[test]
    fn test_first_sentence_stops_at_newline() {
        let p = post("No period here\nSecond line.", None, None);
        assert_eq!(p.first_sentence(), "No period here...");
    }

    #[test]
    fn test_link_label_prefers_display_text() {
        let p = post("x", Some("https://m3.material.io/"), Some("Material 3"));
        assert_eq!(p.link_label().as_deref(), Some("Material 3"));

        let p = post("x", Some("https://m3.material.io/"), None);
        assert_eq!(p.link_label().as_deref(), Some("m3.material.io"));

        let p = post("x", None, None);
        assert!(p.link_label().is_none());
        assert!(!p.has_link());
    }

    #[test]
    fn test_byline() {
        let p = post("x", None, None);
        assert_eq!(p.byline(), "@peter_mullih · 1h");
    }
}
