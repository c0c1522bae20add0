use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::models::Post;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct PostFile {
    #[serde(default)]
    posts: Vec<Post>,
}

/// Built-in feed shown when no posts file is configured
pub fn sample_posts() -> Vec<Post> {
    vec![
        sample(
            1,
            "@androiddev",
            "Android Developers",
            "1h",
            "Jetpack Compose 1.7 brings better performance and Material 3 polish. Explore the release notes here:",
            "https://developer.android.com/jetpack/compose/releases",
            "developer.android.com/jetpack/compose/releases",
        ),
        sample(
            2,
            "@material_design",
            "Material Design",
            "2h",
            "Discover the latest Material Design 3 guidelines and examples for Android and web.",
            "https://m3.material.io/",
            "m3.material.io",
        ),
        sample(
            3,
            "@wikipedia_ai",
            "Wikipedia",
            "4h",
            "Learn what Large Language Models are and how they work under the hood.",
            "https://en.wikipedia.org/wiki/Large_language_model",
            "en.wikipedia.org/wiki/Large_language_model",
        ),
        sample(
            4,
            "@google_research",
            "Google Research",
            "6h",
            "Learn how AI is powering the next generation of creativity and reasoning tools.",
            "https://research.google/",
            "research.google",
        ),
        sample(
            5,
            "@uxdesign",
            "UX Design",
            "9h",
            "Explore design case studies and articles on accessibility, minimalism, and typography in modern UI.",
            "https://uxdesign.cc/",
            "uxdesign.cc",
        ),
    ]
}

fn sample(
    id: u32,
    user_handle: &str,
    user_name: &str,
    time: &str,
    content: &str,
    url: &str,
    url_text: &str,
) -> Post {
    Post {
        id,
        user_handle: user_handle.to_string(),
        user_name: user_name.to_string(),
        time: time.to_string(),
        content: content.to_string(),
        url: Some(url.to_string()),
        url_text: Some(url_text.to_string()),
    }
}

/// Parse a TOML document of `[[posts]]` tables, keeping file order
pub fn parse_posts(content: &str) -> Result<Vec<Post>> {
    let file: PostFile =
        toml::from_str(content).map_err(|e| Error::PostSource(e.to_string()))?;

    if file.posts.is_empty() {
        return Err(Error::PostSource("no [[posts]] entries found".to_string()));
    }

    let mut seen = HashSet::new();
    for post in &file.posts {
        if !seen.insert(post.id) {
            return Err(Error::PostSource(format!("duplicate post id {}", post.id)));
        }
    }

    Ok(file.posts)
}

/// Load the feed once at startup: from `path` when given, otherwise the samples
pub fn load_posts(path: Option<&Path>) -> Result<Vec<Post>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let posts = parse_posts(&content)?;
            tracing::info!("Loaded {} posts from {}", posts.len(), path.display());
            Ok(posts)
        }
        None => Ok(sample_posts()),
    }
}
