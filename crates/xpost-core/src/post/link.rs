/// Strip the scheme and one trailing slash for display in the URL chip
/// (e.g. "https://example.com/path/" -> "example.com/path").
pub fn strip_url_prefix(url: &str) -> String {
    let stripped = url.replace("https://", "").replace("http://", "");
    match stripped.strip_suffix('/') {
        Some(s) => s.to_string(),
        None => stripped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_https_and_trailing_slash() {
        assert_eq!(strip_url_prefix("https://example.com/path/"), "example.com/path");
    }

    #[test]
    fn test_strip_http() {
        assert_eq!(strip_url_prefix("http://m3.material.io/"), "m3.material.io");
    }

    #[test]
    fn test_only_one_trailing_slash_removed() {
        assert_eq!(strip_url_prefix("https://research.google//"), "research.google/");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip_url_prefix("uxdesign.cc"), "uxdesign.cc");
    }
}
