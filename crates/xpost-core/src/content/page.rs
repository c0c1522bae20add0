/// A downloaded page, kept as HTML and rendered to text on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Final URL after redirects
    pub url: String,
    pub title: Option<String>,
    pub html: String,
}

impl Page {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        let title = extract_title(&html);
        Self {
            url: url.into(),
            title,
            html,
        }
    }

    /// Render the page as wrapped plain text lines for the given width
    pub fn render_lines(&self, width: u16) -> Vec<String> {
        let width = (width as usize).max(20);
        let text = html2text::from_read(self.html.as_bytes(), width)
            .unwrap_or_else(|_| self.html.clone());
        text.lines().map(|line| line.to_string()).collect()
    }
}

/// Content of the first `<title>` element, whitespace-collapsed
fn extract_title(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let start = open + lower[open..].find('>')? + 1;
    let end = start + lower[start..].find("</title>")?;

    let title = html[start..end].split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
