//! Article value object

/// Shown when an article has no title
pub const TITLE_PLACEHOLDER: &str = "No title";

/// Shown when an article has neither description nor content
pub const BODY_PLACEHOLDER: &str = "No detailed content available. Open the link below.";

/// An externally-supplied news article. All fields are optional because the
/// search API may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
}

impl Article {
    /// The headline shown in the numbered list.
    pub fn headline(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => TITLE_PLACEHOLDER,
        }
    }

    /// Description and content concatenated for the detail view, or the
    /// placeholder when both are empty.
    pub fn body(&self) -> String {
        let description = self.description.as_deref().unwrap_or("");
        let content = self.content.as_deref().unwrap_or("");

        let full = format!("{}\n\n{}", description, content);
        let full = full.trim();
        if full.is_empty() {
            BODY_PLACEHOLDER.to_string()
        } else {
            full.to_string()
        }
    }

    /// The source link, or an empty string when absent.
    pub fn link(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}
