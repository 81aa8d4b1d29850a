//! Record of successfully loaded URLs.

/// Append-only list of loaded URLs, oldest first.
///
/// Entries are only ever added; nothing is removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a URL as the newest entry.
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.push(url.into());
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recently loaded URL.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_appends_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);

        history.push("https://a.example");
        history.push(String::from("https://b.example"));
        history.push("https://a.example");

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), ["https://a.example", "https://b.example", "https://a.example"]);
        assert_eq!(history.last(), Some("https://a.example"));
    }
}
