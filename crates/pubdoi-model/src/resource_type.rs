//! Resource type categorization.

/// General resource category accepted by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    JournalArticle,
    Dissertation,
    Text,
}

impl ResourceCategory {
    /// Registry spelling of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JournalArticle => "JournalArticle",
            Self::Dissertation => "Dissertation",
            Self::Text => "Text",
        }
    }

    /// Categorize a free-form resource type label.
    ///
    /// Matching is case-insensitive substring search, checked in order.
    /// Total: every label maps to some category, with `Text` as the
    /// catch-all (covering "thesis" and unknown labels alike).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("journal") {
            Self::JournalArticle
        } else if lower.contains("dissertation") {
            Self::Dissertation
        } else {
            Self::Text
        }
    }
}
