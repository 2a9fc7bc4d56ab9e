// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// One entry of the tutorial catalog.
///
/// The title doubles as the item key for list rendering and expansion state;
/// whether a card is expanded is owned by the displaying surface, never stored
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialSection {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl TutorialSection {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        TutorialSection {
            title: title.into(),
            description: description.into(),
            tags,
        }
    }

    /// Returns true if the query matches the title, the description or any
    /// tag, ignoring case. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> TutorialSection {
        TutorialSection::new(
            "Tutorial 2-1 Text",
            "Create Text component with different properties",
            vec!["Text".to_string(), "FontStyle".to_string()],
        )
    }

    #[test]
    fn query_matches_title_description_and_tags() {
        let s = section();
        assert!(s.matches_query("2-1"));
        assert!(s.matches_query("component"));
        assert!(s.matches_query("fontstyle"));
        assert!(!s.matches_query("Canvas"));
    }

    #[test]
    fn query_is_case_insensitive() {
        let s = section();
        assert!(s.matches_query("TEXT"));
        assert!(s.matches_query("text"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(section().matches_query(""));
    }
}
