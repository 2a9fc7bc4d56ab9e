// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashSet;

use listado_core::models::tutorial::TutorialSection;
use listado_utils::pagination::{PaginationAction, PaginationState};

use super::tutorials::TutorialCatalog;

/// Paginated search results over the whole tutorial catalog.
///
/// Submitting a query recomputes the result list and always restarts
/// pagination on the first page, no matter whether the old page would still
/// fit the new count.
pub struct SearchResults {
    /// Search bar value
    query: String,
    /// Filtered sections, first-occurrence order across tabs
    results: Vec<TutorialSection>,
    /// Page window over the results
    pagination: PaginationState,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Callback after writing on the search box
    QueryChanged(String),
    /// Callback after submitting the search box
    SubmitSearch,
    /// Callback after clicking on the clear search button
    ClearSearch,
    /// Try to move the page window
    Pagination(PaginationAction),
}

pub enum Action {
    None,
    /// Asks the results view to reset its scroll position to the top
    ScrollToTop,
}

impl SearchResults {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            pagination: PaginationState::default(),
        }
    }

    pub fn update(&mut self, message: Message, catalog: &TutorialCatalog) -> Action {
        match message {
            Message::QueryChanged(value) => {
                self.query = value;
                Action::None
            }
            Message::SubmitSearch => {
                self.results = filter_sections(&self.query, catalog.all_sections());
                log::debug!("query {:?} matched {} sections", self.query, self.results.len());

                // A fresh query restarts pagination unconditionally
                self.pagination = PaginationState {
                    current_page: 0,
                    total_items: self.results.len(),
                    ..self.pagination
                };
                Action::ScrollToTop
            }
            Message::ClearSearch => {
                self.query.clear();
                self.results.clear();
                self.pagination = PaginationState {
                    current_page: 0,
                    total_items: 0,
                    ..self.pagination
                };
                Action::None
            }
            Message::Pagination(action) => {
                let next = self.pagination.apply(action);
                let page_changed = next.current_page != self.pagination.current_page;
                self.pagination = next;

                if page_changed {
                    Action::ScrollToTop
                } else {
                    Action::None
                }
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Full filtered result list
    pub fn results(&self) -> &[TutorialSection] {
        &self.results
    }

    /// Exactly the visible page of the result list
    pub fn visible(&self) -> &[TutorialSection] {
        self.pagination.slice(&self.results)
    }

    /// Page window over the results
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }
}

impl Default for SearchResults {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches the query against every section, keeping the first occurrence of
/// each title
fn filter_sections<'a>(
    query: &str,
    sections: impl Iterator<Item = &'a TutorialSection>,
) -> Vec<TutorialSection> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for section in sections {
        if section.matches_query(query) && seen.insert(section.title.clone()) {
            results.push(section.clone());
        }
    }

    results
}
