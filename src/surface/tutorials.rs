// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use listado_core::models::tutorial::TutorialSection;
use listado_utils::pagination::{PaginationAction, PaginationState};

/// Identifies one tutorial category tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Components,
    Layout,
    State,
    Gesture,
    Graphics,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Components,
        Tab::Layout,
        Tab::State,
        Tab::Gesture,
        Tab::Graphics,
    ];
}

/// One tab's full section list plus its page window
#[derive(Debug, Clone, Default)]
struct TabList {
    sections: Vec<TutorialSection>,
    pagination: PaginationState,
}

/// Tabbed tutorial catalog with one independent page window per tab.
///
/// Expansion flags live here, keyed by section title, instead of on the
/// shared section records.
pub struct TutorialCatalog {
    /// Section list and page window of every tab
    tabs: HashMap<Tab, TabList>,
    /// Expansion flag per section card
    expanded: HashMap<String, bool>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Callback once the section list of a tab is available
    SectionsLoaded(Tab, Vec<TutorialSection>),
    /// Try to move the page window of a tab
    Pagination(Tab, PaginationAction),
    /// Toggles the expansion flag of a section card
    ToggleExpanded(String),
}

pub enum Action {
    None,
    /// Asks the view showing this tab to reset its scroll position to the top
    ScrollToTop(Tab),
}

impl TutorialCatalog {
    pub fn new() -> Self {
        Self {
            tabs: Tab::ALL.into_iter().map(|tab| (tab, TabList::default())).collect(),
            expanded: HashMap::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::SectionsLoaded(tab, sections) => {
                let list = self.tabs.entry(tab).or_default();
                list.pagination = list.pagination.update_total_items(sections.len());
                list.sections = sections;
                Action::None
            }
            Message::Pagination(tab, action) => {
                let Some(list) = self.tabs.get_mut(&tab) else {
                    return Action::None;
                };

                let next = list.pagination.apply(action);
                let page_changed = next.current_page != list.pagination.current_page;
                list.pagination = next;

                if page_changed {
                    log::debug!("{tab:?} tab moved to page {}", next.current_page);
                    Action::ScrollToTop(tab)
                } else {
                    Action::None
                }
            }
            Message::ToggleExpanded(title) => {
                let expanded = self.expanded.entry(title).or_insert(false);
                *expanded = !*expanded;
                Action::None
            }
        }
    }

    /// Page window of a tab
    pub fn pagination(&self, tab: Tab) -> PaginationState {
        self.tabs.get(&tab).map(|list| list.pagination).unwrap_or_default()
    }

    /// Full ordered section list of a tab
    pub fn sections(&self, tab: Tab) -> &[TutorialSection] {
        self.tabs.get(&tab).map(|list| list.sections.as_slice()).unwrap_or(&[])
    }

    /// Exactly the visible page of a tab's section list
    pub fn visible(&self, tab: Tab) -> &[TutorialSection] {
        self.tabs
            .get(&tab)
            .map(|list| list.pagination.slice(&list.sections))
            .unwrap_or(&[])
    }

    /// Every section of every tab, in tab order
    pub fn all_sections(&self) -> impl Iterator<Item = &TutorialSection> {
        Tab::ALL.into_iter().flat_map(|tab| self.sections(tab).iter())
    }

    /// Expansion flag of a section card
    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded.get(title).copied().unwrap_or(false)
    }
}

impl Default for TutorialCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(prefix: &str, count: usize) -> Vec<TutorialSection> {
        (0..count)
            .map(|index| {
                TutorialSection::new(
                    format!("{prefix} {index}"),
                    format!("Description of {prefix} {index}"),
                    vec![prefix.to_string()],
                )
            })
            .collect()
    }

    #[test]
    fn loading_sections_sets_the_tab_total() {
        let mut catalog = TutorialCatalog::new();
        catalog.update(Message::SectionsLoaded(Tab::Components, sections("Row", 25)));

        let pagination = catalog.pagination(Tab::Components);
        assert_eq!(pagination.total_items, 25);
        assert_eq!(pagination.total_pages(), 3);
        assert_eq!(catalog.visible(Tab::Components).len(), 10);
    }

    #[test]
    fn tabs_paginate_independently() {
        let mut catalog = TutorialCatalog::new();
        catalog.update(Message::SectionsLoaded(Tab::Components, sections("Row", 25)));
        catalog.update(Message::SectionsLoaded(Tab::Layout, sections("Layout", 5)));

        let action = catalog.update(Message::Pagination(Tab::Components, PaginationAction::Forward));
        assert!(matches!(action, Action::ScrollToTop(Tab::Components)));

        assert_eq!(catalog.pagination(Tab::Components).current_page, 1);
        assert_eq!(catalog.pagination(Tab::Layout).current_page, 0);
    }

    #[test]
    fn gated_navigation_does_not_scroll() {
        let mut catalog = TutorialCatalog::new();
        catalog.update(Message::SectionsLoaded(Tab::State, sections("State", 5)));

        // Single page, Forward and Back are both no-ops
        let action = catalog.update(Message::Pagination(Tab::State, PaginationAction::Forward));
        assert!(matches!(action, Action::None));
        let action = catalog.update(Message::Pagination(Tab::State, PaginationAction::Back));
        assert!(matches!(action, Action::None));
        assert_eq!(catalog.pagination(Tab::State).current_page, 0);
    }

    #[test]
    fn last_page_shows_the_partial_slice() {
        let mut catalog = TutorialCatalog::new();
        catalog.update(Message::SectionsLoaded(Tab::Gesture, sections("Drag", 25)));
        catalog.update(Message::Pagination(Tab::Gesture, PaginationAction::GoTo(2)));

        let visible = catalog.visible(Tab::Gesture);
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].title, "Drag 20");
    }

    #[test]
    fn reloading_a_shrunk_tab_resets_its_page() {
        let mut catalog = TutorialCatalog::new();
        catalog.update(Message::SectionsLoaded(Tab::Graphics, sections("Canvas", 50)));
        catalog.update(Message::Pagination(Tab::Graphics, PaginationAction::GoTo(4)));

        catalog.update(Message::SectionsLoaded(Tab::Graphics, sections("Canvas", 25)));
        assert_eq!(catalog.pagination(Tab::Graphics).current_page, 0);
        assert_eq!(catalog.visible(Tab::Graphics).len(), 10);
    }

    #[test]
    fn expansion_lives_on_the_surface() {
        let mut catalog = TutorialCatalog::new();
        catalog.update(Message::SectionsLoaded(Tab::Components, sections("Row", 2)));

        assert!(!catalog.is_expanded("Row 0"));
        catalog.update(Message::ToggleExpanded("Row 0".to_string()));
        assert!(catalog.is_expanded("Row 0"));
        assert!(!catalog.is_expanded("Row 1"));

        catalog.update(Message::ToggleExpanded("Row 0".to_string()));
        assert!(!catalog.is_expanded("Row 0"));

        // The shared records are untouched by expansion
        assert_eq!(catalog.sections(Tab::Components), sections("Row", 2));
    }
}
