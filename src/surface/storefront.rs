// SPDX-License-Identifier: GPL-3.0-only

use listado_core::models::catalog::{self, CatalogEntry, DisplayRow};
use listado_core::models::product::Product;
use listado_utils::pagination::{PaginationAction, PaginationState};

/// Catalog entries shown on one storefront page
const STOREFRONT_PAGE_SIZE: usize = 8;

/// Paginated product grid with interleaved banners and a
/// frequently-bought-together section.
pub struct Storefront {
    /// Full catalog in display order
    entries: Vec<CatalogEntry>,
    /// Page window over the catalog
    pagination: PaginationState,
    /// Products suggested next to the one last added to the cart
    frequently_bought: Vec<Product>,
    /// Product whose cart addition triggered the suggestions
    added_product_id: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Callback once the catalog entries are available
    EntriesLoaded(Vec<CatalogEntry>),
    /// Try to move the page window
    Pagination(PaginationAction),
    /// A product was added to the cart
    AddToCart(u32),
    /// Callback with the products frequently bought with the added one
    FrequentlyBoughtLoaded(Vec<Product>),
    /// Closes the frequently-bought-together section
    DismissFrequentlyBought,
}

pub enum Action {
    None,
    /// Asks the grid view to reset its scroll position to the top
    ScrollToTop,
    /// Asks the parent to look up the products frequently bought with this one
    FetchFrequentlyBought(u32),
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pagination: PaginationState::new(STOREFRONT_PAGE_SIZE),
            frequently_bought: Vec::new(),
            added_product_id: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::EntriesLoaded(entries) => {
                self.pagination = self.pagination.update_total_items(entries.len());
                self.entries = entries;
                Action::None
            }
            Message::Pagination(action) => {
                let next = self.pagination.apply(action);
                let page_changed = next.current_page != self.pagination.current_page;
                self.pagination = next;

                if page_changed {
                    log::debug!("storefront moved to page {}", next.current_page);
                    Action::ScrollToTop
                } else {
                    Action::None
                }
            }
            Message::AddToCart(product_id) => {
                self.added_product_id = Some(product_id);
                self.frequently_bought.clear();
                Action::FetchFrequentlyBought(product_id)
            }
            Message::FrequentlyBoughtLoaded(products) => {
                if self.added_product_id.is_some() {
                    self.frequently_bought = products;
                }
                Action::None
            }
            Message::DismissFrequentlyBought => {
                self.added_product_id = None;
                self.frequently_bought.clear();
                Action::None
            }
        }
    }

    /// Page window over the catalog
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Exactly the visible page of the catalog
    pub fn visible(&self) -> &[CatalogEntry] {
        self.pagination.slice(&self.entries)
    }

    /// Rows of the visible page, with the frequently-bought section inserted
    /// right under the row holding the product that was added to the cart
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let mut rows = catalog::display_rows(self.visible());

        let Some(added_id) = self.added_product_id else {
            return rows;
        };
        if self.frequently_bought.is_empty() {
            return rows;
        }

        let position = rows.iter().position(|row| match row {
            DisplayRow::ProductPair { left, right } => {
                left.id == added_id || right.as_ref().is_some_and(|product| product.id == added_id)
            }
            _ => false,
        });

        if let Some(index) = position {
            rows.insert(index + 1, DisplayRow::FrequentlyBought(self.frequently_bought.clone()));
        }

        rows
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
