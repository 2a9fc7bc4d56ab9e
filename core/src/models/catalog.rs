// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use super::banner::Banner;
use super::product::Product;

/// One entry of the storefront catalog, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEntry {
    Product(Product),
    Banner(Banner),
}

/// One row of the storefront grid after pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    /// Two products side by side; a trailing odd product renders alone
    ProductPair {
        left: Product,
        right: Option<Product>,
    },
    Banner(Banner),
    /// Frequently-bought-together section inserted under a product row
    FrequentlyBought(Vec<Product>),
}

/// Product rows between two interleaved banners
const ROWS_PER_BANNER: usize = 4;

/// Turns a page of catalog entries into display rows.
///
/// Products are paired two per row; banners are pulled out of the entry order
/// and re-inserted one after every [`ROWS_PER_BANNER`] product rows, dropping
/// whatever banners the row count leaves no room for.
pub fn display_rows(entries: &[CatalogEntry]) -> Vec<DisplayRow> {
    let mut products = Vec::new();
    let mut banners = Vec::new();

    for entry in entries {
        match entry {
            CatalogEntry::Product(product) => products.push(product.clone()),
            CatalogEntry::Banner(banner) => banners.push(banner.clone()),
        }
    }

    let mut rows = Vec::new();
    let mut banners = banners.into_iter();
    let mut products = products.into_iter();
    let mut row_count = 0;

    while let Some(left) = products.next() {
        rows.push(DisplayRow::ProductPair {
            left,
            right: products.next(),
        });
        row_count += 1;

        if row_count % ROWS_PER_BANNER == 0 {
            if let Some(banner) = banners.next() {
                rows.push(DisplayRow::Banner(banner));
            }
        }
    }

    rows
}
