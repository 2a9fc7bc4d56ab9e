// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// One product of the storefront catalog.
///
/// Prices arrive already formatted by the catalog backend, so they stay
/// display strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub weight: String,
    pub price: String,
    /// Pre-discount price, shown crossed out when present
    pub original_price: Option<String>,
    /// Percentage for the discount badge
    pub discount_percentage: Option<u8>,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, weight: impl Into<String>, price: impl Into<String>) -> Self {
        Product {
            id,
            name: name.into(),
            weight: weight.into(),
            price: price.into(),
            original_price: None,
            discount_percentage: None,
        }
    }
}
