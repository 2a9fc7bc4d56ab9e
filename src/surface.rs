// SPDX-License-Identifier: GPL-3.0-only

pub mod search;
pub mod storefront;
pub mod tutorials;

pub use search::SearchResults;
pub use storefront::Storefront;
pub use tutorials::TutorialCatalog;
