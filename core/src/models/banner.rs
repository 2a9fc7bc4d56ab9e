// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Promotional banner interleaved between product rows of the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
}
