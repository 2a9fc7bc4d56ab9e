// SPDX-License-Identifier: GPL-3.0-only

//! Headless state models for paginated list surfaces.

pub mod surface;

pub use listado_core::models;
pub use listado_utils::{page_strip, pagination};
