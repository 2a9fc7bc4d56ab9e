// SPDX-License-Identifier: GPL-3.0-only

pub mod banner;
pub mod catalog;
pub mod product;
pub mod tutorial;
