// SPDX-License-Identifier: GPL-3.0-or-later

#![doc = include_str!("../../doc/WP_README.md")]

mod api;
mod client;
mod mock;

pub use api::{load_view, ContentApi};
pub use client::WpClient;
pub use mock::*;
