// SPDX-License-Identifier: GPL-3.0-or-later

#![doc = include_str!("../../doc/WEB_README.md")]

pub mod resources;
mod server;
mod timing;

pub use server::build;
