// SPDX-License-Identifier: GPL-3.0-or-later

#![doc = include_str!("../../doc/I18N_README.md")]

mod catalog;
mod store;

pub(crate) use catalog::lookup;
pub use catalog::Locale;
pub use store::LanguageStore;
