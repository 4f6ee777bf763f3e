// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//! Rust bindings for the content entities this site reads from WordPress
//! and the view models it hands to the rendering layer.

mod media;
mod project;
mod view;

pub use media::*;
pub use project::*;
pub use view::*;
