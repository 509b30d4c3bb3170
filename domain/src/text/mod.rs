//! Text utilities for WordPress content.
//!
//! - [`html`]: entity decoding, tag stripping, excerpts, reading time
//! - [`fields`]: parsers for legacy newline-delimited custom fields

pub mod fields;
pub mod html;
