//! Terminal presentation
//!
//! Commands never call `colored` directly; they style text through the
//! [`Styler`] carried by the command context, so colors can be switched off
//! from the configuration or the command line.

pub mod format;
pub mod styler;

pub use format::{format_bytes, format_percentage, group_thousands, mask_token};
pub use styler::Styler;
