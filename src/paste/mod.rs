//! Paste service integration.
//!
//! Results longer than [`DISPLAY_THRESHOLD`] characters are uploaded so the
//! rendered output can link to the full text.

mod hastebin;
mod overflow;

pub use hastebin::HastebinClient;
pub use overflow::{Overflow, OverflowUploader, DISPLAY_THRESHOLD};
