//! Data model shared by the text, layout and conversion stages.
//!
//! Every value here is created and consumed within a single conversion
//! call; nothing is cached between calls.

mod document;
mod layout;

pub(crate) use document::display_name;
pub use document::{NormalizedText, TextDocument};
pub use layout::{LayoutLine, LayoutStats};
