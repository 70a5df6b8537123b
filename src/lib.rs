//! # emoji-shortcuts
//!
//! Rewrites ASCII emoticons in chat messages (`:)`, `=))`, `;)`) into canonical
//! emoji tokens (`:yh_smile:`) while leaving fenced and inline code untouched.
//!
//! ```
//! assert_eq!(
//!     emoji_shortcuts::process_message("Hello :) check `code :)`"),
//!     "Hello :yh_smile: check `code :)`"
//! );
//! ```

pub mod core;

pub use crate::core::hooks::{Post, message_will_be_posted, message_will_be_updated, rewrite};
pub use crate::core::mapping::{MappingError, MappingTable, ShortcutRule, Vocabulary};
pub use crate::core::pipeline::{Engine, engine, process_message, process_message_with};
