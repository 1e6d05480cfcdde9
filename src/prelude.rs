//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in emojify.
//!
//! # Example
//!
//! ```
//! use emojify::prelude::*;
//!
//! assert_eq!(render(":tada: shipped"), "🎉 shipped");
//! ```

pub use crate::{
    EmojiTable,
    TableConfig,

    // Escape-token codec
    decode,
    default_table,
    emoji,
    encode,
    from_unicode,
    // Lookup and search
    get_by_name,
    // Rendering
    render,
    search,
    search_with_limit,
    to_unicode,
    to_unicode_with_prefix,
};
