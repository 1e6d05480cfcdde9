//! Emoji shortcode utilities.
//!
//! Maps `:name:` shortcodes to unicode emoji values, renders shortcodes
//! inside arbitrary text, searches the table by keyword, and round-trips
//! emoji characters through the bracketed `[\uHEX]` escape notation.
//!
//! The crate ships an embedded shortcode table (`emoji.toml`); the
//! top-level functions all operate on it. Custom tables go through
//! [`EmojiTable`] and offer the same operations as methods.
//!
//! # Example
//!
//! ```
//! use emojify::{render, search, to_unicode};
//!
//! assert_eq!(render("a :smile: message"), "a 😄 message");
//! assert_eq!(to_unicode("💖"), "1f496");
//! assert!(search("rocket").contains_key(":rocket:"));
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

mod config;
mod escape;
mod render;
mod table;

pub mod prelude;

pub use config::TableConfig;
pub use escape::{decode, encode, from_unicode, to_unicode, to_unicode_with_prefix};
pub use table::{DEFAULT_SEARCH_LIMIT, EmojiTable, default_table};

/// Returns the unicode value for the given shortcode.
///
/// If the shortcode is not in the table, the input is returned unchanged;
/// a miss is not an error.
///
/// # Example
///
/// ```
/// use emojify::get_by_name;
///
/// assert_eq!(get_by_name(":smile:"), "😄");
/// assert_eq!(get_by_name(":not_a_code:"), ":not_a_code:");
/// ```
pub fn get_by_name(name: &str) -> &str {
    default_table().get_by_name(name)
}

/// Alias of [`get_by_name`].
pub fn emoji(name: &str) -> &str {
    get_by_name(name)
}

/// Searches shortcodes containing `keyword`, capped at
/// [`DEFAULT_SEARCH_LIMIT`] results.
pub fn search(keyword: &str) -> HashMap<String, String> {
    default_table().search(keyword)
}

/// Searches shortcodes containing `keyword`, capped at `limit` results.
pub fn search_with_limit(keyword: &str, limit: usize) -> HashMap<String, String> {
    default_table().search_with_limit(keyword, limit)
}

/// Renders every `:name:` shortcode in `text` against the default table.
///
/// Unknown shortcodes render as themselves. Input without a `:` is
/// returned borrowed.
///
/// # Example
///
/// ```
/// use emojify::render;
///
/// assert_eq!(render("deploy :rocket: now"), "deploy 🚀 now");
/// ```
pub fn render(text: &str) -> Cow<'_, str> {
    default_table().render(text)
}
