//! Shortcode rendering.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::EmojiTable;

/// A `:name:` shortcode: one or more word characters between colons.
static SHORTCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r":\w+:").unwrap());

impl EmojiTable {
    /// Replaces every `:name:` shortcode in `text` with its table value.
    ///
    /// Unknown shortcodes render as themselves. Matching is one
    /// left-to-right pass over non-overlapping matches; replacement
    /// output is never rescanned.
    pub fn render<'a>(&self, text: &'a str) -> Cow<'a, str> {
        // Cheap reject: no colon means no shortcode.
        if !text.contains(':') {
            return Cow::Borrowed(text);
        }

        SHORTCODE_RE.replace_all(text, |caps: &regex::Captures| {
            self.get_by_name(&caps[0]).to_string()
        })
    }
}
