//! The shortcode table and the process-wide default instance.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::TableConfig;

/// Default result cap for [`EmojiTable::search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Longest keyword (in bytes, after trimming) that a search accepts.
const MAX_KEYWORD_LEN: usize = 12;

static DEFAULT_TABLE: Lazy<EmojiTable> = Lazy::new(|| {
    let config = TableConfig::load_default().expect("embedded shortcode table should parse");
    EmojiTable::from_config(&config).expect("embedded shortcode table should be valid")
});

/// Returns the table built from the embedded `emoji.toml` asset.
///
/// Built on first access, then shared read-only; safe to use from any
/// number of threads.
pub fn default_table() -> &'static EmojiTable {
    &DEFAULT_TABLE
}

/// An immutable mapping from `:name:` shortcodes to unicode emoji values.
///
/// # Example
///
/// ```
/// use emojify::EmojiTable;
///
/// let table = EmojiTable::from_entries([
///     (":ferris:".to_string(), "🦀".to_string()),
///     (":cog:".to_string(), "⚙️".to_string()),
/// ])
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(":ferris:"), Some("🦀"));
/// assert_eq!(table.get_by_name(":missing:"), ":missing:");
/// ```
#[derive(Debug, Clone)]
pub struct EmojiTable {
    entries: HashMap<String, String>,
}

impl EmojiTable {
    /// Builds a table from `(shortcode, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a shortcode is not of the `:name:` form, a
    /// value is empty, a shortcode occurs twice, or no entries are given.
    pub fn from_entries<I>(entries: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = HashMap::new();
        for (name, value) in entries {
            validate_shortcode(&name)?;
            if value.is_empty() {
                return Err(format!("shortcode '{}' has an empty value", name));
            }
            if table.insert(name.clone(), value).is_some() {
                return Err(format!("duplicate shortcode: '{}'", name));
            }
        }

        if table.is_empty() {
            return Err("shortcode table cannot be empty".to_string());
        }

        Ok(EmojiTable { entries: table })
    }

    /// Builds a table from a parsed [`TableConfig`].
    pub fn from_config(config: &TableConfig) -> Result<Self, String> {
        Self::from_entries(
            config
                .shortcodes
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        )
    }

    /// Returns the number of shortcodes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no shortcodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the value for an exact shortcode.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns the value for `name`, or `name` itself when absent.
    ///
    /// A miss is not an error; unknown shortcodes pass through unchanged.
    pub fn get_by_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Iterates over all `(shortcode, value)` pairs in unspecified order.
    pub fn shortcodes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Searches shortcodes containing `keyword`, capped at
    /// [`DEFAULT_SEARCH_LIMIT`] results.
    pub fn search(&self, keyword: &str) -> HashMap<String, String> {
        self.search_with_limit(keyword, DEFAULT_SEARCH_LIMIT)
    }

    /// Searches shortcodes containing `keyword` as a substring.
    ///
    /// The keyword is trimmed first; an empty or overlong keyword (more
    /// than 12 bytes) yields an empty map. Scanning stops as soon as
    /// `limit` entries are collected. Table order is unspecified, so the
    /// surviving subset of a truncated search may differ run to run.
    pub fn search_with_limit(&self, keyword: &str, limit: usize) -> HashMap<String, String> {
        let keyword = keyword.trim();
        if keyword.is_empty() || keyword.len() > MAX_KEYWORD_LEN {
            return HashMap::new();
        }

        let mut found = HashMap::with_capacity(limit.min(self.entries.len()));
        for (name, value) in &self.entries {
            if found.len() == limit {
                break;
            }

            if name.contains(keyword) {
                found.insert(name.clone(), value.clone());
            }
        }

        found
    }
}

/// A shortcode is `:name:` where the name is non-empty and contains
/// neither `:` nor whitespace.
fn validate_shortcode(name: &str) -> Result<(), String> {
    let inner = name
        .strip_prefix(':')
        .and_then(|rest| rest.strip_suffix(':'))
        .ok_or_else(|| format!("shortcode '{}' is not of the :name: form", name))?;

    if inner.is_empty() || inner.contains(':') || inner.chars().any(char::is_whitespace) {
        return Err(format!("shortcode '{}' is not of the :name: form", name));
    }

    Ok(())
}
