//! The bracketed `[\uHEX]` escape-token codec.
//!
//! Tokens encode a single code point in lowercase hexadecimal, e.g.
//! `[\u1f496]` for 💖. Decoding is forgiving: a token that does not name
//! a valid code point stays in the text untouched.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// A candidate escape token: brackets around backslashes and
/// alphanumerics, e.g. `[\u1f680]`.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[\\u0-9a-zA-Z]+\]").unwrap());

/// Strips the `[\u` prefix and `]` suffix from a matched token.
static TOKEN_TRIM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\\u|\]").unwrap());

/// Replaces every `[\uHEX]` token in `text` with its code point's character.
///
/// Tokens parse independently; one whose digits are not base-16, overflow
/// 32 bits, or name no valid code point stays in the output as literal
/// text. All occurrences of one token text are replaced together, so
/// duplicate tokens coalesce.
///
/// # Example
///
/// ```
/// use emojify::decode;
///
/// assert_eq!(decode(r"a msg [\u1f496]"), "a msg 💖");
/// assert_eq!(decode(r"bad [\uZZZZ] token"), r"bad [\uZZZZ] token");
/// ```
pub fn decode(text: &str) -> Cow<'_, str> {
    let tokens: Vec<&str> = TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = text.to_string();
    for token in tokens {
        let digits = TOKEN_TRIM_RE.replace_all(token, "");
        if let Ok(value) = u32::from_str_radix(&digits, 16) {
            if let Some(c) = char::from_u32(value) {
                out = out.replace(token, &c.to_string());
            }
        }
    }

    Cow::Owned(out)
}

/// Alias of [`decode`].
pub fn from_unicode(text: &str) -> Cow<'_, str> {
    decode(text)
}

/// Replaces every four-byte code point in `text` with its `[\uHEX]` token.
///
/// Only code points whose UTF-8 form is exactly four bytes become tokens;
/// one- to three-byte characters (ASCII, accented latin, CJK) copy
/// through verbatim.
///
/// # Example
///
/// ```
/// use emojify::encode;
///
/// assert_eq!(encode("gift 💖"), r"gift [\u1f496]");
/// assert_eq!(encode("café 東京"), "café 東京");
/// ```
pub fn encode(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.len_utf8() == 4) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.len_utf8() == 4 {
            out.push_str(&format!(r"[\u{:x}]", c as u32));
        } else {
            out.push(c);
        }
    }

    Cow::Owned(out)
}

/// Formats the first code point of `emoji` as lowercase hexadecimal.
///
/// # Example
///
/// ```
/// use emojify::to_unicode;
///
/// assert_eq!(to_unicode("💖"), "1f496");
/// ```
pub fn to_unicode(emoji: &str) -> String {
    to_unicode_with_prefix(emoji, "")
}

/// Formats the first code point of `emoji` as lowercase hexadecimal with
/// `prefix` prepended.
///
/// An empty input yields an empty string, without the prefix.
///
/// # Example
///
/// ```
/// use emojify::to_unicode_with_prefix;
///
/// assert_eq!(to_unicode_with_prefix("💖", "\\U000"), "\\U0001f496");
/// ```
pub fn to_unicode_with_prefix(emoji: &str, prefix: &str) -> String {
    match emoji.chars().next() {
        Some(c) => format!("{}{:x}", prefix, c as u32),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_replaces_token() {
        assert_eq!(decode(r"a msg [\u1f496]"), "a msg 💖");
        assert_eq!(decode(r"[\u1f680] launch"), "🚀 launch");
    }

    #[test]
    fn test_decode_without_tokens_borrows_input() {
        let out = decode("nothing bracketed here");
        assert_eq!(out, "nothing bracketed here");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_handles_ascii_code_points() {
        assert_eq!(decode(r"[\u5a]"), "Z");
    }

    #[test]
    fn test_decode_coalesces_duplicate_tokens() {
        assert_eq!(decode(r"[\u1f496] and [\u1f496]"), "💖 and 💖");
    }

    #[test]
    fn test_decode_processes_distinct_tokens_independently() {
        assert_eq!(
            decode(r"ok [\u1f496] bad [\uZZZZ] ok [\u1f680]"),
            r"ok 💖 bad [\uZZZZ] ok 🚀"
        );
    }

    #[test]
    fn test_decode_leaves_malformed_tokens() {
        // Non-hex digits
        assert_eq!(decode(r"x [\uZZZZ] y"), r"x [\uZZZZ] y");
        // No digits at all
        assert_eq!(decode(r"x [\u] y"), r"x [\u] y");
        // Missing the \u marker
        assert_eq!(decode("x [abc] y"), "x [abc] y");
        // Overflows 32 bits
        assert_eq!(decode(r"x [\uffffffffff] y"), r"x [\uffffffffff] y");
    }

    #[test]
    fn test_decode_leaves_invalid_code_points() {
        // Surrogate range and beyond U+10FFFF parse but name no character.
        assert_eq!(decode(r"[\ud800]"), r"[\ud800]");
        assert_eq!(decode(r"[\u7fffffff]"), r"[\u7fffffff]");
    }

    #[test]
    fn test_from_unicode_is_an_alias() {
        assert_eq!(from_unicode(r"[\u1f496]"), decode(r"[\u1f496]"));
    }

    #[test]
    fn test_encode_tokenizes_four_byte_code_points() {
        assert_eq!(encode("Hello 💖"), r"Hello [\u1f496]");
        assert_eq!(encode("🚀🚀"), r"[\u1f680][\u1f680]");
    }

    #[test]
    fn test_encode_keeps_shorter_code_points() {
        // 2-byte (é) and 3-byte (東) characters stay literal.
        let text = "café 東京 ok";
        let out = encode(text);
        assert_eq!(out, text);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        for text in ["💖", "Hello 💖 world 🚀", "a🤖b", "plain"] {
            let encoded = encode(text);
            assert_eq!(decode(encoded.as_ref()), text);
        }
    }

    #[test]
    fn test_to_unicode() {
        assert_eq!(to_unicode("💖"), "1f496");
        assert_eq!(to_unicode("🚀 with trailing text"), "1f680");
        assert_eq!(to_unicode("a"), "61");
        assert_eq!(to_unicode(""), "");
    }

    #[test]
    fn test_to_unicode_with_prefix() {
        assert_eq!(to_unicode_with_prefix("💖", "\\U000"), "\\U0001f496");
        assert_eq!(to_unicode_with_prefix("💖", "U+"), "U+1f496");
        assert_eq!(to_unicode_with_prefix("", "U+"), "");
    }
}
