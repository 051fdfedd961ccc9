//! Whitespace normalization.
//!
//! Word separators are the ECMAScript `WhiteSpace` and `LineTerminator`
//! characters (see [`is_separator`]). Any run of them becomes one ASCII
//! space, and the result carries no leading or trailing separator.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  hello \t\r\n  world  "), "hello world");
//! assert_eq!(collapse_whitespace("   "), "");
//! ```

/// Returns true for characters that separate words.
///
/// This is TAB, VT, FF, SP, NBSP, U+FEFF, the other `Zs` space separators,
/// LF, CR, U+2028 and U+2029. It differs from [`char::is_whitespace`] on two
/// points: U+FEFF separates words, and U+0085 (NEL) and U+001C..=U+001F do not.
pub fn is_separator(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Collapses repeated separators, trims edges, and turns newlines into
/// single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split(is_separator).filter(|s| !s.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
