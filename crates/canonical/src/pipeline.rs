use crate::document::CanonicalizedDocument;
use crate::token::Token;
use crate::whitespace::{collapse_whitespace, is_separator};

/// Main entry point. Lowercases, strips non-word characters, collapses
/// whitespace and tokenizes in a single pass over `input`.
pub fn canonicalize(input: &str) -> CanonicalizedDocument {
    // Pre-allocate assuming the normalized text is roughly the input size.
    let mut normalized_text = String::with_capacity(input.len());
    let mut tokens: Vec<Token> = Vec::with_capacity((input.len() / 4).saturating_add(1));
    // State machine for tokenization and whitespace collapsing.
    let mut pending_space = false;
    let mut current_token_start: Option<usize> = None;

    for ch in input.chars() {
        // Lowercasing can expand a single character into several.
        for lower in ch.to_lowercase() {
            dispatch_char(
                lower,
                &mut normalized_text,
                &mut tokens,
                &mut pending_space,
                &mut current_token_start,
            );
        }
    }

    // The last token needs to be finalized after the loop.
    finalize_token(&mut tokens, &normalized_text, &mut current_token_start);

    CanonicalizedDocument {
        normalized_text,
        tokens,
    }
}

/// Returns the normalized text only, built step by step: lowercase, strip,
/// collapse. Produces the same string as `canonicalize(text).normalized_text`.
pub fn normalize_text(text: &str) -> String {
    collapse_whitespace(&strip_non_word(&text.to_lowercase()))
}

/// Removes every character that is neither a word character nor a separator.
pub fn strip_non_word(text: &str) -> String {
    text.chars()
        .filter(|&ch| is_word_char(ch) || is_separator(ch))
        .collect()
}

/// ASCII word characters: letters, digits and underscore.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Decides whether a character extends a token, ends one, or is dropped.
fn dispatch_char(
    ch: char,
    normalized_text: &mut String,
    tokens: &mut Vec<Token>,
    pending_space: &mut bool,
    current_token_start: &mut Option<usize>,
) {
    if is_separator(ch) {
        finalize_token(tokens, normalized_text, current_token_start);
        if !normalized_text.is_empty() {
            *pending_space = true;
        }
    } else if is_word_char(ch) {
        append_char(ch, normalized_text, current_token_start, pending_space);
    }
    // Anything else is removed without acting as a delimiter: "it's" -> "its".
}

/// Appends a character to the normalized text.
fn append_char(
    ch: char,
    normalized_text: &mut String,
    current_token_start: &mut Option<usize>,
    pending_space: &mut bool,
) {
    if *pending_space {
        normalized_text.push(' ');
        *pending_space = false;
        *current_token_start = Some(normalized_text.len());
    } else if current_token_start.is_none() {
        *current_token_start = Some(normalized_text.len());
    }

    normalized_text.push(ch);
}

/// Creates a token from the current token start and adds it to the list.
fn finalize_token(
    tokens: &mut Vec<Token>,
    normalized_text: &str,
    current_token_start: &mut Option<usize>,
) {
    if let Some(start) = current_token_start.take() {
        if start < normalized_text.len() {
            let end = normalized_text.len();
            tokens.push(Token {
                text: normalized_text[start..end].to_string(),
                start,
                end,
            });
        }
    }
}
