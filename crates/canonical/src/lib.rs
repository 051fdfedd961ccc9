//! rkscan canonical text layer.
//!
//! Turns raw text into the word sequence the window matcher slides over.
//! Both documents of a comparison go through exactly the same steps, so two
//! texts that differ only in casing, punctuation or spacing produce the same
//! tokens.
//!
//! ## What we do
//!
//! - Lowercasing (simple per-character case mapping, no locale)
//! - Removal of everything that is neither an ASCII word character
//!   (`[A-Za-z0-9_]`) nor a separator ([`is_separator`]: the ECMAScript
//!   whitespace and line terminator set)
//! - Separator runs collapsed to single spaces, edges trimmed
//! - Tokenization with byte offsets into the normalized text
//!
//! ## What we don't do
//!
//! No stemming, no Unicode normalization forms, no stop words. Letters
//! outside ASCII are removed, not folded.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence, and no failure mode:
//! every input string (including the empty one) yields a document.

mod document;
mod pipeline;
mod token;
mod whitespace;

pub use crate::document::CanonicalizedDocument;
pub use crate::pipeline::{canonicalize, is_word_char, normalize_text, strip_non_word};
pub use crate::token::{tokenize, Token};
pub use crate::whitespace::{collapse_whitespace, is_separator};
