//! The output of [`canonicalize`](crate::canonicalize).
//!
//! ```rust
//! use canonical::canonicalize;
//!
//! let doc = canonicalize("Hello, World!");
//! assert_eq!(doc.normalized_text, "hello world");
//! assert_eq!(doc.words(), vec!["hello", "world"]);
//! assert_eq!(doc.tokens[1].start, 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// A normalized document: the collapsed text and its word tokens in
/// document order.
///
/// For a given input string every field is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizedDocument {
    /// Lowercased text with non-word characters removed and whitespace
    /// collapsed to single spaces.
    pub normalized_text: String,
    /// Word tokens with byte offsets into `normalized_text`.
    pub tokens: Vec<Token>,
}

impl CanonicalizedDocument {
    /// Token texts in document order.
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Number of word tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when normalization left no words behind.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
