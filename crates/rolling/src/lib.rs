//! # rkscan rolling layer
//!
//! Polynomial hashing, word-window sliding and the source-side pattern
//! index used by the window matcher.
//!
//! ## Contract
//!
//! - Consumes canonical word tokens; never normalizes or tokenizes.
//! - Pure: no I/O, no clocks, no global state.
//! - Every hash lies in `[0, prime)`; [`HashParams`] cannot be constructed
//!   with a modulus that would break that.
//!
//! ## Example
//!
//! ```
//! use rolling::{HashParams, HashStrategy, PatternIndex, WordSequence};
//!
//! let source = WordSequence::from_words(&["the", "cat", "sat", "on", "the", "mat"]);
//! let index = PatternIndex::build(&source, 3, HashParams::default(), HashStrategy::Rolling);
//! assert_eq!(index.window_count(), 4);
//!
//! let suspect = WordSequence::from_words(&["a", "cat", "sat", "on"]);
//! let window = suspect
//!     .windows(3, HashParams::default(), HashStrategy::Rolling)
//!     .nth(1)
//!     .unwrap();
//! let hit = index.find_exact(window.hash, window.text).unwrap();
//! assert_eq!(hit.start_index, 1);
//! ```

pub mod config;
pub mod hash;
pub mod index;
pub mod windows;

pub use crate::config::{HashParams, HashParamsError, HashStrategy, BASE, MAX_PRIME, PRIME};
pub use crate::hash::{
    append_trailing, char_window_hashes, drop_leading, extend_hash, high_order_factor,
    polynomial_hash, pow_mod, roll,
};
pub use crate::index::{PatternEntry, PatternIndex};
pub use crate::windows::{Window, Windows, WordSequence};
