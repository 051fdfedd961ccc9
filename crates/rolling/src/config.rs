//! Hash parameters and error types for the rolling layer.
//!
//! [`HashParams`] can only hold a valid `(base, prime)` pair: construction
//! goes through [`HashParams::new`] and deserialization is routed through the
//! same checks. Every hashing function in this crate is therefore total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alphabet size used by the polynomial hash.
pub const BASE: u64 = 256;

/// Modulus used by the polynomial hash.
///
/// Deliberately small: collisions are frequent and are resolved by comparing
/// window text.
pub const PRIME: u64 = 101;

/// Largest accepted modulus. The pattern index keeps one bucket per possible
/// hash value, so this bounds its arena.
pub const MAX_PRIME: u64 = 65_536;

/// Modulus arithmetic for `(base, prime)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "RawHashParams", into = "RawHashParams")]
pub struct HashParams {
    base: u64,
    prime: u64,
}

impl HashParams {
    /// Validate and build a parameter pair.
    ///
    /// `base` must be in `[1, u32::MAX]` and `prime` in `[2, MAX_PRIME]`.
    /// The modulus does not have to be prime, though a prime spreads windows
    /// more evenly across buckets.
    pub fn new(base: u64, prime: u64) -> Result<Self, HashParamsError> {
        if base == 0 {
            return Err(HashParamsError::ZeroBase);
        }
        if base > u64::from(u32::MAX) {
            return Err(HashParamsError::BaseTooLarge { base });
        }
        if prime < 2 {
            return Err(HashParamsError::ModulusTooSmall { prime });
        }
        if prime > MAX_PRIME {
            return Err(HashParamsError::ModulusTooLarge {
                prime,
                max: MAX_PRIME,
            });
        }
        Ok(Self { base, prime })
    }

    /// Alphabet size.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Modulus; every hash lies in `[0, prime)`.
    pub fn prime(&self) -> u64 {
        self.prime
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: BASE,
            prime: PRIME,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawHashParams {
    base: u64,
    prime: u64,
}

impl TryFrom<RawHashParams> for HashParams {
    type Error = HashParamsError;

    fn try_from(raw: RawHashParams) -> Result<Self, Self::Error> {
        HashParams::new(raw.base, raw.prime)
    }
}

impl From<HashParams> for RawHashParams {
    fn from(params: HashParams) -> Self {
        RawHashParams {
            base: params.base,
            prime: params.prime,
        }
    }
}

/// How window hashes are produced while sliding over one document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashStrategy {
    /// Derive each window's hash from the previous one; per-step cost depends
    /// only on the two words entering and leaving the window.
    #[default]
    Rolling,
    /// Hash every window's text from scratch with Horner's method.
    Recompute,
}

/// Errors returned when building [`HashParams`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashParamsError {
    #[error("invalid hash params: base must be >= 1")]
    ZeroBase,

    #[error("invalid hash params: base {base} exceeds u32::MAX")]
    BaseTooLarge { base: u64 },

    #[error("invalid hash params: prime must be >= 2 (got {prime})")]
    ModulusTooSmall { prime: u64 },

    #[error("invalid hash params: prime {prime} exceeds bucket limit {max}")]
    ModulusTooLarge { prime: u64, max: u64 },
}
