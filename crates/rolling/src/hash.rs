//! Modular polynomial hashing.
//!
//! A string `s` of `L` code units hashes to
//! `Σ code(s[i]) · BASE^(L-1-i) mod PRIME`, accumulated with Horner's method
//! from `0`. Codes are UTF-16 code units, so non-BMP characters contribute
//! two codes; after canonicalization every token is ASCII and the
//! distinction disappears.
//!
//! Two sliding primitives are provided:
//!
//! - [`roll`]: the classic Rabin-Karp step for fixed-length character windows,
//!   one code out and one code in, with `h = BASE^(L-1) mod PRIME`.
//! - [`drop_leading`] / [`append_trailing`]: the same two halves generalized
//!   to whole blocks, which is what sliding over variable-length word windows
//!   needs (see [`crate::windows`]).

use crate::config::HashParams;

/// Hash `text` from scratch.
pub fn polynomial_hash(text: &str, params: &HashParams) -> u64 {
    extend_hash(0, text, params)
}

/// Continue a Horner accumulation: the hash of `prefix + text` given the
/// hash of `prefix`.
pub fn extend_hash(hash: u64, text: &str, params: &HashParams) -> u64 {
    text.encode_utf16().fold(hash, |acc, unit| {
        (acc * params.base() + u64::from(unit)) % params.prime()
    })
}

/// Length of `text` in UTF-16 code units, the unit the hash is defined over.
pub fn code_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// `base^exp mod modulus` by square-and-multiply.
pub fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut acc = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * acc % modulus;
        }
        acc = acc * acc % modulus;
        exp >>= 1;
    }
    result
}

/// `h = BASE^(len-1) mod PRIME`, the weight of the leading code in a window
/// of `len` codes. Windows of length 0 or 1 get `1`.
pub fn high_order_factor(len: usize, params: &HashParams) -> u64 {
    pow_mod(params.base(), len.saturating_sub(1) as u64, params.prime())
}

/// O(1) rolling update for a fixed-length character window.
///
/// Given the hash of a window starting at `i`, returns the hash of the
/// window starting at `i + 1`: `outgoing` is the code leaving on the left,
/// `incoming` the code arriving on the right, `h` comes from
/// [`high_order_factor`]. A negative intermediate value is corrected by
/// adding `PRIME`, so the result stays in `[0, PRIME)`.
pub fn roll(hash: u64, outgoing: u16, incoming: u16, h: u64, params: &HashParams) -> u64 {
    let prime = params.prime() as i64;
    let mut next = (hash as i64 - i64::from(outgoing) * h as i64) % prime;
    next = (next * params.base() as i64 + i64::from(incoming)) % prime;
    if next < 0 {
        next += prime;
    }
    next as u64
}

/// Remove a leading block from a hashed string.
///
/// `block_hash` is the block's own hash and `weight` is
/// `BASE^(codes remaining after the block) mod PRIME`.
pub fn drop_leading(hash: u64, block_hash: u64, weight: u64, params: &HashParams) -> u64 {
    let prime = params.prime() as i64;
    let mut next = (hash as i64 - block_hash as i64 * weight as i64) % prime;
    if next < 0 {
        next += prime;
    }
    next as u64
}

/// Append a trailing block to a hashed string. `shift` is
/// `BASE^(block length) mod PRIME`.
pub fn append_trailing(hash: u64, block_hash: u64, shift: u64, params: &HashParams) -> u64 {
    (hash * shift + block_hash) % params.prime()
}

/// Classic Rabin-Karp pass: hashes of every window of `len` code units in
/// `text`, left to right, using [`roll`] after the first window.
pub fn char_window_hashes(text: &str, len: usize, params: &HashParams) -> Vec<u64> {
    let codes: Vec<u16> = text.encode_utf16().collect();
    let n = codes.len();
    if len == 0 || n < len {
        return Vec::new();
    }

    let h = high_order_factor(len, params);
    let mut out = Vec::with_capacity(n - len + 1);
    let mut hash = codes[..len].iter().fold(0u64, |acc, &unit| {
        (acc * params.base() + u64::from(unit)) % params.prime()
    });
    out.push(hash);

    for (&old, &new) in codes.iter().zip(codes.iter().skip(len)) {
        hash = roll(hash, old, new, h, params);
        out.push(hash);
    }
    out
}
