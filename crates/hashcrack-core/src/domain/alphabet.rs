//! Candidate alphabet
//!
//! An alphabet is the ordered, deduplicated set of byte symbols candidates are
//! built from. Charset text is taken as UTF-8, so a multi-byte character
//! contributes each of its bytes as a separate symbol.

use crate::constants::NAMED_CHARSETS;

/// Ordered sequence of distinct candidate bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Build an alphabet from raw bytes, keeping the first occurrence of each byte
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut seen = [false; 256];
        let mut symbols = Vec::with_capacity(bytes.len().min(256));

        for &b in bytes {
            if !seen[b as usize] {
                seen[b as usize] = true;
                symbols.push(b);
            }
        }

        Self { symbols }
    }

    /// Build an alphabet from the UTF-8 bytes of a charset string
    pub fn from_charset(charset: &str) -> Self {
        Self::from_bytes(charset.as_bytes())
    }

    /// Symbols in enumeration order
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of distinct symbols (the radix of the keyspace)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Resolve a charset name (`digits`, `lower`, `alnum`, ...) to its symbols
///
/// Anything that is not a known name is returned unchanged and used literally.
pub fn resolve_charset(name_or_value: &str) -> &str {
    let key = name_or_value.trim();
    NAMED_CHARSETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, chars)| *chars)
        .unwrap_or(name_or_value)
}
