//! Index codec
//!
//! Bijection between an integer index in `[0, |alphabet|^length)` and the
//! fixed-length candidate at that position. The index is read as a base-N
//! number, most significant symbol first, so the rightmost symbol advances
//! fastest.

use crate::domain::alphabet::Alphabet;
use crate::error::CodecError;

/// Encode an index into a newly allocated candidate of `length` symbols
///
/// Indices at or above the keyspace size wrap (only the low `length` base-N
/// digits are kept).
pub fn encode_index(index: u64, alphabet: &[u8], length: usize) -> Result<Vec<u8>, CodecError> {
    if alphabet.is_empty() {
        return Err(CodecError::InvalidAlphabet);
    }
    if length == 0 {
        return Err(CodecError::InvalidLength);
    }
    let mut out = vec![0u8; length];
    encode_index_into(index, alphabet, &mut out)?;
    Ok(out)
}

/// Encode an index into an existing buffer; the buffer length is the candidate length
pub fn encode_index_into(index: u64, alphabet: &[u8], out: &mut [u8]) -> Result<(), CodecError> {
    if alphabet.is_empty() {
        return Err(CodecError::InvalidAlphabet);
    }
    if out.is_empty() {
        return Err(CodecError::InvalidLength);
    }

    let base = alphabet.len() as u64;
    let mut i = index;
    for slot in out.iter_mut().rev() {
        *slot = alphabet[(i % base) as usize];
        i /= base;
    }
    Ok(())
}

/// Size of the keyspace for one length, or `None` if it does not fit in `u64`
#[inline]
pub fn keyspace_size(alphabet_size: usize, length: usize) -> Option<u64> {
    let length = u32::try_from(length).ok()?;
    (alphabet_size as u64).checked_pow(length)
}

/// Walks the candidates of a contiguous index range in increasing index order
///
/// The first candidate is decoded from its index; every following one is the
/// base-N successor of the previous, so a step costs one digit increment
/// instead of a full decode. The output matches `encode_index` index by index.
pub struct CandidateCursor<'a> {
    symbols: &'a [u8],
    /// Alphabet position of each symbol in `buf`
    digits: Vec<usize>,
    buf: Vec<u8>,
    /// `buf` already holds the candidate for `next`
    primed: bool,
    next: u64,
    end: u64,
}

impl<'a> CandidateCursor<'a> {
    /// Position the cursor at `start`; it yields indices in `[start, end)`
    pub fn new(
        alphabet: &'a Alphabet,
        length: usize,
        start: u64,
        end: u64,
    ) -> Result<Self, CodecError> {
        let symbols = alphabet.symbols();
        let buf = encode_index(start, symbols, length)?;

        let base = symbols.len() as u64;
        let mut digits = vec![0usize; length];
        let mut i = start;
        for d in digits.iter_mut().rev() {
            *d = (i % base) as usize;
            i /= base;
        }

        Ok(Self {
            symbols,
            digits,
            buf,
            primed: true,
            next: start,
            end,
        })
    }

    /// Index of the candidate the next call to `advance` yields
    #[inline]
    pub fn position(&self) -> u64 {
        self.next
    }

    /// Yield the next candidate, or `None` once the range is exhausted
    #[inline]
    pub fn advance(&mut self) -> Option<&[u8]> {
        if self.next >= self.end {
            return None;
        }
        if self.primed {
            self.primed = false;
        } else {
            self.increment();
        }
        self.next += 1;
        Some(&self.buf)
    }

    fn increment(&mut self) {
        let base = self.symbols.len();
        for pos in (0..self.digits.len()).rev() {
            let d = self.digits[pos] + 1;
            if d < base {
                self.digits[pos] = d;
                self.buf[pos] = self.symbols[d];
                return;
            }
            self.digits[pos] = 0;
            self.buf[pos] = self.symbols[0];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashSet;

    fn positions(candidate: &[u8], alphabet: &[u8]) -> Vec<usize> {
        candidate
            .iter()
            .map(|b| alphabet.iter().position(|a| a == b).unwrap())
            .collect()
    }

    #[test]
    fn test_encode_zero_is_first_symbol_repeated() {
        assert_eq!(encode_index(0, b"xyz", 4).unwrap(), b"xxxx");
    }

    #[test]
    fn test_encode_rightmost_advances_fastest() {
        let alphabet = b"0123456789";
        assert_eq!(encode_index(1, alphabet, 3).unwrap(), b"001");
        assert_eq!(encode_index(10, alphabet, 3).unwrap(), b"010");
        assert_eq!(encode_index(123, alphabet, 3).unwrap(), b"123");
        assert_eq!(encode_index(999, alphabet, 3).unwrap(), b"999");
    }

    #[test]
    fn test_encode_last_index_is_last_symbol_repeated() {
        assert_eq!(encode_index(7, b"ab", 3).unwrap(), b"bbb");
    }

    #[test]
    fn test_encode_empty_alphabet() {
        assert_eq!(encode_index(0, b"", 3), Err(CodecError::InvalidAlphabet));
    }

    #[test]
    fn test_encode_zero_length() {
        assert_eq!(encode_index(0, b"ab", 0), Err(CodecError::InvalidLength));
        let mut empty: [u8; 0] = [];
        assert_eq!(
            encode_index_into(0, b"ab", &mut empty),
            Err(CodecError::InvalidLength)
        );
    }

    #[test]
    fn test_encode_is_injective() {
        for (alphabet, length) in [(&b"ab"[..], 5), (&b"abc"[..], 4), (&b"0123456789"[..], 3)] {
            let total = keyspace_size(alphabet.len(), length).unwrap();
            let seen: HashSet<Vec<u8>> = (0..total)
                .map(|i| encode_index(i, alphabet, length).unwrap())
                .collect();
            assert_eq!(seen.len() as u64, total);
        }
    }

    #[test]
    fn test_encode_preserves_order() {
        let alphabet = b"qwerty";
        let length = 3;
        let total = keyspace_size(alphabet.len(), length).unwrap();
        let mut prev = positions(&encode_index(0, alphabet, length).unwrap(), alphabet);
        for i in 1..total {
            let cur = positions(&encode_index(i, alphabet, length).unwrap(), alphabet);
            assert!(prev < cur, "index {} not after {}", i, i - 1);
            prev = cur;
        }
    }

    #[test]
    fn test_keyspace_size() {
        assert_eq!(keyspace_size(10, 6), Some(1_000_000));
        assert_eq!(keyspace_size(1, 40), Some(1));
        assert_eq!(keyspace_size(0, 3), Some(0));
        assert_eq!(keyspace_size(95, 10), None);
    }

    #[test]
    fn test_cursor_matches_encode() {
        let alphabet = Alphabet::from_charset("abc");
        let mut cursor = CandidateCursor::new(&alphabet, 3, 5, 27).unwrap();
        for index in 5..27 {
            assert_eq!(cursor.position(), index);
            let expected = encode_index(index, alphabet.symbols(), 3).unwrap();
            assert_eq!(cursor.advance().unwrap(), expected.as_slice());
        }
        assert!(cursor.advance().is_none());
    }

    #[test]
    fn test_cursor_empty_range() {
        let alphabet = Alphabet::from_charset("ab");
        let mut cursor = CandidateCursor::new(&alphabet, 2, 3, 3).unwrap();
        assert!(cursor.advance().is_none());
    }

    #[test]
    fn test_cursor_random_ranges() {
        let mut rng = rand::thread_rng();
        let alphabet = Alphabet::from_charset("0123456789abcdef");
        for _ in 0..50 {
            let length = rng.gen_range(1..=6);
            let total = keyspace_size(alphabet.len(), length).unwrap();
            let start = rng.gen_range(0..total);
            let end = (start + rng.gen_range(1..=300)).min(total);
            let mut cursor = CandidateCursor::new(&alphabet, length, start, end).unwrap();
            for index in start..end {
                let expected = encode_index(index, alphabet.symbols(), length).unwrap();
                assert_eq!(cursor.advance().unwrap(), expected.as_slice());
            }
            assert!(cursor.advance().is_none());
        }
    }

    #[test]
    fn test_cursor_rejects_invalid_input() {
        let empty = Alphabet::from_charset("");
        assert!(matches!(
            CandidateCursor::new(&empty, 2, 0, 1),
            Err(CodecError::InvalidAlphabet)
        ));
        let alphabet = Alphabet::from_charset("ab");
        assert!(matches!(
            CandidateCursor::new(&alphabet, 0, 0, 1),
            Err(CodecError::InvalidLength)
        ));
    }
}
