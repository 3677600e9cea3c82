use crate::alphabet::Alphabet;
use crate::error::{CatalogIdError, Result};

/// Numeric base62 codec over a fixed alphabet.
///
/// Input bytes are read as one big-endian unsigned integer, so leading zero
/// bytes only contribute what the value requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base62 {
    alphabet: Alphabet,
}

impl Base62 {
    pub const STANDARD: Self = Self::new(Alphabet::Standard);
    pub const INVERTED: Self = Self::new(Alphabet::InvertedCase);

    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encode `bytes` as the shortest base62 string of its numeric value.
    ///
    /// Zero (including an empty input) encodes to a single zero symbol.
    pub fn encode(&self, bytes: &[u8]) -> String {
        self.encode_with_length(bytes, 1)
    }

    /// Encode `bytes`, left-padding with the zero symbol to at least `length` symbols.
    pub fn encode_with_length(&self, bytes: &[u8], length: usize) -> String {
        let digits = to_base62_digits(bytes);
        let padding = length.saturating_sub(digits.len());
        std::iter::repeat_n(char::from(self.alphabet.zero()), padding)
            .chain(digits.iter().rev().map(|&d| char::from(self.alphabet.symbol(d))))
            .collect()
    }

    /// Decode `input` into exactly `length` big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbol` for a character outside the alphabet and
    /// `Overflow` if the value does not fit in `length` bytes.
    pub fn decode(&self, input: &str, length: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; length];
        for (position, symbol) in input.chars().enumerate() {
            let digit = self
                .alphabet
                .value_of(symbol)
                .ok_or(CatalogIdError::InvalidSymbol { symbol, position })?;

            // out = out * 62 + digit
            let mut carry = u32::from(digit);
            for byte in out.iter_mut().rev() {
                let acc = u32::from(*byte) * 62 + carry;
                *byte = (acc & 0xff) as u8;
                carry = acc >> 8;
            }
            if carry != 0 {
                return Err(CatalogIdError::Overflow { length });
            }
        }
        Ok(out)
    }
}

/// Repeated long division by 62; digits come back least significant first.
fn to_base62_digits(bytes: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(bytes.len() * 4 / 3 + 1);
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let mut number = bytes[start..].to_vec();

    while !number.is_empty() {
        let mut quotient = Vec::with_capacity(number.len());
        let mut remainder = 0u32;
        for &byte in &number {
            let acc = (remainder << 8) | u32::from(byte);
            let q = acc / 62;
            remainder = acc % 62;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }
        digits.push(remainder as u8);
        number = quotient;
    }

    if digits.is_empty() {
        digits.push(0);
    }
    digits
}
