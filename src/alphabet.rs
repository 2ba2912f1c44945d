use std::collections::HashMap;

use crate::error::Error;

/// Stock alphabets commonly used for opaque identifiers.
pub mod stock {
    pub const BASE64: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    /// Bitcoin-style base58: no 0, O, I, or l.
    pub const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    pub const BASE36: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    /// Looks up a stock alphabet by name.
    pub fn by_name(name: &str) -> Option<&'static str> {
        match name {
            "base64" => Some(BASE64),
            "base58" => Some(BASE58),
            "base36" => Some(BASE36),
            "base32" => Some(BASE32),
            _ => None,
        }
    }
}

/// An ordered set of unique symbols. Its size is the numeric base used for
/// digit conversion; the symbol order defines the digit values.
///
/// Validated once at construction and immutable afterwards, so it can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index_of: HashMap<char, u8>,
}

impl Alphabet {
    pub const MIN_SIZE: usize = 2;
    pub const MAX_SIZE: usize = 256;

    /// Builds an alphabet from its symbols, in digit-value order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabetSize`] if there are fewer than 2 or
    /// more than 256 symbols, or [`Error::DuplicateSymbol`] if any symbol
    /// repeats.
    pub fn new(symbols: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.chars().collect();
        let size = symbols.len();
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(Error::InvalidAlphabetSize(size));
        }

        let mut index_of = HashMap::with_capacity(size);
        for (i, &c) in symbols.iter().enumerate() {
            if index_of.insert(c, i as u8).is_some() {
                return Err(Error::DuplicateSymbol(c));
            }
        }

        Ok(Alphabet { symbols, index_of })
    }

    /// Returns the number of symbols (the base).
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for a digit. Digits handed to this method always
    /// come from buffers reduced mod `size()`, so the index is in range.
    pub fn symbol_at(&self, digit: u8) -> char {
        self.symbols[digit as usize]
    }

    /// Returns the digit value of a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CharacterNotInAlphabet`] for symbols outside the
    /// alphabet.
    pub fn index_of(&self, symbol: char) -> Result<u8, Error> {
        self.index_of
            .get(&symbol)
            .copied()
            .ok_or(Error::CharacterNotInAlphabet(symbol))
    }
}
