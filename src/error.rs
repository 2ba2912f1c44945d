use std::fmt;

/// Errors reported during codec construction, key handling, or decoding.
///
/// All variants are caller-input problems detected synchronously; nothing
/// here is retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The alphabet has fewer than 2 or more than 256 symbols
    InvalidAlphabetSize(usize),
    /// The alphabet contains a repeated symbol
    DuplicateSymbol(char),
    /// The minimum encoded length is zero
    InvalidMinLength,
    /// The permutation key is not valid base64
    InvalidKeyEncoding(base64::DecodeError),
    /// The decoded key length does not match the alphabet size
    PermutationLengthMismatch { key: usize, alphabet: usize },
    /// The decoded key contains a repeated value
    PermutationNotUnique,
    /// The decoded key values do not cover 0..alphabet size exactly
    PermutationOutOfRange,
    /// The input contains a character not in the alphabet
    CharacterNotInAlphabet(char),
    /// The input string is empty
    EmptyInput,
    /// A negative value was supplied to the signed encode API
    IntegerDomain(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAlphabetSize(n) => {
                write!(f, "alphabet must have 2 to 256 symbols, got {}", n)
            }
            Error::DuplicateSymbol(c) => write!(f, "duplicate symbol in alphabet: '{}'", c),
            Error::InvalidMinLength => write!(f, "min_length must be greater than 0"),
            Error::InvalidKeyEncoding(e) => write!(f, "permutation key is not valid base64: {}", e),
            Error::PermutationLengthMismatch { key, alphabet } => write!(
                f,
                "permutation key has {} values but the alphabet has {} symbols",
                key, alphabet
            ),
            Error::PermutationNotUnique => {
                write!(f, "permutation key values must be pairwise distinct")
            }
            Error::PermutationOutOfRange => write!(
                f,
                "permutation key values must cover the alphabet index range exactly"
            ),
            Error::CharacterNotInAlphabet(c) => write!(f, "character not in alphabet: '{}'", c),
            Error::EmptyInput => write!(f, "cannot decode empty input"),
            Error::IntegerDomain(v) => write!(f, "cannot encode negative value {}", v),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidKeyEncoding(e) => Some(e),
            _ => None,
        }
    }
}
