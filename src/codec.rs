use crate::alphabet::Alphabet;
use crate::diffusion;
use crate::digits;
use crate::error::Error;
use crate::permutation::Permutation;

/// Bijective scrambler between u64 values and opaque strings.
///
/// An instance is the full decoding key: the alphabet, the permutation, and
/// the minimum length. All three are validated once in [`OpaqueId::new`] and
/// never change, so one instance can be reused and shared across threads.
///
/// Decoding only recovers the original value under the exact triple used to
/// encode; under any other triple it silently yields a different value. This
/// is scrambling, not cryptography.
///
/// # Example
///
/// ```
/// use opaque_id::OpaqueId;
///
/// let codec = OpaqueId::new("ABCD", "AQMAAg==", 2).unwrap();
/// let id = codec.encode(0);
/// assert_eq!(id, "CB");
/// assert_eq!(codec.decode(&id).unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct OpaqueId {
    alphabet: Alphabet,
    permutation: Permutation,
    min_length: usize,
}

impl OpaqueId {
    /// Builds a codec from an alphabet, a base64 permutation key, and a
    /// minimum encoded length.
    ///
    /// Validation is all-or-nothing: any invalid parameter fails the whole
    /// construction with the first applicable [`Error`].
    pub fn new(alphabet: &str, key: &str, min_length: usize) -> Result<Self, Error> {
        if min_length == 0 {
            return Err(Error::InvalidMinLength);
        }
        let alphabet = Alphabet::new(alphabet)?;
        let permutation = Permutation::from_key(key, alphabet.size())?;
        Ok(OpaqueId {
            alphabet,
            permutation,
            min_length,
        })
    }

    /// Encodes a value as an opaque string of at least `min_length` symbols.
    ///
    /// Total: every u64 encodes, growing the output as needed.
    pub fn encode(&self, value: u64) -> String {
        let base = self.alphabet.size();
        let length = digits::digit_count(value, self.min_length, base);
        let mut buf = digits::to_digits(value, length, base);
        diffusion::forward(&mut buf, &self.permutation, base);
        buf.iter().map(|&d| self.alphabet.symbol_at(d)).collect()
    }

    /// Encodes a non-negative signed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IntegerDomain`] for negative values; the encoding
    /// domain is unsigned only.
    pub fn encode_signed(&self, value: i64) -> Result<String, Error> {
        if value < 0 {
            return Err(Error::IntegerDomain(value));
        }
        Ok(self.encode(value as u64))
    }

    /// Decodes an opaque string back to its value.
    ///
    /// The buffer length comes straight from the input, and there is no
    /// checksum: a string of the wrong length, or one produced under a
    /// different triple, decodes to an unrelated value rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for the empty string and
    /// [`Error::CharacterNotInAlphabet`] on the first symbol outside the
    /// alphabet.
    pub fn decode(&self, text: &str) -> Result<u64, Error> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        let base = self.alphabet.size();
        let mut buf = text
            .chars()
            .map(|c| self.alphabet.index_of(c))
            .collect::<Result<Vec<u8>, Error>>()?;
        diffusion::backward(&mut buf, &self.permutation, base);
        Ok(digits::to_value(&buf, base))
    }

    /// Encodes a batch of values, preserving order.
    pub fn encode_all<I>(&self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = u64>,
    {
        values.into_iter().map(|v| self.encode(v)).collect()
    }

    /// Decodes a batch of strings, preserving order and failing on the
    /// first bad input.
    pub fn decode_all<'a, I>(&self, texts: I) -> Result<Vec<u64>, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts.into_iter().map(|t| self.decode(t)).collect()
    }

    /// Returns the alphabet this codec encodes into.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the minimum encoded length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}
