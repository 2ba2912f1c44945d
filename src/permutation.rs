use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::seq::SliceRandom;

use crate::alphabet::Alphabet;
use crate::error::Error;

/// A secret bijection over the alphabet's index space, with its inverse
/// derived at construction.
///
/// The forward array is the key material; the inverse is a cached scatter of
/// it (`inverse[forward[i]] = i`). Both are immutable once built.
#[derive(Debug, Clone)]
pub struct Permutation {
    forward: Vec<u8>,
    inverse: Vec<u8>,
}

impl Permutation {
    /// Decodes a base64 key and validates it as a permutation of
    /// `[0, alphabet_size)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyEncoding`] for malformed base64,
    /// [`Error::PermutationLengthMismatch`] when the decoded length differs
    /// from the alphabet size, [`Error::PermutationNotUnique`] for repeated
    /// values, and [`Error::PermutationOutOfRange`] when the values do not
    /// span the index range exactly.
    pub fn from_key(key: &str, alphabet_size: usize) -> Result<Self, Error> {
        let forward = STANDARD.decode(key).map_err(Error::InvalidKeyEncoding)?;
        Self::from_bytes(forward, alphabet_size)
    }

    pub(crate) fn from_bytes(forward: Vec<u8>, alphabet_size: usize) -> Result<Self, Error> {
        if forward.len() != alphabet_size {
            return Err(Error::PermutationLengthMismatch {
                key: forward.len(),
                alphabet: alphabet_size,
            });
        }

        let mut seen = [false; 256];
        for &v in &forward {
            if seen[v as usize] {
                return Err(Error::PermutationNotUnique);
            }
            seen[v as usize] = true;
        }

        // Distinct values with min 0 and max size-1 imply a full bijection.
        let min = forward.iter().copied().min();
        let max = forward.iter().copied().max();
        if min != Some(0) || max != Some((alphabet_size - 1) as u8) {
            return Err(Error::PermutationOutOfRange);
        }

        let mut inverse = vec![0u8; alphabet_size];
        for (i, &p) in forward.iter().enumerate() {
            inverse[p as usize] = i as u8;
        }

        Ok(Permutation { forward, inverse })
    }

    /// Maps a digit through the forward permutation.
    pub fn forward(&self, digit: u8) -> u8 {
        self.forward[digit as usize]
    }

    /// Maps a digit through the inverse permutation.
    pub fn backward(&self, digit: u8) -> u8 {
        self.inverse[digit as usize]
    }
}

/// Generates a fresh uniformly random permutation key for an alphabet,
/// serialized as base64.
///
/// Setup-time utility: generate once, store the key, and hand it to
/// [`crate::OpaqueId::new`] from then on. Keys are bound to the alphabet
/// they were generated for.
///
/// # Errors
///
/// Fails with the same alphabet validation errors as [`Alphabet::new`].
pub fn generate_key(alphabet: &str) -> Result<String, Error> {
    let table = Alphabet::new(alphabet)?;

    let mut permutation: Vec<u8> = (0..table.size()).map(|i| i as u8).collect();
    permutation.shuffle(&mut rand::rng());

    Ok(STANDARD.encode(&permutation))
}
