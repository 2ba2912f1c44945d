//! Bijective scrambling of u64 identifiers into short opaque strings.
//!
//! Consecutive values produce unrelated-looking strings, so database row IDs
//! exposed in URLs cannot be trivially enumerated. Decoding requires the
//! exact (alphabet, permutation key, min_length) triple used to encode; a
//! mismatched triple decodes to a wrong value, not an error. This is
//! reversible obscurity, not cryptography.
//!
//! # Example
//!
//! ```
//! use opaque_id::{OpaqueId, generate_key, stock};
//!
//! let key = generate_key(stock::BASE58).unwrap();
//! let codec = OpaqueId::new(stock::BASE58, &key, 5).unwrap();
//!
//! let id = codec.encode(42);
//! assert!(id.len() >= 5);
//! assert_eq!(codec.decode(&id).unwrap(), 42);
//! ```

mod alphabet;
mod codec;
mod config;
mod diffusion;
mod digits;
mod error;
mod permutation;

pub use alphabet::{Alphabet, stock};
pub use codec::OpaqueId;
pub use config::{ProfileConfig, ProfilesConfig};
pub use error::Error;
pub use permutation::{Permutation, generate_key};
