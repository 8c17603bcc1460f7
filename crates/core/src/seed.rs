use rand::RngCore;
use sha3::{Digest, Keccak256};
use std::fmt;

/// A 256-bit seed every placeholder of a replacer is derived from.
///
/// The digest never leaves the type: `Debug` is redacted and there is no accessor.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed {
    /// keccak256 of the seed phrase
    inner: [u8; 32],
}

impl Seed {
    /// Hash a caller-chosen phrase into a seed.
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            inner: Keccak256::digest(phrase.as_bytes()).into(),
        }
    }

    /// Generate a seed from a fresh random phrase
    pub fn generate() -> Self {
        Self::from_phrase(&random_phrase())
    }

    /// Derive the 32-byte placeholder digest for `id`.
    ///
    /// The preimage is the `0x`-prefixed lowercase hex of the seed followed by the id, so the
    /// same phrase and id always yield the same digest across processes.
    pub fn derive(&self, id: &str) -> [u8; 32] {
        let mut hasher = Keccak256::new();
        hasher.update(format!("0x{}", hex::encode(self.inner)).as_bytes());
        hasher.update(id.as_bytes());
        hasher.finalize().into()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Random 64-character hex phrase, suitable for recording in a session manifest.
pub fn random_phrase() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
