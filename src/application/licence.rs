use rand::Rng;
use sha2::{Digest, Sha256};

/// Licence codes are exactly 11 decimal digits.
pub const LICENCE_LEN: usize = 11;

/// A freshly generated licence. The plaintext is emailed to the registrant
/// once; only the digest is ever persisted.
pub struct IssuedLicence {
    pub plaintext: String,
    pub digest: String,
}

/// Generates a licence code from the OS CSPRNG. Each digit is drawn
/// independently, so the full 10^11 space is reachable (leading zeros
/// included) and no output is predictable from prior ones.
pub fn generate() -> IssuedLicence {
    let mut rng = rand::rngs::OsRng;
    let plaintext: String = (0..LICENCE_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    let digest = digest(&plaintext);
    IssuedLicence { plaintext, digest }
}

/// SHA-256 hex digest of a presented licence. Activation recomputes this to
/// match against the stored value.
pub fn digest(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
