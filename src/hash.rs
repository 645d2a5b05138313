//! Deterministic hashing for comparison keys and alignment fingerprints.
//!
//! `std::hash` output is seeded per process, so it cannot back a hash that
//! callers persist or compare across runs. blake3 gives the same value on
//! every platform and every run.

/// Domain tags keep key hashes and fingerprint hashes in separate spaces.
const KEY_DOMAIN: &str = "linealign.key";
const FINGERPRINT_DOMAIN: &str = "linealign.alignment";

/// A deterministic hasher using blake3.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Start a hasher for normalized line keys.
    #[inline]
    pub fn for_key() -> Self {
        Self::with_domain(KEY_DOMAIN)
    }

    /// Start a hasher for alignment fingerprints.
    #[inline]
    pub fn for_fingerprint() -> Self {
        Self::with_domain(FINGERPRINT_DOMAIN)
    }

    fn with_domain(domain: &str) -> Self {
        let mut inner = blake3::Hasher::new();
        inner.update(domain.as_bytes());
        inner.update(&[0]);
        Self { inner }
    }

    /// Update with a string.
    ///
    /// The length is written first so `("ab", "c")` and `("a", "bc")` differ.
    #[inline]
    pub fn update_str(mut self, s: &str) -> Self {
        self.inner.update(&(s.len() as u64).to_le_bytes());
        self.inner.update(s.as_bytes());
        self
    }

    /// Update with a single tag byte.
    #[inline]
    pub fn update_tag(mut self, tag: u8) -> Self {
        self.inner.update(&[tag]);
        self
    }

    /// Update with a usize value (as little-endian u64).
    #[inline]
    pub fn update_usize(mut self, v: usize) -> Self {
        self.inner.update(&(v as u64).to_le_bytes());
        self
    }

    /// Finish and return the first 8 bytes of the digest as a little-endian u64.
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

/// Hash a normalized comparison key.
#[inline]
pub fn hash_key(key: &str) -> u64 {
    StableHasher::for_key().update_str(key).finish()
}
