//! Approximate client identity used to deduplicate likes.
//!
//! A fingerprint is a heuristic stand-in for "one browser": it changes when the
//! client string or network origin changes and anyone can forge the inputs.
//! It is not an authentication mechanism.

use sha2::{Digest, Sha256};
use std::fmt::{Display, Formatter};

/// Substituted for metadata the caller did not present.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Opaque string identifying a client for like deduplication.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn new(fingerprint: String) -> Self {
        Self(fingerprint)
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Request metadata a fingerprint is derived from.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct ClientMetadata {
    /// Client-identifying string, usually the `User-Agent`.
    pub client: Option<String>,
    /// Network origin, usually the peer IP address.
    pub origin: Option<String>,
}

impl ClientMetadata {
    #[must_use]
    pub fn client_or_placeholder(&self) -> &str {
        self.client.as_deref().unwrap_or(UNKNOWN_CLIENT)
    }

    #[must_use]
    pub fn origin_or_placeholder(&self) -> &str {
        self.origin.as_deref().unwrap_or(UNKNOWN_CLIENT)
    }
}

/// Derives the fingerprint the like ledger deduplicates on.
pub trait FingerprintProvider: Send + Sync {
    fn fingerprint(&self, metadata: &ClientMetadata) -> Fingerprint;
}

/// Hex encoded SHA-256 of the client string followed by the origin.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Sha256Fingerprints;

impl FingerprintProvider for Sha256Fingerprints {
    fn fingerprint(&self, metadata: &ClientMetadata) -> Fingerprint {
        let mut hasher = Sha256::new();
        hasher.update(metadata.client_or_placeholder().as_bytes());
        hasher.update(metadata.origin_or_placeholder().as_bytes());

        Fingerprint(hex::encode(hasher.finalize()))
    }
}
