//! Access URL signing.
//!
//! The signature is an opaque placeholder token. It is not verifiable and
//! carries no cryptographic guarantee; only the query shape is stable:
//! `{base}?expires={unix_seconds}&signature={token}`.

use chrono::{DateTime, Utc};
use rand::Rng;

use curio_shared::ProvisioningConfig;

const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Appends expiry and signature parameters to access URLs.
#[derive(Debug, Clone, Copy)]
pub struct UrlSigner {
    ttl_secs: u64,
    token_len: usize,
}

impl UrlSigner {
    /// Create a signer with the given URL lifetime and token length.
    ///
    /// A zero token length is bumped to one so the signature is never empty.
    #[must_use]
    pub fn new(ttl_secs: u64, token_len: usize) -> Self {
        Self {
            ttl_secs,
            token_len: token_len.max(1),
        }
    }

    /// Create a signer from provisioning configuration.
    #[must_use]
    pub fn from_config(config: &ProvisioningConfig) -> Self {
        Self::new(config.signed_url_ttl_secs, config.signature_length)
    }

    /// URL lifetime in seconds.
    #[must_use]
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Sign a URL, expiring `ttl_secs` from now.
    #[must_use]
    pub fn sign(&self, base_url: &str) -> String {
        self.sign_at(base_url, Utc::now())
    }

    /// Sign a URL relative to an explicit clock reading.
    #[must_use]
    pub fn sign_at(&self, base_url: &str, now: DateTime<Utc>) -> String {
        let ttl = i64::try_from(self.ttl_secs).unwrap_or(i64::MAX);
        let expires = now.timestamp().saturating_add(ttl);
        format!(
            "{base_url}?expires={expires}&signature={}",
            self.random_token()
        )
    }

    fn random_token(&self) -> String {
        let mut rng = rand::rng();
        (0..self.token_len)
            .map(|_| char::from(TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())]))
            .collect()
    }
}

impl Default for UrlSigner {
    fn default() -> Self {
        Self::from_config(&ProvisioningConfig::default())
    }
}
