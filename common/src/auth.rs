//! Admin gate
//!
//! The admin panel stays locked until a candidate password hashes to the
//! expected SHA-256 digest. State lives only in memory: a reload locks again.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

/// Digest of the panel password shipped with the site
pub const DEFAULT_PASSWORD_DIGEST: &str =
    "c775e7b757ede630cd0aa1113bd102661ab38829ca52a6422ab782862f268646";

/// Lowercase hex SHA-256 of the UTF-8 bytes of `secret`
pub fn digest_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Debug, Clone)]
pub struct AdminGate {
    expected_digest: String,
    state: GateState,
}

impl AdminGate {
    pub fn new(expected_digest: impl Into<String>) -> Self {
        Self {
            expected_digest: expected_digest.into().trim().to_lowercase(),
            state: GateState::Locked,
        }
    }

    /// Unlocks when the candidate matches. A mismatch leaves the gate locked.
    pub fn unlock(&mut self, candidate: &str) -> Result<()> {
        if digest_secret(candidate) == self.expected_digest {
            self.state = GateState::Unlocked;
            tracing::debug!("admin gate unlocked");
            Ok(())
        } else {
            tracing::debug!("admin gate rejected candidate");
            Err(Error::IncorrectPassword)
        }
    }

    pub fn lock(&mut self) {
        self.state = GateState::Locked;
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_DIGEST)
    }
}
