use crate::errors::SessionError;
use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
use std::fmt;

/// Passphrase shipped with every build. Anyone holding a binary can derive
/// the key, so the cookie is opaque to casual inspection but not secret.
pub const DEFAULT_SESSION_SECRET: &str = "freelance-dashboard:userDetails:v1";

pub const NONCE_SIZE: usize = 12;

/// AES-256-GCM keyed by SHA-256 of a passphrase.
///
/// Sealed form is URL-safe base64 (no padding) of `nonce || ciphertext`,
/// which is valid as a cookie value without further escaping.
#[derive(Clone)]
pub struct SessionCipher {
    cipher: Aes256Gcm,
}

impl SessionCipher {
    pub fn new(secret: &str) -> Self {
        let key = Sha256::digest(secret.as_bytes());
        Self {
            cipher: Aes256Gcm::new(&key),
        }
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, SessionError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| SessionError::Seal(e.to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        Ok(URL_SAFE_NO_PAD.encode(sealed))
    }

    pub fn decrypt(&self, sealed: &str) -> Result<Vec<u8>, SessionError> {
        let raw = URL_SAFE_NO_PAD
            .decode(sealed.trim())
            .map_err(|e| SessionError::Corrupt(format!("not base64: {e}")))?;

        if raw.len() <= NONCE_SIZE {
            return Err(SessionError::Corrupt("ciphertext too short".into()));
        }

        let (nonce, ciphertext) = raw.split_at(NONCE_SIZE);

        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| SessionError::Corrupt("authentication tag mismatch".into()))
    }
}

impl Default for SessionCipher {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECRET)
    }
}

impl fmt::Debug for SessionCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCipher").finish_non_exhaustive()
    }
}
