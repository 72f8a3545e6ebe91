//! Encryption of stored policy values.

use std::io::Cursor;

use base64::Engine;
use pgp::composed::{Deserializable, Message, SignedPublicKey};
use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::ser::Serialize;
use pgp::types::PublicKeyTrait;

use crate::Error;

/// A value encrypted for state storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedValue {
    /// Hex fingerprint of the key the value was encrypted to.
    pub fingerprint: String,
    /// Base64 ciphertext.
    pub ciphertext: String,
}

/// Encrypts plaintext to a public key.
///
/// Policy settings configured with a `pgp_key` never keep their value in
/// clear text; the reconciler stores the result of this trait instead.
pub trait ValueEncryptor: Send + Sync {
    /// Encrypts `plaintext` to `public_key`.
    fn encrypt(&self, public_key: &str, plaintext: &str) -> Result<EncryptedValue, Error>;
}

/// OpenPGP encryption using the `pgp` crate.
///
/// The key is either a base64-encoded binary public key, as exported by
/// `gpg --export | base64`, or an ASCII-armored key block. The message is
/// encrypted to the first encryption-capable subkey, falling back to the
/// primary key.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgpEncryptor;

impl PgpEncryptor {
    fn parse_key(public_key: &str) -> Result<SignedPublicKey, Error> {
        let trimmed = public_key.trim();
        let key = if trimmed.starts_with("-----BEGIN PGP") {
            SignedPublicKey::from_string(trimmed).map(|(key, _headers)| key)
        } else {
            let compact: String = trimmed.split_whitespace().collect();
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(compact)
                .map_err(|e| Error::encryption(format!("pgp_key is not valid base64: {}", e)))?;
            SignedPublicKey::from_bytes(Cursor::new(bytes))
        };
        key.map_err(|e| Error::encryption(format!("failed to parse pgp_key: {}", e)))
    }
}

impl ValueEncryptor for PgpEncryptor {
    fn encrypt(&self, public_key: &str, plaintext: &str) -> Result<EncryptedValue, Error> {
        let key = Self::parse_key(public_key)?;
        let message = Message::new_literal_bytes("", plaintext.as_bytes());
        let mut rng = rand::thread_rng();

        let encrypted = match key
            .public_subkeys
            .iter()
            .find(|subkey| subkey.is_encryption_key())
        {
            Some(subkey) => message.encrypt_to_keys_seipdv1(
                &mut rng,
                SymmetricKeyAlgorithm::AES128,
                &[subkey],
            ),
            None => message.encrypt_to_keys_seipdv1(
                &mut rng,
                SymmetricKeyAlgorithm::AES128,
                &[&key],
            ),
        }
        .map_err(|e| Error::encryption(format!("failed to encrypt value: {}", e)))?;

        let bytes = encrypted
            .to_bytes()
            .map_err(|e| Error::encryption(format!("failed to serialize message: {}", e)))?;

        Ok(EncryptedValue {
            fingerprint: hex::encode(key.fingerprint().as_bytes()),
            ciphertext: base64::engine::general_purpose::STANDARD.encode(bytes),
        })
    }
}
