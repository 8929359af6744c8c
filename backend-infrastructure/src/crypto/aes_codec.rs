use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, warn};

use backend_domain::{FieldCodec, FieldValue};

use crate::crypto::{evp_bytes_to_key, CodecError, SALT_LEN};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Fallback secret used when none is configured. Running with it is a
/// security regression and is reported at startup.
pub const DEFAULT_ENCRYPTION_KEY: &str = "default-secret-key-please-change";

const SALT_HEADER: &[u8; 8] = b"Salted__";
const BLOCK_LEN: usize = 16;

/// Field codec over the OpenSSL salted envelope.
///
/// Each `encode` draws a fresh salt, so encoding the same value twice yields
/// different ciphertexts. There is no authentication tag: a wrong key or a
/// tampered value is only noticed through a padding or UTF-8 failure, and
/// then handled exactly like legacy plaintext.
#[derive(Clone)]
pub struct AesFieldCodec {
    secret: String,
}

impl AesFieldCodec {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn encrypt(&self, value: &FieldValue) -> Result<String, CodecError> {
        let plaintext = serde_json::to_string(value)?;

        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let derived = evp_bytes_to_key(self.secret.as_bytes(), &salt);
        let cipher = Aes256CbcEnc::new_from_slices(&derived.key, &derived.iv)
            .map_err(|_| CodecError::KeyLength)?;
        let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut envelope = Vec::with_capacity(SALT_HEADER.len() + SALT_LEN + ciphertext.len());
        envelope.extend_from_slice(SALT_HEADER);
        envelope.extend_from_slice(&salt);
        envelope.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(envelope))
    }

    fn decrypt(&self, stored: &str) -> Result<String, CodecError> {
        let envelope = STANDARD.decode(stored.trim())?;
        let header_len = SALT_HEADER.len() + SALT_LEN;
        if envelope.len() < header_len || &envelope[..SALT_HEADER.len()] != SALT_HEADER {
            return Err(CodecError::MissingSaltHeader);
        }
        let body = &envelope[header_len..];
        if body.is_empty() || body.len() % BLOCK_LEN != 0 {
            return Err(CodecError::InvalidLength(body.len()));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&envelope[SALT_HEADER.len()..header_len]);
        let derived = evp_bytes_to_key(self.secret.as_bytes(), &salt);
        let cipher = Aes256CbcDec::new_from_slices(&derived.key, &derived.iv)
            .map_err(|_| CodecError::KeyLength)?;
        let plaintext = cipher
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| CodecError::Padding)?;
        Ok(String::from_utf8(plaintext)?)
    }
}

impl std::fmt::Debug for AesFieldCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesFieldCodec").finish_non_exhaustive()
    }
}

impl FieldCodec for AesFieldCodec {
    fn encode(&self, value: &FieldValue) -> String {
        if value.is_empty() {
            return String::new();
        }
        match self.encrypt(value) {
            Ok(ciphertext) => ciphertext,
            Err(err) => {
                warn!("field encryption failed, storing plaintext: {}", err);
                value.to_display_string()
            }
        }
    }

    fn decode(&self, stored: Option<&str>) -> FieldValue {
        let original = match stored {
            Some(value) if !value.is_empty() => value,
            _ => return FieldValue::text(""),
        };
        match self.decrypt(original) {
            Ok(plaintext) if plaintext.is_empty() => FieldValue::text(original),
            Ok(plaintext) => match serde_json::from_str::<FieldValue>(&plaintext) {
                Ok(value) => value,
                Err(_) => FieldValue::Text(plaintext),
            },
            Err(err) => {
                debug!("field passed through undecoded: {}", err);
                FieldValue::text(original)
            }
        }
    }
}
