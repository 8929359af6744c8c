use md5::{Digest, Md5};

pub const KEY_LEN: usize = 32;
pub const IV_LEN: usize = 16;
pub const SALT_LEN: usize = 8;

/// Key material derived from a passphrase.
pub struct DerivedKey {
    pub key: [u8; KEY_LEN],
    pub iv: [u8; IV_LEN],
}

/// OpenSSL `EVP_BytesToKey` with MD5 and a single iteration:
///
/// ```text
/// D_0 = ""
/// D_i = MD5(D_{i-1} || passphrase || salt)
/// key || iv = D_1 || D_2 || D_3   (first 48 bytes)
/// ```
pub fn evp_bytes_to_key(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut material = Vec::with_capacity(KEY_LEN + IV_LEN + 16);
    let mut previous: Vec<u8> = Vec::new();
    while material.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        hasher.update(&previous);
        hasher.update(passphrase);
        hasher.update(salt);
        previous = hasher.finalize().to_vec();
        material.extend_from_slice(&previous);
    }

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&material[..KEY_LEN]);
    iv.copy_from_slice(&material[KEY_LEN..KEY_LEN + IV_LEN]);
    DerivedKey { key, iv }
}
