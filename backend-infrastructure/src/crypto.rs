// Field encryption
// OpenSSL-compatible passphrase envelope (AES-256-CBC, "Salted__" header,
// MD5 EVP_BytesToKey), the format the existing stored data was written in.

pub mod aes_codec;
pub mod error;
pub mod key_derivation;

pub use aes_codec::*;
pub use error::*;
pub use key_derivation::*;
