use thiserror::Error;

/// Internal codec failures. These never cross the `FieldCodec` boundary;
/// they select the fallback path and feed diagnostics.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("value is not representable as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("ciphertext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("ciphertext has no salted header")]
    MissingSaltHeader,
    #[error("ciphertext body of {0} bytes is not a whole number of blocks")]
    InvalidLength(usize),
    #[error("invalid key or iv length")]
    KeyLength,
    #[error("padding check failed")]
    Padding,
    #[error("decrypted bytes are not utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
