use crate::value_objects::FieldValue;

/// Reversible obfuscation for sensitive record fields.
///
/// Neither operation may fail from the caller's point of view:
/// - `encode` returns `""` for empty input and degrades to the plaintext
///   display string if encryption cannot be performed;
/// - `decode` returns `Text("")` for absent or empty input and passes the
///   original string through unchanged whenever it cannot be decrypted,
///   which is also how legacy plaintext values are read.
///
/// Implementations must be stateless apart from their read-only secret so
/// that concurrent readers and writers need no coordination.
pub trait FieldCodec: Send + Sync {
    fn encode(&self, value: &FieldValue) -> String;

    fn decode(&self, stored: Option<&str>) -> FieldValue;

    fn encode_text(&self, value: &str) -> String {
        self.encode(&FieldValue::text(value))
    }

    fn decode_text(&self, stored: Option<&str>) -> String {
        self.decode(stored).to_display_string()
    }
}
