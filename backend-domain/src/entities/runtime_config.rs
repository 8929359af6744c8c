use serde::{Deserialize, Serialize};

/// Settings the request path needs after startup. The encryption secret is
/// not carried here; it lives only inside the codec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3280".to_string(),
            api_token: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}
