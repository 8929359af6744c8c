use anyhow::{anyhow, Result};

pub fn validate_environment(value: &str) -> Result<()> {
    match value {
        "development" | "production" => Ok(()),
        other => Err(anyhow!(
            "environment must be development or production, got '{}'",
            other
        )),
    }
}

pub fn validate_store_backend(value: &str) -> Result<()> {
    match value {
        "memory" | "json" => Ok(()),
        other => Err(anyhow!("store_backend must be memory or json, got '{}'", other)),
    }
}
