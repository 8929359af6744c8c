pub mod admin_commands;
pub mod distribution_commands;
pub mod intake_commands;

use chrono::{Local, NaiveDate};

use crate::AppError;

pub(crate) fn required_text(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Calendar date as `YYYY-MM-DD`; today (local time) when absent or blank.
pub(crate) fn resolve_date(value: Option<String>, field: &str) -> Result<String, AppError> {
    match optional_text(value) {
        None => Ok(Local::now().format("%Y-%m-%d").to_string()),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(|date| date.format("%Y-%m-%d").to_string())
            .map_err(|_| AppError::BadRequest(format!("{} must be YYYY-MM-DD, got '{}'", field, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_date_validates_format() {
        assert_eq!(
            resolve_date(Some(" 2025-01-05 ".to_string()), "d").expect("valid"),
            "2025-01-05"
        );
        assert_eq!(resolve_date(None, "d").expect("today").len(), 10);
        match resolve_date(Some("05/01/2025".to_string()), "import_date") {
            Err(AppError::BadRequest(message)) => assert!(message.contains("import_date")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn required_text_rejects_blank() {
        assert_eq!(required_text("  AS-1 ", "asset_id").expect("ok"), "AS-1");
        assert!(matches!(
            required_text("   ", "asset_id"),
            Err(AppError::BadRequest(_))
        ));
    }
}
