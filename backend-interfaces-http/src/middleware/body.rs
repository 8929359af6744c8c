use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::HttpError;

/// Decodes a JSON request body after authorization has passed, so a bad body
/// surfaces as a `{ "error": ... }` 400 rather than axum's plain-text
/// rejection.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, HttpError> {
    serde_json::from_slice(body).map_err(|err| {
        warn!("rejected request body: {}", err);
        HttpError::BadRequest(format!("invalid body: {}", err))
    })
}

pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, HttpError> {
    query
        .map(|Query(params)| params)
        .map_err(|err| HttpError::BadRequest(format!("invalid query: {}", err.body_text())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::IntakeRequest;

    #[test]
    fn missing_field_is_a_bad_request() {
        let result = parse_json_body::<IntakeRequest>(br#"{"asset_id":"AS-1"}"#);
        match result {
            Err(HttpError::BadRequest(message)) => assert!(message.contains("brand_model")),
            other => panic!("unexpected: {:?}", other.map(|request| request.asset_id)),
        }
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        assert!(matches!(
            parse_json_body::<IntakeRequest>(b"{not json"),
            Err(HttpError::BadRequest(_))
        ));
    }
}
