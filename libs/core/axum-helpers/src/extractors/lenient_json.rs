//! JSON body extractor that never rejects on content.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Request body decoded as an untyped JSON value, if it is one.
///
/// Unlike `axum::Json`, this extractor does not look at `Content-Type` and
/// does not reject malformed input: an empty body or a body that is not valid
/// JSON yields `LenientJson(None)`. Handlers decide what a missing or
/// wrongly-shaped body means for their endpoint.
///
/// Only a failure to read the body at all (for example exceeding the body
/// size limit) is rejected, with axum's own response.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::LenientJson;
///
/// async fn create(LenientJson(body): LenientJson) -> String {
///     match body {
///         Some(value) if value.is_object() => "object".to_string(),
///         _ => "missing or not an object".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Option<Value>);

impl LenientJson {
    /// Decodes raw body bytes; empty or malformed input is `None`.
    pub fn decode(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return LenientJson(None);
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => LenientJson(Some(value)),
            Err(e) => {
                tracing::debug!(error = %e, "Request body is not valid JSON");
                LenientJson(None)
            }
        }
    }
}

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        Ok(LenientJson::decode(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_none() {
        assert_eq!(LenientJson::decode(b""), LenientJson(None));
        assert_eq!(LenientJson::decode(b"  \n"), LenientJson(None));
    }

    #[test]
    fn test_malformed_body_is_none() {
        assert_eq!(LenientJson::decode(b"{\"nome\": "), LenientJson(None));
    }

    #[test]
    fn test_any_json_value_is_kept() {
        assert_eq!(
            LenientJson::decode(br#"{"nome":"A"}"#),
            LenientJson(Some(json!({ "nome": "A" })))
        );
        assert_eq!(LenientJson::decode(b"[1, 2]"), LenientJson(Some(json!([1, 2]))));
        assert_eq!(LenientJson::decode(b"null"), LenientJson(Some(Value::Null)));
    }
}
