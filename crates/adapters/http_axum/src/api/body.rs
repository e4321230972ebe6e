//! Lenient `{"state": ...}` command body.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

/// Desired on/off state carried by a command body.
///
/// Never rejects a request: a missing, unreadable or non-JSON body, or a
/// missing `state` field, reads as off. Non-boolean values follow
/// JavaScript truthiness (`0`, `""` and `null` are off, everything else on).
/// The content type is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateBody(pub bool);

impl StateBody {
    fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(body) => Self(body.get("state").is_some_and(truthy)),
            Err(err) => {
                if !bytes.is_empty() {
                    tracing::debug!(error = %err, "unparsable command body, treating state as off");
                }
                Self(false)
            }
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(on) => *on,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl<S> FromRequest<S> for StateBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::from_bytes(&bytes)),
            Err(err) => {
                tracing::debug!(error = %err, "unreadable command body, treating state as off");
                Ok(Self(false))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_boolean_state() {
        assert_eq!(StateBody::from_bytes(br#"{"state":true}"#), StateBody(true));
        assert_eq!(StateBody::from_bytes(br#"{"state":false}"#), StateBody(false));
    }

    #[test]
    fn should_read_missing_state_as_off() {
        assert_eq!(StateBody::from_bytes(b"{}"), StateBody(false));
        assert_eq!(StateBody::from_bytes(b""), StateBody(false));
    }

    #[test]
    fn should_read_invalid_json_as_off() {
        assert_eq!(StateBody::from_bytes(b"state=true"), StateBody(false));
        assert_eq!(StateBody::from_bytes(b"[true]"), StateBody(false));
    }

    #[test]
    fn should_coerce_non_boolean_state_by_truthiness() {
        assert_eq!(StateBody::from_bytes(br#"{"state":"on"}"#), StateBody(true));
        assert_eq!(StateBody::from_bytes(br#"{"state":""}"#), StateBody(false));
        assert_eq!(StateBody::from_bytes(br#"{"state":1}"#), StateBody(true));
        assert_eq!(StateBody::from_bytes(br#"{"state":0}"#), StateBody(false));
        assert_eq!(StateBody::from_bytes(br#"{"state":null}"#), StateBody(false));
        assert_eq!(StateBody::from_bytes(br#"{"state":{}}"#), StateBody(true));
    }
}
