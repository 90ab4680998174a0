use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in an identity token.
///
/// The email is required; everything else the caller supplied is carried
/// through untouched, so `verify(issue(claims)) == claims`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of `POST /jwt`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Informational response used by idempotent and no-op outcomes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claims_carry_extra_members() {
        let claims: Claims = serde_json::from_value(json!({
            "email": "a@x.com",
            "name": "Ada",
            "seat": 7,
        }))
        .unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.extra["name"], json!("Ada"));
        assert_eq!(claims.extra["seat"], json!(7));

        let round_trip: Claims =
            serde_json::from_value(serde_json::to_value(&claims).unwrap()).unwrap();
        assert_eq!(round_trip, claims);
    }

    #[test]
    fn test_claims_require_email() {
        let result: Result<Claims, _> =
            serde_json::from_value(json!({ "name": "Ada" }));
        assert!(result.is_err());
    }
}
