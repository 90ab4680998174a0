use std::env;

/// Signing configuration for issued tokens.
///
/// Tokens are signed HS256 with `secret` and carry no expiry; the caller's
/// claims are embedded as-is.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
        }
    }
}
