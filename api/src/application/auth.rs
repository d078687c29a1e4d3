use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use hungry_owl_core::domain::{
    authentication::value_objects::{Identity, IdentityClaims},
    user::ports::UserService,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid signature")]
    InvalidSignature,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

/// Verifies RS256 tokens issued by the hosted identity provider.
pub struct IdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl IdentityVerifier {
    pub fn from_rsa_pem(pem: &str, issuer: Option<&str>) -> Result<Self, anyhow::Error> {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_aud = false;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self { key, validation })
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        decode::<IdentityClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::InvalidToken,
            })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_string())
        .filter(|token| !token.is_empty())
}

/// Resolves the caller from the bearer token, when one is sent.
///
/// Requests without a token pass through; handlers that need a caller
/// reject them through [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(req.headers()) {
        let claims = match state.identity_verifier.verify(&token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("Rejected bearer token: {}", e);
                return e.into_response();
            }
        };

        match state.service.resolve_identity(claims).await {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(e) => return ApiError::from(e).into_response(),
        }
    }

    next.run(req).await
}

pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized("Authentication required: provide a bearer token".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    use super::*;

    const PRIVATE_KEY: &str = include_str!("fixtures/identity_test_key.pem");
    const PUBLIC_KEY: &str = include_str!("fixtures/identity_test_key.pub.pem");

    fn sign(claims: serde_json::Value) -> String {
        let key = EncodingKey::from_rsa_pem(PRIVATE_KEY.as_bytes()).unwrap();
        encode(&Header::new(Algorithm::RS256), &claims, &key).unwrap()
    }

    fn expires_in(minutes: i64) -> i64 {
        (Utc::now() + Duration::minutes(minutes)).timestamp()
    }

    #[test]
    fn accepts_valid_token_and_reads_profile_claims() {
        let verifier = IdentityVerifier::from_rsa_pem(PUBLIC_KEY, Some("https://id.test")).unwrap();
        let token = sign(json!({
            "sub": "user_123",
            "email": "owl@example.com",
            "given_name": "Hoot",
            "iss": "https://id.test",
            "exp": expires_in(10),
        }));

        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.sub, "user_123");
        assert_eq!(claims.email.as_deref(), Some("owl@example.com"));
        assert_eq!(claims.given_name.as_deref(), Some("Hoot"));
        assert!(claims.picture.is_none());
    }

    #[test]
    fn rejects_expired_token() {
        let verifier = IdentityVerifier::from_rsa_pem(PUBLIC_KEY, None).unwrap();
        let token = sign(json!({ "sub": "user_123", "exp": expires_in(-10) }));

        assert_eq!(verifier.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn rejects_wrong_issuer_and_garbage() {
        let verifier = IdentityVerifier::from_rsa_pem(PUBLIC_KEY, Some("https://id.test")).unwrap();
        let token = sign(json!({
            "sub": "user_123",
            "iss": "https://elsewhere.test",
            "exp": expires_in(10),
        }));

        assert_eq!(verifier.verify(&token).unwrap_err(), AuthError::InvalidToken);
        assert_eq!(verifier.verify("not.a.jwt").unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn rejects_tampered_signature() {
        let verifier = IdentityVerifier::from_rsa_pem(PUBLIC_KEY, None).unwrap();
        let token = sign(json!({ "sub": "user_123", "exp": expires_in(10) }));
        let (unsigned, signature) = token.rsplit_once('.').unwrap();
        let first = if signature.starts_with('A') { 'B' } else { 'A' };
        let forged = format!("{first}{}", &signature[1..]);

        let err = verifier.verify(&format!("{unsigned}.{forged}")).unwrap_err();
        assert_eq!(err, AuthError::InvalidSignature);
    }

    #[test]
    fn reads_bearer_token_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }
}
