use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use manyworker_domain::entities::Actor;

use crate::error::ApiError;
use crate::routes::AppState;

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 参与者 ID
    pub sub: i64,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("缺少认证令牌")]
    MissingToken,
    #[error("认证令牌无效")]
    InvalidToken,
    #[error("令牌对应的参与者不存在")]
    UnknownActor,
}

/// JWT 签发与验证服务 (HS256)
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            expiration_hours,
        }
    }

    pub fn generate_token(&self, actor_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: actor_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}

/// 当前登录的参与者，由认证中间件写入请求扩展
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentActor>()
            .cloned()
            .ok_or(ApiError::Authentication(AuthError::MissingToken))
    }
}

/// 认证中间件：验证 Bearer 令牌并把解析出的参与者写入请求扩展
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(ApiError::Authentication(AuthError::MissingToken))?;

    let claims = state.jwt.validate_token(token).map_err(|e| {
        warn!("令牌验证失败: {e}");
        ApiError::Authentication(AuthError::InvalidToken)
    })?;

    let actor = state
        .directory
        .resolve(claims.sub)
        .await?
        .ok_or(ApiError::Authentication(AuthError::UnknownActor))?;

    req.extensions_mut().insert(CurrentActor(actor));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_validate_token() {
        let service = JwtService::new("test-secret", 1);
        let token = service.generate_token(42).unwrap();

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let issuer = JwtService::new("secret-a", 1);
        let verifier = JwtService::new("secret-b", 1);

        let token = issuer.generate_token(42).unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let service = JwtService::new("test-secret", 1);
        assert!(service.validate_token("no-es-un-token").is_err());
    }
}
