use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (用户邮箱)
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

/// JWT 令牌服务
///
/// 启动时由 JwtConfig 构造一次，之后作为只读对象放入 app_data 共享。
/// 仅签发单一 access token，无 refresh token、无会话、无吊销。
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64, // 分钟
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.secret.as_ref()),
            access_token_expiry: config.access_token_expiry,
        }
    }

    // 签发 Access Token（sub 为用户邮箱）
    pub fn issue_token(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_token_with_expiry(email, Duration::minutes(self.access_token_expiry))
    }

    // 签发带自定义过期时间的 Token
    pub fn issue_token_with_expiry(
        &self,
        email: &str,
        expiry_duration: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: email.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    // 验证 JWT token：签名错误、格式错误或过期均返回 Err
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::default();
        decode::<Claims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtService {
        JwtService::new(&JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 30,
        })
    }

    #[test]
    fn test_issue_and_verify_subject() {
        let jwt = service("test-secret");
        let token = jwt.issue_token("alice@example.com").unwrap();
        let claims = jwt.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails() {
        let jwt = service("test-secret");
        // 过期时间远超默认 leeway
        let token = jwt
            .issue_token_with_expiry("alice@example.com", Duration::minutes(-10))
            .unwrap();
        assert!(jwt.verify_token(&token).is_err());
    }

    #[test]
    fn test_foreign_secret_fails() {
        let issuer = service("secret-a");
        let verifier = service("secret-b");
        let token = issuer.issue_token("alice@example.com").unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        let jwt = service("test-secret");
        assert!(jwt.verify_token("not-a-jwt").is_err());
    }
}
