use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AssignHubError;
use crate::models::auth::TokenResponse;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    mut create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config(request);
    let jwt = service.get_jwt(request);

    // 1. 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &create_request.email).await {
        return Ok(response);
    }

    // 2. 哈希密码
    match hash_password(&create_request.password, &config.argon2) {
        Ok(password_hash) => {
            // 将明文密码替换为哈希后的密码
            create_request.password = password_hash;
            let email = create_request.email.clone();

            // 3. 创建用户
            match storage.create_user(create_request).await {
                Ok(user) => {
                    // 4. 签发令牌
                    match jwt.issue_token(&user.email) {
                        Ok(token) => {
                            tracing::info!("User {} registered successfully", user.email);
                            Ok(HttpResponse::Created().json(ApiResponse::success(
                                TokenResponse::bearer(token),
                                "注册成功",
                            )))
                        }
                        Err(e) => {
                            tracing::error!("Failed to generate JWT token: {}", e);
                            Ok(HttpResponse::InternalServerError().json(
                                ApiResponse::error_empty(
                                    ErrorCode::InternalServerError,
                                    "注册成功但令牌生成失败，请重新登录",
                                ),
                            ))
                        }
                    }
                }
                // 与并发注册竞争失败：唯一约束保证只有一个成功
                Err(AssignHubError::Conflict(_)) => {
                    tracing::info!("Concurrent signup lost the race for email {}", email);
                    Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::EmailAlreadyExists,
                        "Email already exists",
                    )))
                }
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("注册失败: {e}"),
                    )),
                ),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("密码哈希失败: {e}"),
            )),
        ),
    }
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EmailAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}
