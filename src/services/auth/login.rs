use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::{LoginRequest, TokenResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let jwt = service.get_jwt(request);

    // 1. 根据邮箱获取用户信息（登录名即邮箱）
    match storage.get_user_by_email(&login_request.username).await {
        Ok(Some(user)) => {
            // 2. 验证密码
            if verify_password(&login_request.password, &user.password_hash) {
                // 3. 签发令牌
                match jwt.issue_token(&user.email) {
                    Ok(token) => {
                        tracing::info!("User {} logged in successfully", user.email);
                        Ok(HttpResponse::Ok().json(ApiResponse::success(
                            TokenResponse::bearer(token),
                            "Login successful",
                        )))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                // 用户不存在与密码错误返回同一响应
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Username or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
