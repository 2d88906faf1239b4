use serde::Deserialize;

use crate::models::users::entities::UserRole;

// 注册请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
