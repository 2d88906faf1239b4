use serde::Deserialize;

// 用户登录请求（表单编码）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 登录名即邮箱
    pub username: String,
    /// 密码
    pub password: String,
}
