use serde::{Deserialize, Serialize};

/// 业务错误码
///
/// 放在 ApiResponse.code 中返回给前端，与 HTTP 状态码配合使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Unauthorized = 40100,
    AuthFailed = 40101,
    Forbidden = 40300,
    NotFound = 40400,
    EmailAlreadyExists = 40900,
    InternalServerError = 50000,
    RegisterFailed = 50001,
}
