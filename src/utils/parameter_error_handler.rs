//! 请求参数错误处理器
//!
//! 负责把请求体/查询串的反序列化失败在边界处转成统一的 400 响应，
//! 不让畸形请求进入业务处理层。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("请求体解析失败: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("查询参数解析失败: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 表单请求体解析错误处理器（登录接口为表单编码）
pub fn form_error_handler(err: error::UrlencodedError, _req: &HttpRequest) -> error::Error {
    let message = format!("表单解析失败: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}
