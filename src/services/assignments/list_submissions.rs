use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::responses::SubmissionListItem;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 所有权检查：作业不存在与不属于当前教师返回同一响应，不泄露作业是否存在
    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) if assignment.teacher_id == current_user.id => {}
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能查看自己发布的作业的提交",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }

    match storage.list_submissions_by_assignment(assignment_id).await {
        Ok(submissions) => {
            let items: Vec<SubmissionListItem> =
                submissions.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(items, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交列表失败: {e}"),
            )),
        ),
    }
}
