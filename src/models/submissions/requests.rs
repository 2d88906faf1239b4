use serde::Deserialize;

/// 提交作业请求
#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub content: String,
    /// 附件地址，后端只存储不校验
    pub file_url: Option<String>,
}
