use serde::Serialize;

use crate::models::submissions::entities::Submission;

/// 提交列表项（教师视角）
#[derive(Debug, Serialize)]
pub struct SubmissionListItem {
    pub id: i64,
    pub student_id: i64,
    pub content: String,
    pub file_url: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl From<Submission> for SubmissionListItem {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            student_id: s.student_id,
            content: s.content,
            file_url: s.file_url,
            submitted_at: s.submitted_at,
        }
    }
}
