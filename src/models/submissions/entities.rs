use serde::{Deserialize, Serialize};

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub file_url: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
