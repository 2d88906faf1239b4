//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{AssignHubError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    ///
    /// 配置显式传入；启动时自动执行迁移，三张表不存在则创建。
    pub async fn new_async(config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AssignHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AssignHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AssignHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AssignHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    submissions::{entities::Submission, requests::CreateSubmissionRequest},
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        student_id: i64,
        assignment_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(student_id, assignment_id, submission)
            .await
    }

    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    // 内存库 + 单连接池，避免每个连接各自拿到一个空库
    async fn test_storage() -> SeaOrmStorage {
        let mut config = AppConfig::default();
        config.database.url = ":memory:".to_string();
        config.database.pool_size = 1;
        SeaOrmStorage::new_async(&config)
            .await
            .expect("failed to init in-memory storage")
    }

    fn user_request(name: &str, email: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            // 存储层不关心哈希方案，这里直接放一个固定摘要
            password: "$argon2id$fake$digest".to_string(),
            role,
        }
    }

    fn assignment_request(title: &str) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            title: title.to_string(),
            description: "阅读第三章并完成课后习题".to_string(),
            due_date: chrono::Utc::now() + chrono::Duration::days(7),
        }
    }

    #[tokio::test]
    async fn test_create_user_and_get_by_email() {
        let storage = test_storage().await;

        let created = storage
            .create_user(user_request("Alice", "alice@example.com", UserRole::Teacher))
            .await
            .unwrap();
        assert_eq!(created.role, UserRole::Teacher);

        let found = storage
            .get_user_by_email("alice@example.com")
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Alice");

        assert!(
            storage
                .get_user_by_email("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let storage = test_storage().await;

        storage
            .create_user(user_request("Alice", "dup@example.com", UserRole::Teacher))
            .await
            .unwrap();

        // 其余字段不同也必须冲突
        let err = storage
            .create_user(user_request("Bob", "dup@example.com", UserRole::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, AssignHubError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_assignment_and_submission_round_trip() {
        let storage = test_storage().await;

        let teacher = storage
            .create_user(user_request("T", "t@example.com", UserRole::Teacher))
            .await
            .unwrap();
        let student = storage
            .create_user(user_request("S", "s@example.com", UserRole::Student))
            .await
            .unwrap();

        let hw1 = storage
            .create_assignment(teacher.id, assignment_request("第一次作业"))
            .await
            .unwrap();
        let hw2 = storage
            .create_assignment(teacher.id, assignment_request("第二次作业"))
            .await
            .unwrap();
        assert_eq!(hw1.teacher_id, teacher.id);

        let fetched = storage
            .get_assignment_by_id(hw1.id)
            .await
            .unwrap()
            .expect("assignment should exist");
        assert_eq!(fetched.title, "第一次作业");
        assert!(storage.get_assignment_by_id(99999).await.unwrap().is_none());

        storage
            .create_submission(
                student.id,
                hw1.id,
                CreateSubmissionRequest {
                    content: "我的答案".to_string(),
                    file_url: Some("https://files.example.com/1.pdf".to_string()),
                },
            )
            .await
            .unwrap();
        storage
            .create_submission(
                student.id,
                hw2.id,
                CreateSubmissionRequest {
                    content: "另一份答案".to_string(),
                    file_url: None,
                },
            )
            .await
            .unwrap();

        // 列表只包含指定作业的提交
        let listed = storage.list_submissions_by_assignment(hw1.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].student_id, student.id);
        assert_eq!(listed[0].content, "我的答案");
        assert_eq!(
            listed[0].file_url.as_deref(),
            Some("https://files.example.com/1.pdf")
        );

        assert!(
            storage
                .list_submissions_by_assignment(99999)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_repeat_submission_allowed() {
        let storage = test_storage().await;

        let teacher = storage
            .create_user(user_request("T", "t2@example.com", UserRole::Teacher))
            .await
            .unwrap();
        let student = storage
            .create_user(user_request("S", "s2@example.com", UserRole::Student))
            .await
            .unwrap();
        let hw = storage
            .create_assignment(teacher.id, assignment_request("可重复提交"))
            .await
            .unwrap();

        // 没有唯一约束，同一学生可多次提交
        for i in 0..2 {
            storage
                .create_submission(
                    student.id,
                    hw.id,
                    CreateSubmissionRequest {
                        content: format!("第 {i} 版"),
                        file_url: None,
                    },
                )
                .await
                .unwrap();
        }

        let listed = storage.list_submissions_by_assignment(hw.id).await.unwrap();
        assert_eq!(listed.len(), 2);
    }
}
