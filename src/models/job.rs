use crate::models::lenient::deserialize_opt_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// 职位
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub posting_date: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
}

impl Job {
    /// 表单使用的日期（`date` 与 `posting_date` 同值）
    pub fn date(&self) -> &str {
        self.posting_date.as_deref().unwrap_or_default()
    }
}

/// 职位状态
///
/// 服务端大小写不统一（`Open` / `close`），比较时忽略大小写
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Other(String),
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "open" => JobStatus::Open,
            "close" | "closed" => JobStatus::Closed,
            _ => JobStatus::Other(value),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Open => write!(f, "Open"),
            JobStatus::Closed => write!(f, "Close"),
            JobStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// `GET /admin/jobs/{id}` 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct JobEnvelope {
    pub job: Job,
}

/// 创建 / 更新职位的表单
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct JobDraft {
    #[validate(length(min = 3, message = "Title must be at least 3 characters long."))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters long."))]
    pub description: String,
    #[validate(custom(function = validate_posting_date))]
    pub date: String,
}

impl JobDraft {
    /// 创建日期默认为今天的表单
    pub fn dated_today(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

fn validate_posting_date(date: &str) -> Result<(), ValidationError> {
    let trimmed = date.trim();
    let parsed = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(trimmed).is_ok();
    if parsed {
        Ok(())
    } else {
        Err(ValidationError::new("date").with_message("A valid date is required.".into()))
    }
}

/// 职位接口的通用消息响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
}
