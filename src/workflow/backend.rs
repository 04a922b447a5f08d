//! 答题流程依赖的远程能力
//!
//! 流程层只依赖这个 trait，测试中可以替换为内存实现

use crate::clients::{ApiClient, JobClient, McqClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{GeneratedQuiz, ScoreResult};
use crate::services::ResumeFile;
use async_trait::async_trait;

#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// 读取职位描述
    async fn fetch_job_description(&self, job_id: &str) -> AppResult<String>;

    /// 提交职位描述和简历，生成题目
    async fn generate_questions(&self, description: &str, resume: &ResumeFile) -> AppResult<GeneratedQuiz>;

    /// 保存成绩
    async fn save_results(&self, result: &ScoreResult) -> AppResult<()>;
}

/// 基于 HTTP 的实现
#[derive(Clone, Debug)]
pub struct HttpQuizBackend {
    jobs: JobClient,
    mcq: McqClient,
}

impl HttpQuizBackend {
    pub fn new(config: &Config) -> AppResult<Self> {
        let api = ApiClient::new(config)?;
        Ok(Self::from_api(api))
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self {
            jobs: JobClient::new(api.clone()),
            mcq: McqClient::new(api),
        }
    }
}

#[async_trait]
impl QuizBackend for HttpQuizBackend {
    async fn fetch_job_description(&self, job_id: &str) -> AppResult<String> {
        Ok(self.jobs.get_job(job_id).await?.description)
    }

    async fn generate_questions(&self, description: &str, resume: &ResumeFile) -> AppResult<GeneratedQuiz> {
        self.mcq.generate_mcqs(description, resume).await
    }

    async fn save_results(&self, result: &ScoreResult) -> AppResult<()> {
        self.mcq.save_results(result).await
    }
}
