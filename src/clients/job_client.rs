/// 职位 API 客户端
///
/// 封装职位的增删改查；写操作先做本地校验，失败时不发请求
use crate::clients::http::{extract_message, ApiClient};
use crate::error::{AppError, AppResult};
use crate::models::{Job, JobDraft, JobEnvelope, JobMessage};
use crate::services::validation::validate_job_draft;
use reqwest::{Method, StatusCode};
use tracing::{debug, info};

/// 服务端没有职位时返回的占位消息
const NO_JOBS_MESSAGE: &str = "No jobs available";

#[derive(Clone, Debug)]
pub struct JobClient {
    api: ApiClient,
}

impl JobClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 获取全部职位
    ///
    /// 服务端没有职位时返回 404 和占位数组，这里视为空列表；其他 404 仍是错误
    pub async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        let url = &self.api.endpoints().jobs;
        let response = self.api.send(url, self.api.request(Method::GET, url)).await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                let body = response.text().await.unwrap_or_default();
                match extract_message(&body) {
                    Some(message) if message == NO_JOBS_MESSAGE => {
                        debug!("职位列表为空");
                        Ok(Vec::new())
                    }
                    message => Err(AppError::bad_response(
                        url.as_str(),
                        StatusCode::NOT_FOUND.as_u16(),
                        message.unwrap_or_else(|| "Failed to load jobs".to_string()),
                    )),
                }
            }
            status if status.is_success() => ApiClient::read_json(url, response).await,
            _ => Err(ApiClient::error_from(url, response, "Failed to load jobs").await),
        }
    }

    /// 获取单个职位
    pub async fn get_job(&self, job_id: &str) -> AppResult<Job> {
        let url = self.api.endpoints().job(job_id);
        let response = self.api.send(&url, self.api.request(Method::GET, &url)).await?;

        if !response.status().is_success() {
            return Err(ApiClient::error_from(&url, response, "Job not found").await);
        }
        let envelope: JobEnvelope = ApiClient::read_json(&url, response).await?;
        Ok(envelope.job)
    }

    /// 创建职位，成功时返回新职位的 ID
    ///
    /// 只有 201 视为成功
    pub async fn create_job(&self, draft: &JobDraft) -> AppResult<Option<String>> {
        validate_job_draft(draft)?;

        let url = &self.api.endpoints().jobs;
        let request = self.api.request(Method::POST, url).json(draft);
        let response = self.api.send(url, request).await?;

        if response.status() != StatusCode::CREATED {
            return Err(ApiClient::error_from(url, response, "Unknown error").await);
        }
        let message: JobMessage = ApiClient::read_json(url, response).await?;
        info!("✓ 职位创建成功: {}", draft.title);
        Ok(message.job_id)
    }

    /// 更新职位
    pub async fn update_job(&self, job_id: &str, draft: &JobDraft) -> AppResult<()> {
        validate_job_draft(draft)?;

        let url = self.api.endpoints().job(job_id);
        let request = self.api.request(Method::PUT, &url).json(draft);
        let response = self.api.send(&url, request).await?;

        if !response.status().is_success() {
            return Err(ApiClient::error_from(&url, response, "Failed to update job").await);
        }
        info!("✓ 职位更新成功: {}", job_id);
        Ok(())
    }

    /// 删除职位
    pub async fn delete_job(&self, job_id: &str) -> AppResult<()> {
        let url = self.api.endpoints().job(job_id);
        let response = self.api.send(&url, self.api.request(Method::DELETE, &url)).await?;

        if !response.status().is_success() {
            return Err(ApiClient::error_from(&url, response, "Failed to delete job").await);
        }
        info!("✓ 职位已删除: {}", job_id);
        Ok(())
    }
}
