/// 选择题生成与成绩保存客户端
///
/// 生成请求是长时间的模型推理，不设总超时，也不能取消
use crate::clients::http::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::{GeneratedQuiz, ScoreResult};
use crate::services::ResumeFile;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct McqClient {
    api: ApiClient,
}

impl McqClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 上传职位描述和简历，生成选择题
    ///
    /// # 参数
    /// - `job_description`: 职位描述文本
    /// - `resume`: 简历文件
    pub async fn generate_mcqs(&self, job_description: &str, resume: &ResumeFile) -> AppResult<GeneratedQuiz> {
        let url = &self.api.endpoints().generate_mcqs;

        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(resume.mime)
            .map_err(|e| AppError::api_request_failed(url, e))?;
        let form = Form::new()
            .text("jobDescription", job_description.to_string())
            .part("resume", part);

        info!("📤 正在生成选择题: {} ({} 字节)", resume.file_name, resume.len());
        let request = self.api.request(Method::POST, url).multipart(form);
        let response = self.api.send(url, request).await?;

        if !response.status().is_success() {
            return Err(ApiClient::error_from(url, response, "Failed to generate MCQs").await);
        }
        let quiz: GeneratedQuiz = ApiClient::read_json(url, response).await?;
        debug!("生成完成，共 {} 道题", quiz.questions.len());
        Ok(quiz)
    }

    /// 保存成绩，响应体忽略
    pub async fn save_results(&self, result: &ScoreResult) -> AppResult<()> {
        let url = &self.api.endpoints().save_results;
        let request = self.api.request(Method::POST, url).json(result);
        let response = self.api.send(url, request).await?;

        if !response.status().is_success() {
            return Err(ApiClient::error_from(url, response, "Failed to save results").await);
        }
        debug!("成绩已保存: {}/{}", result.score, result.total_questions);
        Ok(())
    }
}
