/// 通用 HTTP 客户端
///
/// 封装 reqwest 客户端、接口地址和错误映射；每次调用只发一个请求，不重试
use crate::config::{Config, Endpoints};
use crate::error::{AppError, AppResult, ApiError};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    endpoints: Endpoints,
    token: Option<String>,
}

impl ApiClient {
    /// 创建新的 API 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AppError::api_request_failed(&config.api_base_url, e))?;

        Ok(Self {
            client,
            endpoints: config.endpoints(),
            token: config.admin_token.clone(),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// 构建请求，存在令牌时附加 Bearer 头
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 发送请求，只映射传输层错误，不检查状态码
    pub async fn send(&self, endpoint: &str, request: RequestBuilder) -> AppResult<Response> {
        debug!("发送请求: {}", endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;
        debug!("响应状态: {} ({})", response.status(), endpoint);
        Ok(response)
    }

    /// 读取并解析 JSON 响应体
    pub async fn read_json<T: DeserializeOwned>(endpoint: &str, response: Response) -> AppResult<T> {
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::Api(ApiError::JsonParseFailed {
                endpoint: endpoint.to_string(),
                source: e,
            })
        })
    }

    /// 把非成功响应转换为错误，消息取自响应体的 `message` 或 `error`
    pub async fn error_from(endpoint: &str, response: Response, fallback: &str) -> AppError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body).unwrap_or_else(|| fallback.to_string());
        AppError::bad_response(endpoint, status, message)
    }
}

/// 从响应体中提取服务端消息
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = match &value {
        Value::Array(items) => items.first()?,
        other => other,
    };
    ["message", "error"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message":"Job not found","job_id":"1"}"#).as_deref(),
            Some("Job not found")
        );
        assert_eq!(
            extract_message(r#"{"error":"No resume file provided"}"#).as_deref(),
            Some("No resume file provided")
        );
        assert_eq!(
            extract_message(r#"[{"message":"No jobs available"}]"#).as_deref(),
            Some("No jobs available")
        );
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"status":"down"}"#), None);
    }

    #[test]
    fn test_client_uses_config_endpoints() {
        let config = Config::default().with_base_url("http://127.0.0.1:9/api");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.endpoints().jobs, "http://127.0.0.1:9/api/admin/jobs");
    }
}
