/// 管理员登录客户端
use crate::clients::http::ApiClient;
use crate::error::AppResult;
use crate::models::{LoginForm, LoginResponse};
use crate::services::validation::validate_login;
use reqwest::Method;
use tracing::info;

#[derive(Clone, Debug)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 登录
    ///
    /// # 返回
    /// 成功时返回服务端消息和令牌；凭据错误等非成功状态返回 `BadResponse`
    pub async fn login(&self, form: &LoginForm) -> AppResult<LoginResponse> {
        validate_login(form)?;

        let url = &self.api.endpoints().admin_login;
        let request = self.api.request(Method::POST, url).json(form);
        let response = self.api.send(url, request).await?;

        if !response.status().is_success() {
            return Err(ApiClient::error_from(url, response, "An unexpected error occurred.").await);
        }
        let result: LoginResponse = ApiClient::read_json(url, response).await?;
        info!("✓ 登录成功: {}", form.email);
        Ok(result)
    }
}
