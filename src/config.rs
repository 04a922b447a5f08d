//! 程序配置
//!
//! 加载顺序：默认值 → TOML 文件（可选）→ 环境变量

use crate::error::{AppResult, ConfigError};
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端 API 根地址（不含末尾的 `/`）
    pub api_base_url: String,
    /// 管理员令牌，存在时以 Bearer 方式附加到管理接口
    pub admin_token: Option<String>,
    /// 建立连接的超时时间（秒）；生成题目的请求本身不设总超时
    pub connect_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            admin_token: None,
            connect_timeout_secs: 10,
            verbose_logging: false,
        }
    }
}

/// TOML 配置文件结构，所有字段可选
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base_url: Option<String>,
    admin_token: Option<String>,
    connect_timeout_secs: Option<u64>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 加载配置
    ///
    /// # 参数
    /// - `path`: TOML 配置文件路径（可选）
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(path) = path {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })?;
            config = config.merge_toml(&content).map_err(|e| ConfigError::FileParse {
                path: path.display().to_string(),
                source: e,
            })?;
        }
        Ok(config.with_env())
    }

    fn merge_toml(self, content: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(content)?;
        Ok(Self {
            api_base_url: file.api_base_url.unwrap_or(self.api_base_url),
            admin_token: file.admin_token.or(self.admin_token),
            connect_timeout_secs: file.connect_timeout_secs.unwrap_or(self.connect_timeout_secs),
            verbose_logging: file.verbose_logging.unwrap_or(self.verbose_logging),
        })
    }

    /// 用环境变量覆盖当前配置
    pub fn with_env(self) -> Self {
        Self {
            api_base_url: std::env::var("JOB_MCQ_API_BASE_URL").unwrap_or(self.api_base_url),
            admin_token: std::env::var("JOB_MCQ_ADMIN_TOKEN").ok().or(self.admin_token),
            connect_timeout_secs: std::env::var("JOB_MCQ_CONNECT_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.connect_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 指定根地址（测试与脚本常用）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base_url)
    }
}

/// 后端接口地址
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub admin_login: String,
    pub jobs: String,
    pub generate_mcqs: String,
    pub save_results: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let admin = format!("{}/admin", base);
        Self {
            admin_login: format!("{}/login", admin),
            jobs: format!("{}/jobs", admin),
            generate_mcqs: format!("{}/generate-mcqs", base),
            save_results: format!("{}/save-results", base),
        }
    }

    /// 单个职位的地址
    ///
    /// 职位 ID 作为单个路径段编码，`/`、`?`、`#` 不会改变路由
    pub fn job(&self, job_id: &str) -> String {
        let mut url = match Url::parse(&self.jobs) {
            Ok(url) => url,
            // 根地址本身无效时请求阶段会报错
            Err(_) => return format!("{}/{}", self.jobs, job_id),
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(job_id);
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_base() {
        let endpoints = Endpoints::new("http://localhost:5000/api/");
        assert_eq!(endpoints.admin_login, "http://localhost:5000/api/admin/login");
        assert_eq!(endpoints.jobs, "http://localhost:5000/api/admin/jobs");
        assert_eq!(endpoints.job("42"), "http://localhost:5000/api/admin/jobs/42");
        assert_eq!(endpoints.generate_mcqs, "http://localhost:5000/api/generate-mcqs");
        assert_eq!(endpoints.save_results, "http://localhost:5000/api/save-results");
    }

    #[test]
    fn test_job_id_stays_one_path_segment() {
        let endpoints = Endpoints::new("http://h/api");
        assert_eq!(endpoints.job("66a1f0"), "http://h/api/admin/jobs/66a1f0");
        assert_eq!(endpoints.job("a/b?x=1"), "http://h/api/admin/jobs/a%2Fb%3Fx=1");
        assert_eq!(endpoints.job("a#b c"), "http://h/api/admin/jobs/a%23b%20c");
    }

    #[test]
    fn test_toml_overrides_only_present_fields() {
        let config = Config::default()
            .merge_toml("api_base_url = \"https://jobs.example.com/api\"\nverbose_logging = true\n")
            .unwrap();
        assert_eq!(config.api_base_url, "https://jobs.example.com/api");
        assert!(config.verbose_logging);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(Config::default().merge_toml("connect_timeout_secs = \"soon\"").is_err());
    }
}
