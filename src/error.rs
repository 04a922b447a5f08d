use crate::services::validation::FieldErrors;
use thiserror::Error;

/// 生成失败时展示给用户的统一提示
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate MCQs. The model might be busy. Please try again.";

/// 缺少职位描述或简历时的提示
pub const MISSING_INPUT_MESSAGE: &str = "Please provide both a job description and a resume file.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 表单校验错误（本地，不发请求）
    #[error("表单校验失败: {0}")]
    Validation(#[from] FieldErrors),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 答题流程错误
    #[error("{0}")]
    Quiz(#[from] QuizError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非成功状态码
    #[error("API返回错误响应 ({endpoint}): status={status}, message={message}")]
    BadResponse {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// 服务端返回的状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 仅支持 PDF / DOCX
    #[error("不支持的简历格式: {path} (仅支持 .pdf / .docx)")]
    UnsupportedType { path: String },
    #[error("文件为空: {path}")]
    Empty { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("配置文件解析失败 ({path}): {source}")]
    FileParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 答题流程错误
///
/// 显示文本直接面向用户
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,
    /// 网络失败、非成功状态码、服务繁忙统一归为此类
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    GenerationFailed,
    #[error("There are no questions to submit yet.")]
    NoQuestions,
    #[error("Answers have already been checked for this attempt.")]
    AlreadyRevealed,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建API错误响应
    pub fn bad_response(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        AppError::Api(ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 答题流程错误（如果是）
    pub fn as_quiz(&self) -> Option<&QuizError> {
        match self {
            AppError::Quiz(e) => Some(e),
            _ => None,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
