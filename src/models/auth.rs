use serde::{Deserialize, Serialize};
use validator::Validate;

/// 管理员登录表单
#[derive(Debug, Clone, Serialize, Validate, PartialEq, Eq)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// 登录接口响应
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// 注册表单，只做本地校验
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
