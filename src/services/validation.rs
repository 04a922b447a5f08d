//! 表单校验服务
//!
//! 每个字段只保留第一条错误信息；结果为空表示校验通过。校验失败时不发起任何请求。

use crate::models::{JobDraft, LoginForm, SignUpForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use validator::{Validate, ValidationErrors};

/// 字段 → 第一条错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只在字段尚无错误时写入
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 为空时返回 `Ok(())`
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// 校验职位表单
pub fn validate_job_draft(draft: &JobDraft) -> Result<(), FieldErrors> {
    draft.validate().map_err(FieldErrors::from)
}

/// 校验登录表单
pub fn validate_login(form: &LoginForm) -> Result<(), FieldErrors> {
    form.validate().map_err(FieldErrors::from)
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// 校验注册表单
///
/// 规则按顺序检查，每个字段命中第一条即停止
pub fn validate_signup(form: &SignUpForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.add("name", "Name is required.");
    }

    if form.email.is_empty() {
        errors.add("email", "Email is required.");
    } else if !email_pattern().is_match(&form.email) {
        errors.add("email", "Invalid email address.");
    }

    if form.password.is_empty() {
        errors.add("password", "Password is required.");
    } else if form.password.chars().count() < 6 {
        errors.add("password", "Password must be at least 6 characters.");
    }

    if form.confirm_password.is_empty() {
        errors.add("confirmPassword", "Please confirm your password.");
    } else if form.password != form.confirm_password {
        errors.add("confirmPassword", "Passwords do not match.");
    }

    errors.into_result()
}
