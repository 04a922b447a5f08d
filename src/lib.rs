//! # Job MCQ
//!
//! 职位管理与面试选择题练习的客户端，对接远程职位 / 生成 / 成绩 API
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 每次调用只发一个 HTTP 请求，不重试、不缓存
//! - `JobClient` - 职位增删改查
//! - `AuthClient` - 管理员登录
//! - `McqClient` - 生成选择题、保存成绩
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 与网络无关的能力
//! - `validation` - 表单校验（字段 → 第一条错误）
//! - `scoring` - 算分与选项标记
//! - `ResumeFile` - 读取简历
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一次答题的完整流程
//! - `QuizState` - 纯状态，生成票据丢弃过期响应
//! - `QuizSession` - 加载描述 → 生成 → 作答 → 算分保存 → 揭晓
//!
//! ### ④ 入口（App）
//! - `cli` / `app` - 命令行解析、命令分发、终端输出

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{GeneratedQuiz, Job, JobDraft, Question, ScoreResult};
pub use services::ResumeFile;
pub use workflow::{GenerationOutcome, HttpQuizBackend, QuizBackend, QuizPhase, QuizReport, QuizSession};
