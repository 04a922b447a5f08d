//! 答题会话控制器 - 流程层
//!
//! 核心职责：编排"一次答题"的完整流程
//!
//! 流程顺序：
//! 1. 加载职位描述
//! 2. 上传简历 → 生成题目（长时间推理，显示加载状态）
//! 3. 作答
//! 4. 算分 → 保存成绩（失败只记录日志）→ 揭晓答案
//!
//! 状态锁只在同步片段内持有，不会跨越 `.await`

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::ScoreResult;
use crate::services::ResumeFile;
use crate::workflow::backend::QuizBackend;
use crate::workflow::quiz_state::{GenerationOutcome, QuestionReview, QuizPhase, QuizState};

/// 揭晓后的答题报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    /// 已提交（或尝试提交）的成绩
    pub result: ScoreResult,
    /// 成绩是否保存成功
    pub persisted: bool,
    pub review: Vec<QuestionReview>,
}

pub struct QuizSession<B> {
    backend: B,
    job_id: String,
    state: Mutex<QuizState>,
}

impl<B: QuizBackend> QuizSession<B> {
    /// 创建新的答题会话
    pub fn new(backend: B, job_id: impl Into<String>) -> Self {
        Self {
            backend,
            job_id: job_id.into(),
            state: Mutex::new(QuizState::new()),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    fn state(&self) -> MutexGuard<'_, QuizState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 当前状态的拷贝
    pub fn snapshot(&self) -> QuizState {
        self.state().clone()
    }

    pub fn phase(&self) -> QuizPhase {
        self.state().phase()
    }

    /// 加载职位描述
    ///
    /// 失败时描述保持未设置，后续生成会因缺少描述而被拦截
    pub async fn load_job_description(&self) -> AppResult<()> {
        match self.backend.fetch_job_description(&self.job_id).await {
            Ok(description) => {
                info!("✓ 已加载职位描述 [职位 {}]", self.job_id);
                self.state().set_description(description);
                Ok(())
            }
            Err(e) => {
                error!("[职位 {}] 加载职位描述失败: {}", self.job_id, e);
                Err(e)
            }
        }
    }

    /// 生成题目
    ///
    /// # 参数
    /// - `resume`: 用户选择的简历，`None` 表示尚未选择
    ///
    /// # 返回
    /// - `Ok(Applied)`: 新题目已替换旧题目
    /// - `Ok(Superseded)`: 期间发起了更新的生成请求，本次结果被丢弃
    /// - `Err(Quiz(MissingInput))`: 缺少描述或简历，未发请求
    /// - `Err(Quiz(GenerationFailed))`: 网络或服务失败，题目为空
    pub async fn generate_questions(&self, resume: Option<ResumeFile>) -> AppResult<GenerationOutcome> {
        let request = self.state().begin_generation(resume.as_ref())?;
        info!(
            "[职位 {}] 🤖 正在生成题目 (请求 #{:?})...",
            self.job_id, request.ticket
        );

        let result = self
            .backend
            .generate_questions(&request.description, request.resume)
            .await;
        if let Err(e) = &result {
            error!("[职位 {}] 生成题目失败: {}", self.job_id, e);
        }

        let outcome = self.state().finish_generation(request.ticket, result.ok());
        match &outcome {
            Ok(GenerationOutcome::Applied { question_count }) => {
                info!("[职位 {}] ✓ 生成完成，共 {} 道题", self.job_id, question_count);
            }
            Ok(GenerationOutcome::Superseded) => {
                warn!("[职位 {}] 丢弃过期的生成结果 {:?}", self.job_id, request.ticket);
            }
            Err(_) => {}
        }
        outcome.map_err(AppError::from)
    }

    /// 记录作答，揭晓后无效
    pub fn select_answer(&self, index: usize, option_key: &str) -> bool {
        self.state().select_answer(index, option_key)
    }

    /// 算分、保存成绩并揭晓答案
    ///
    /// 保存失败只记录日志，不影响揭晓
    pub async fn submit_and_reveal(&self) -> AppResult<QuizReport> {
        let result = self.state().reveal(&self.job_id)?;
        info!(
            "[职位 {}] 📤 提交成绩 {}/{}",
            self.job_id, result.score, result.total_questions
        );

        let persisted = match self.backend.save_results(&result).await {
            Ok(()) => true,
            Err(e) => {
                warn!("[职位 {}] ⚠️ 成绩保存失败: {}", self.job_id, e);
                false
            }
        };

        let review = self.state().review();
        Ok(QuizReport {
            result,
            persisted,
            review,
        })
    }
}
