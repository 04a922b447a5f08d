//! 答题会话状态
//!
//! 纯内存状态，不做 IO。阶段只会前进：
//! `Idle → DescriptionLoaded → QuestionsLoaded → Revealed`，
//! 重新生成会把 `QuestionsLoaded` 整体替换为新的一轮。
//!
//! 每次生成请求领取一个递增的票据，只有最新票据的响应会被采用，
//! 过期响应（无论成功失败）直接丢弃。

use crate::error::{QuizError, GENERATION_FAILED_MESSAGE, MISSING_INPUT_MESSAGE};
use crate::models::{AnswerSelection, CandidateProfile, GeneratedQuiz, Question, ScoreResult};
use crate::services::scoring::{mark_option, score_answers, OptionMark};
use crate::services::ResumeFile;

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    DescriptionLoaded,
    QuestionsLoaded,
    Revealed,
}

/// 生成请求票据
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationTicket(u64);

/// 通过前置检查、可以发出的生成请求
#[derive(Debug)]
pub struct GenerationRequest<'a> {
    pub ticket: GenerationTicket,
    pub description: String,
    pub resume: &'a ResumeFile,
}

/// 生成请求的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// 结果已采用
    Applied { question_count: usize },
    /// 已有更新的请求，结果被丢弃
    Superseded,
}

/// 揭晓后单道题的复盘
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub index: usize,
    pub prompt: String,
    /// (选项键, 选项内容, 标记)
    pub options: Vec<(String, String, OptionMark)>,
    pub selected: Option<String>,
    pub correct_option_key: String,
    pub explanation: String,
}

impl QuestionReview {
    pub fn is_correct(&self) -> bool {
        self.selected.as_deref() == Some(self.correct_option_key.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizState {
    description: Option<String>,
    questions: Vec<Question>,
    candidate: CandidateProfile,
    selection: AnswerSelection,
    revealed: bool,
    latest_ticket: u64,
    pending: Option<GenerationTicket>,
    error: Option<String>,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置职位描述（会话内只加载一次）
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn candidate(&self) -> &CandidateProfile {
        &self.candidate
    }

    pub fn selection(&self) -> &AnswerSelection {
        &self.selection
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// 是否有生成请求在进行中（用于显示加载状态）
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// 当前展示给用户的错误
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.revealed {
            QuizPhase::Revealed
        } else if !self.questions.is_empty() {
            QuizPhase::QuestionsLoaded
        } else if self.description.is_some() {
            QuizPhase::DescriptionLoaded
        } else {
            QuizPhase::Idle
        }
    }

    /// 开始一次生成
    ///
    /// 缺少描述或简历时直接失败，题目等状态保持不变；
    /// 通过后清空上一轮的题目、候选人信息、作答和揭晓标记。
    pub fn begin_generation<'a>(
        &mut self,
        resume: Option<&'a ResumeFile>,
    ) -> Result<GenerationRequest<'a>, QuizError> {
        let description = self.description.as_deref().filter(|d| !d.is_empty());
        let (description, resume) = match (description, resume) {
            (Some(description), Some(resume)) => (description.to_string(), resume),
            _ => {
                self.error = Some(MISSING_INPUT_MESSAGE.to_string());
                return Err(QuizError::MissingInput);
            }
        };

        self.latest_ticket += 1;
        let ticket = GenerationTicket(self.latest_ticket);
        self.pending = Some(ticket);
        self.error = None;
        self.questions.clear();
        self.candidate = CandidateProfile::default();
        self.selection.clear();
        self.revealed = false;

        Ok(GenerationRequest {
            ticket,
            description,
            resume,
        })
    }

    /// 结束一次生成
    ///
    /// # 参数
    /// - `ticket`: 开始时领取的票据
    /// - `quiz`: 生成结果，`None` 表示失败
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        quiz: Option<GeneratedQuiz>,
    ) -> Result<GenerationOutcome, QuizError> {
        if ticket != GenerationTicket(self.latest_ticket) {
            return Ok(GenerationOutcome::Superseded);
        }
        self.pending = None;

        match quiz {
            Some(quiz) => {
                self.questions = quiz.questions;
                self.candidate = quiz.candidate;
                self.selection.clear();
                self.revealed = false;
                Ok(GenerationOutcome::Applied {
                    question_count: self.questions.len(),
                })
            }
            None => {
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                Err(QuizError::GenerationFailed)
            }
        }
    }

    /// 记录作答
    ///
    /// 揭晓后或序号越界时忽略，返回 `false`
    pub fn select_answer(&mut self, index: usize, option_key: &str) -> bool {
        if self.revealed || index >= self.questions.len() {
            return false;
        }
        self.selection.select(index, option_key);
        true
    }

    /// 计算成绩并标记为已揭晓
    pub fn reveal(&mut self, job_id: &str) -> Result<ScoreResult, QuizError> {
        if self.revealed {
            return Err(QuizError::AlreadyRevealed);
        }
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let result = ScoreResult {
            job_id: job_id.to_string(),
            name: self.candidate.name.clone(),
            email: self.candidate.email.clone(),
            phone: self.candidate.phone.clone(),
            score: score_answers(&self.questions, &self.selection),
            total_questions: self.questions.len(),
        };
        self.revealed = true;
        Ok(result)
    }

    /// 逐题复盘；未揭晓时所有选项都是 `Plain`
    pub fn review(&self) -> Vec<QuestionReview> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = self.selection.get(index);
                let options = question
                    .options
                    .iter()
                    .map(|(key, text)| {
                        let mark = if self.revealed {
                            mark_option(question, key, selected)
                        } else {
                            OptionMark::Plain
                        };
                        (key.clone(), text.clone(), mark)
                    })
                    .collect();
                QuestionReview {
                    index,
                    prompt: question.prompt.clone(),
                    options,
                    selected: selected.map(str::to_string),
                    correct_option_key: question.correct_option_key.clone(),
                    explanation: question.explanation.clone(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOptions;

    fn question(prompt: &str, correct: &str) -> Question {
        let options: QuestionOptions = ["A", "B", "C"]
            .iter()
            .map(|k| (k.to_string(), format!("{} {}", prompt, k)))
            .collect();
        Question {
            prompt: prompt.to_string(),
            options,
            correct_option_key: correct.to_string(),
            explanation: format!("because {}", correct),
        }
    }

    fn quiz(correct_keys: &[&str]) -> GeneratedQuiz {
        GeneratedQuiz {
            questions: correct_keys
                .iter()
                .enumerate()
                .map(|(i, k)| question(&format!("Q{}", i), k))
                .collect(),
            candidate: CandidateProfile {
                name: Some("Asha Rao".to_string()),
                email: Some("asha@example.com".to_string()),
                phone: Some("555-0100".to_string()),
                total_experience: Some("4".to_string()),
            },
        }
    }

    fn resume() -> ResumeFile {
        ResumeFile::from_bytes("resume.pdf", b"%PDF".to_vec()).unwrap()
    }

    fn loaded_state(correct_keys: &[&str]) -> QuizState {
        let mut state = QuizState::new();
        state.set_description("Backend role");
        let file = resume();
        let ticket = state.begin_generation(Some(&file)).unwrap().ticket;
        state.finish_generation(ticket, Some(quiz(correct_keys))).unwrap();
        state
    }

    #[test]
    fn test_phases_move_forward() {
        let mut state = QuizState::new();
        assert_eq!(state.phase(), QuizPhase::Idle);

        state.set_description("Backend role");
        assert_eq!(state.phase(), QuizPhase::DescriptionLoaded);

        let file = resume();
        let ticket = state.begin_generation(Some(&file)).unwrap().ticket;
        assert!(state.is_generating());
        state.finish_generation(ticket, Some(quiz(&["B", "A"]))).unwrap();
        assert!(!state.is_generating());
        assert_eq!(state.phase(), QuizPhase::QuestionsLoaded);

        state.reveal("job-1").unwrap();
        assert_eq!(state.phase(), QuizPhase::Revealed);
    }

    #[test]
    fn test_missing_input_leaves_questions_untouched() {
        let mut state = loaded_state(&["B", "A"]);
        state.select_answer(0, "B");

        assert_eq!(state.begin_generation(None).unwrap_err(), QuizError::MissingInput);
        assert_eq!(state.questions().len(), 2);
        assert_eq!(state.selection().get(0), Some("B"));
        assert_eq!(state.error(), Some(MISSING_INPUT_MESSAGE));

        let mut empty = QuizState::new();
        empty.set_description("");
        let file = resume();
        assert_eq!(
            empty.begin_generation(Some(&file)).unwrap_err(),
            QuizError::MissingInput
        );
        assert!(!empty.is_generating());
    }

    #[test]
    fn test_new_generation_resets_previous_attempt() {
        let mut state = loaded_state(&["B", "A"]);
        state.select_answer(0, "B");
        state.reveal("job-1").unwrap();

        let file = resume();
        let ticket = state.begin_generation(Some(&file)).unwrap().ticket;
        assert!(!state.is_revealed());
        assert!(state.selection().is_empty());
        assert!(state.questions().is_empty());

        let outcome = state.finish_generation(ticket, Some(quiz(&["C"]))).unwrap();
        assert_eq!(outcome, GenerationOutcome::Applied { question_count: 1 });
        assert_eq!(state.questions()[0].correct_option_key, "C");
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_failed_generation_leaves_empty_set() {
        let mut state = loaded_state(&["B", "A"]);
        let file = resume();
        let ticket = state.begin_generation(Some(&file)).unwrap().ticket;

        assert_eq!(
            state.finish_generation(ticket, None).unwrap_err(),
            QuizError::GenerationFailed
        );
        assert!(state.questions().is_empty());
        assert!(!state.is_revealed());
        assert_eq!(state.error(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(state.phase(), QuizPhase::DescriptionLoaded);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = QuizState::new();
        state.set_description("Backend role");
        let file = resume();

        let first = state.begin_generation(Some(&file)).unwrap().ticket;
        let second = state.begin_generation(Some(&file)).unwrap().ticket;
        assert!(second > first);

        let outcome = state.finish_generation(second, Some(quiz(&["A", "A"]))).unwrap();
        assert_eq!(outcome, GenerationOutcome::Applied { question_count: 2 });

        assert_eq!(
            state.finish_generation(first, Some(quiz(&["C"]))).unwrap(),
            GenerationOutcome::Superseded
        );
        assert_eq!(
            state.finish_generation(first, None).unwrap(),
            GenerationOutcome::Superseded
        );
        assert_eq!(state.questions().len(), 2);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_select_answer_overwrites_and_ignores_out_of_range() {
        let mut state = loaded_state(&["B", "A"]);
        assert!(state.select_answer(1, "A"));
        assert!(state.select_answer(1, "C"));
        assert_eq!(state.selection().get(1), Some("C"));

        assert!(!state.select_answer(2, "A"));
        assert_eq!(state.selection().len(), 1);

        // 不存在的选项键也会被记录
        assert!(state.select_answer(0, "Z"));
        assert_eq!(state.selection().get(0), Some("Z"));
    }

    #[test]
    fn test_selection_frozen_after_reveal() {
        let mut state = loaded_state(&["B", "A"]);
        state.select_answer(0, "B");
        state.reveal("job-1").unwrap();

        assert!(!state.select_answer(0, "A"));
        assert!(!state.select_answer(1, "A"));
        assert_eq!(state.selection().get(0), Some("B"));
        assert_eq!(state.selection().get(1), None);
    }

    #[test]
    fn test_reveal_scores_and_is_one_shot() {
        let mut state = loaded_state(&["B", "A"]);
        state.select_answer(0, "B");
        state.select_answer(1, "C");

        let result = state.reveal("job-1").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.total_questions, 2);
        assert_eq!(result.job_id, "job-1");
        assert_eq!(result.name.as_deref(), Some("Asha Rao"));
        assert_eq!(result.phone.as_deref(), Some("555-0100"));

        assert_eq!(state.reveal("job-1").unwrap_err(), QuizError::AlreadyRevealed);
    }

    #[test]
    fn test_reveal_without_questions() {
        let mut state = QuizState::new();
        state.set_description("Backend role");
        assert_eq!(state.reveal("job-1").unwrap_err(), QuizError::NoQuestions);
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_review_marks_after_reveal() {
        let mut state = loaded_state(&["B", "A"]);
        state.select_answer(0, "B");
        state.select_answer(1, "C");

        let before = state.review();
        assert!(before
            .iter()
            .flat_map(|r| r.options.iter())
            .all(|(_, _, mark)| *mark == OptionMark::Plain));

        state.reveal("job-1").unwrap();
        let review = state.review();
        assert!(review[0].is_correct());
        assert!(!review[1].is_correct());

        let marks: Vec<OptionMark> = review[1].options.iter().map(|(_, _, m)| *m).collect();
        assert_eq!(
            marks,
            vec![OptionMark::Correct, OptionMark::Plain, OptionMark::Incorrect]
        );
        assert_eq!(review[1].explanation, "because A");
    }
}
