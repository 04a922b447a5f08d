//! 评分服务 - 业务能力层
//!
//! 只负责"算分"和"标记选项"，不关心流程

use crate::models::{AnswerSelection, Question};

/// 统计答对的题目数
///
/// 所选键与正确键完全相等（区分大小写）才算答对；没有作答的题目不计分。
/// 结果满足 `0 <= score <= questions.len()`。
pub fn score_answers(questions: &[Question], selection: &AnswerSelection) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| selection.get(*index) == Some(question.correct_option_key.as_str()))
        .count()
}

/// 揭晓后单个选项的标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
    Plain,
}

/// 计算选项标记
pub fn mark_option(question: &Question, option_key: &str, selected: Option<&str>) -> OptionMark {
    if option_key == question.correct_option_key {
        OptionMark::Correct
    } else if selected == Some(option_key) {
        OptionMark::Incorrect
    } else {
        OptionMark::Plain
    }
}
