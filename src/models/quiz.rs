use crate::models::lenient::deserialize_opt_string;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// 生成服务返回的单道选择题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    /// 选项键（如 "A"）→ 选项内容，保持服务端顺序
    pub options: QuestionOptions,
    #[serde(rename = "correct_answer")]
    pub correct_option_key: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }
}

/// 按服务端返回顺序保存的选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionOptions(Vec<(String, String)>);

impl QuestionOptions {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }
}

/// 重复的键以最后一次出现的内容为准，位置保持第一次出现的位置
impl FromIterator<(String, String)> for QuestionOptions {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut options = QuestionOptions::default();
        for (key, text) in iter {
            match options.0.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = text,
                None => options.0.push((key, text)),
            }
        }
        options
    }
}

impl Serialize for QuestionOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, text) in &self.0 {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuestionOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = QuestionOptions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of option keys to option texts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(4));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

/// 从简历中提取的候选人信息，客户端不做校验
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub total_experience: Option<String>,
}

/// `POST /generate-mcqs` 的响应
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedQuiz {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(rename = "candidate_details", default, deserialize_with = "deserialize_candidate")]
    pub candidate: CandidateProfile,
}

/// `candidate_details` 可能缺失或为 null，两者都视为空信息
fn deserialize_candidate<'de, D>(deserializer: D) -> Result<CandidateProfile, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<CandidateProfile>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 题目序号（从 0 开始）→ 所选选项键
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSelection(BTreeMap<usize, String>);

impl AnswerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录选择，覆盖之前的选项
    pub fn select(&mut self, index: usize, option_key: impl Into<String>) {
        self.0.insert(index, option_key.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(index, key)| (*index, key.as_str()))
    }
}

impl FromIterator<(usize, String)> for AnswerSelection {
    fn from_iter<T: IntoIterator<Item = (usize, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `POST /save-results` 的请求体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub score: usize,
    pub total_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_quiz_from_service_json() {
        let quiz: GeneratedQuiz = serde_json::from_str(
            r#"{
                "questions": [
                    {"question": "What does `?` do?", "options": {"A": "Panics", "B": "Propagates errors"},
                     "correct_answer": "B", "explanation": "It returns early on Err."}
                ],
                "candidate_details": {"name": "Asha Rao", "email": "asha@example.com", "phone": 9876543210, "total_experience": 4.5}
            }"#,
        )
        .unwrap();
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_option_key, "B");
        assert!(quiz.questions[0].has_option("A"));
        assert_eq!(quiz.candidate.phone.as_deref(), Some("9876543210"));
        assert_eq!(quiz.candidate.total_experience.as_deref(), Some("4.5"));
    }

    #[test]
    fn test_candidate_details_may_be_missing_or_null() {
        let quiz: GeneratedQuiz = serde_json::from_str(r#"{"questions": []}"#).unwrap();
        assert_eq!(quiz.candidate, CandidateProfile::default());

        let quiz: GeneratedQuiz =
            serde_json::from_str(r#"{"questions": [], "candidate_details": {"name": null}}"#).unwrap();
        assert!(quiz.candidate.name.is_none());
    }

    #[test]
    fn test_null_candidate_details_keeps_questions() {
        let quiz: GeneratedQuiz = serde_json::from_str(
            r#"{
                "questions": [
                    {"question": "Which trait enables `?` conversion?", "options": {"A": "From", "B": "Into"},
                     "correct_answer": "A"}
                ],
                "candidate_details": null
            }"#,
        )
        .unwrap();
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.candidate, CandidateProfile::default());
    }

    #[test]
    fn test_options_keep_server_order() {
        let question: Question = serde_json::from_str(
            r#"{"question": "Pick", "options": {"D": "four", "A": "one", "C": "three"}, "correct_answer": "A"}"#,
        )
        .unwrap();
        let keys: Vec<&str> = question.options.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["D", "A", "C"]);
        assert_eq!(question.options.get("C"), Some("three"));
        assert!(!question.has_option("B"));

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["options"]["D"], "four");
    }

    #[test]
    fn test_score_result_wire_names() {
        let result = ScoreResult {
            job_id: "66a1".to_string(),
            name: Some("Asha Rao".to_string()),
            email: None,
            phone: None,
            score: 1,
            total_questions: 2,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["jobId"], "66a1");
        assert_eq!(value["totalQuestions"], 2);
        assert!(value.get("email").is_none());
    }

    #[test]
    fn test_selection_overwrites() {
        let mut selection = AnswerSelection::new();
        selection.select(0, "A");
        selection.select(0, "C");
        assert_eq!(selection.get(0), Some("C"));
        assert_eq!(selection.len(), 1);
    }
}
