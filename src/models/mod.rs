pub mod auth;
pub mod job;
pub mod lenient;
pub mod quiz;

pub use auth::{LoginForm, LoginResponse, SignUpForm};
pub use job::{Job, JobDraft, JobEnvelope, JobMessage, JobStatus};
pub use quiz::{AnswerSelection, CandidateProfile, GeneratedQuiz, Question, QuestionOptions, ScoreResult};
