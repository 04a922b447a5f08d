pub mod backend;
pub mod quiz_session;
pub mod quiz_state;

pub use backend::{HttpQuizBackend, QuizBackend};
pub use quiz_session::{QuizReport, QuizSession};
pub use quiz_state::{GenerationOutcome, GenerationTicket, QuestionReview, QuizPhase, QuizState};
