pub mod resume_file;
pub mod scoring;
pub mod validation;

pub use resume_file::ResumeFile;
pub use scoring::{mark_option, score_answers, OptionMark};
pub use validation::{validate_job_draft, validate_login, validate_signup, FieldErrors};
