pub mod auth_client;
pub mod http;
pub mod job_client;
pub mod mcq_client;

pub use auth_client::AuthClient;
pub use http::ApiClient;
pub use job_client::JobClient;
pub use mcq_client::McqClient;
