pub mod auth;
pub mod elections;
pub mod llm;
pub mod metrics_manager;
pub mod prompt;
pub mod session_manager;
