pub mod quiz_flow;
pub mod quiz_session;

pub use quiz_flow::QuizController;
pub use quiz_session::{SavedResult, Session};
