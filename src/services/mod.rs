pub mod scoring_service;
pub mod session_store;

pub use scoring_service::{compute_result, AgeBand, ScoringScale};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
