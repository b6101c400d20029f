// Rust guideline compliant 2026-10-12

//! Replykit demonstration server and envelope inspector.

pub mod inspect;
pub mod logging;
pub mod routes;

pub use inspect::{summarize, Summary};
pub use routes::router;
