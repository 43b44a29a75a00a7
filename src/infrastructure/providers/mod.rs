//! completion API provider 모듈.

mod api_runner;
pub mod groq;

pub use api_runner::{build_api_client, send_json};
pub use groq::GroqClient;
