//! completion 클라이언트 팩토리 포트 구현 어댑터.

use crate::application::ports::{CompletionClient, CompletionClientFactory};
use crate::infrastructure::providers::GroqClient;

/// Groq API 클라이언트를 생성하는 팩토리 어댑터.
pub struct GroqClientFactory;

impl CompletionClientFactory for GroqClientFactory {
    fn build(&self, api_key: &str, api_base: &str) -> Box<dyn CompletionClient> {
        Box::new(GroqClient::new(api_key, api_base))
    }
}
