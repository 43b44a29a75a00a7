//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::review::{
    CompletionRequest, CompletionResponse, PostedComment, PrComment, RunOptions,
};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self, options: &RunOptions) -> Result<Config>;
    fn inspect_pretty_json(&self, options: &RunOptions) -> Result<String>;
}

/// PR diff 원문을 읽어오는 포트.
#[async_trait]
pub trait DiffSource: Send + Sync {
    async fn read_diff(&self, path: &Path) -> Result<String>;
}

/// 설정에 맞는 시스템 프롬프트를 결정하는 포트.
pub trait SystemPromptResolver: Send + Sync {
    fn resolve(&self, config: &Config) -> Result<String>;
}

/// chat completion API 호출 포트.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn create_chat_completion(&self, request: &CompletionRequest)
    -> Result<CompletionResponse>;
}

/// API key/엔드포인트로 completion 클라이언트를 만드는 팩토리 포트.
pub trait CompletionClientFactory: Send + Sync {
    fn build(&self, api_key: &str, api_base: &str) -> Box<dyn CompletionClient>;
}

/// PR 코멘트 생성 포트.
#[async_trait]
pub trait CommentPublisher: Send + Sync {
    async fn create_comment(&self, comment: &PrComment) -> Result<PostedComment>;
}

/// 토큰/엔드포인트로 코멘트 게시 클라이언트를 만드는 팩토리 포트.
pub trait CommentPublisherFactory: Send + Sync {
    fn build(&self, token: &str, api_base: &str) -> Box<dyn CommentPublisher>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
