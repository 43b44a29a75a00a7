//! 리뷰 도메인 엔티티/값 객체.

use std::path::PathBuf;

use crate::domain::error::ReviewError;
use crate::domain::target::{PullRequestRef, RepositoryMode};

/// 리뷰 결과를 어디로 내보낼지 결정하는 실행 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// PR 코멘트로 게시
    #[default]
    Comment,
    /// 표준 출력으로만 출력(CLI 전용 모드)
    Stdout,
}

impl OutputMode {
    pub fn posts_comment(self) -> bool {
        matches!(self, Self::Comment)
    }
}

/// CLI에서 넘어온 설정 덮어쓰기 값. 지정된 항목만 환경변수/설정 파일보다 우선한다.
#[derive(Debug, Clone, Default)]
pub struct SettingOverrides {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub diff_file: Option<String>,
    pub prompt_file: Option<PathBuf>,
    pub repository_mode: Option<RepositoryMode>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub output: OutputMode,
    pub overrides: SettingOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;

/// 샘플링 파라미터. `max_tokens`가 없으면 API 기본값을 따른다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: Option<u32>,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub sampling: SamplingParams,
    pub choices: u32,
    pub stream: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChoice {
    pub index: u32,
    pub content: String,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
    pub usage: TokenUsage,
    pub model: Option<String>,
}

impl CompletionResponse {
    /// 첫 번째 후보의 텍스트를 가공 없이 꺼낸다. 후보가 없으면 `EmptyCompletion`.
    pub fn into_first_choice(self) -> Result<String, ReviewError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.content)
            .ok_or(ReviewError::EmptyCompletion)
    }
}

/// 리뷰 파이프라인 1회 실행에 필요한 입력값. 생성 후 변경하지 않는다.
#[derive(Debug, Clone)]
pub struct RunParameters {
    pub api_key: String,
    pub api_base: String,
    pub diff: String,
    pub model: String,
    pub system_prompt: String,
    pub sampling: SamplingParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrComment {
    pub target: PullRequestRef,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    pub id: String,
    pub url: Option<String>,
}

/// 리뷰 실행 결과. 게시하지 않은 모드에서는 `comment`가 비어 있다.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub review: String,
    pub comment: Option<PostedComment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(index: u32, content: &str) -> CompletionChoice {
        CompletionChoice {
            index,
            content: content.to_string(),
            finish_reason: Some("stop".to_string()),
        }
    }

    #[test]
    fn first_choice_is_returned_unmodified() {
        let response = CompletionResponse {
            choices: vec![choice(0, "  ## Review\n- looks fine  \n"), choice(1, "other")],
            ..CompletionResponse::default()
        };
        assert_eq!(
            response.into_first_choice().unwrap(),
            "  ## Review\n- looks fine  \n"
        );
    }

    #[test]
    fn empty_choices_is_an_explicit_error() {
        let err = CompletionResponse::default().into_first_choice().unwrap_err();
        assert_eq!(err, ReviewError::EmptyCompletion);
    }

    #[test]
    fn sampling_defaults_leave_max_tokens_to_the_api() {
        let sampling = SamplingParams::default();
        assert_eq!(sampling.max_tokens, None);
        assert_eq!(sampling.temperature, 0.7);
        assert_eq!(sampling.top_p, 0.9);
    }
}
