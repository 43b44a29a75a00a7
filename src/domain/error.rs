//! 리뷰 실행 중 구분이 필요한 도메인 오류.
//!
//! 설정 실수와 업스트림 API 실패를 운영자가 구분할 수 있도록
//! `anyhow` 체인 안에 그대로 담아 `downcast_ref`로 꺼낼 수 있게 한다.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// 필수 환경변수 누락
    #[error("{name} environment variable is not set")]
    MissingEnv { name: String },

    /// 숫자/URL 등 설정값 형식 오류
    #[error("invalid {name} value '{value}': {reason}")]
    InvalidSetting {
        name: String,
        value: String,
        reason: String,
    },

    #[error("invalid PR number '{value}': expected a positive base-10 integer")]
    InvalidPrNumber { value: String },

    #[error("invalid repository '{value}': expected exactly one '/' between owner and repo")]
    InvalidRepository { value: String },

    /// completion 응답에 후보가 하나도 없음
    #[error("empty response: completion returned no choices")]
    EmptyCompletion,
}

impl ReviewError {
    pub fn missing_env(name: &str) -> Self {
        Self::MissingEnv {
            name: name.to_string(),
        }
    }

    pub fn invalid_setting(name: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// `anyhow` 오류 체인에서 첫 번째 `ReviewError`를 찾는다.
    pub fn find_in(err: &anyhow::Error) -> Option<&ReviewError> {
        err.chain().find_map(|e| e.downcast_ref::<ReviewError>())
    }

    /// 네트워크 호출 이전에 잡히는 설정 오류인지 여부.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_distinguished_from_empty_completion() {
        assert!(ReviewError::missing_env("GROQ_API_KEY").is_configuration());
        assert!(
            ReviewError::InvalidPrNumber {
                value: "abc".into()
            }
            .is_configuration()
        );
        assert!(!ReviewError::EmptyCompletion.is_configuration());
    }

    #[test]
    fn found_through_context_layers() {
        let err = anyhow::Error::new(ReviewError::EmptyCompletion)
            .context("error running review")
            .context("outer");
        assert_eq!(ReviewError::find_in(&err), Some(&ReviewError::EmptyCompletion));
        assert_eq!(ReviewError::find_in(&anyhow::anyhow!("github: 404")), None);
    }

    #[test]
    fn missing_env_message_names_the_variable() {
        let err = ReviewError::missing_env("GITHUB_TOKEN");
        assert_eq!(err.to_string(), "GITHUB_TOKEN environment variable is not set");
    }
}
