//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::review::SamplingParams;
use crate::domain::target::{PullRequestRef, RepositoryMode};

pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_DIFF_FILE: &str = "diff.txt";
pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// JSON 설정 파일 스키마.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FileConfig {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// completion 모델 식별자
    pub model: Option<String>,
    /// 최대 생성 토큰(0 또는 미지정이면 API 기본값)
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    /// 내장 프롬프트 대신 사용할 시스템 프롬프트
    pub system_prompt: Option<String>,
    /// 시스템 프롬프트 파일 경로(`system_prompt`보다 우선)
    pub prompt_file: Option<String>,
    /// workspace 기준 diff 파일 이름
    pub diff_file: Option<String>,
    /// 저장소 식별 방식(auto/combined/split)
    pub repository_mode: Option<String>,
    pub groq_api_base: Option<String>,
    pub github_api_base: Option<String>,
}

impl FileConfig {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: FileConfig) {
        self.defaults.merge_from(other.defaults);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.top_p.is_some() {
            self.top_p = other.top_p;
        }
        if other.system_prompt.is_some() {
            self.system_prompt = other.system_prompt;
        }
        if other.prompt_file.is_some() {
            self.prompt_file = other.prompt_file;
        }
        if other.diff_file.is_some() {
            self.diff_file = other.diff_file;
        }
        if other.repository_mode.is_some() {
            self.repository_mode = other.repository_mode;
        }
        if other.groq_api_base.is_some() {
            self.groq_api_base = other.groq_api_base;
        }
        if other.github_api_base.is_some() {
            self.github_api_base = other.github_api_base;
        }
    }
}

/// 시작 시 한 번 구성되어 유스케이스에 명시적으로 전달되는 실행 설정.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    /// 코멘트 게시 모드에서만 필수
    pub github_token: Option<String>,
    pub workspace: PathBuf,
    pub diff_file: String,
    pub model: String,
    pub sampling: SamplingParams,
    pub system_prompt: Option<String>,
    pub prompt_file: Option<PathBuf>,
    pub groq_api_base: String,
    pub github_api_base: String,
    pub repository_mode: RepositoryMode,
    /// 코멘트 게시 대상(표준 출력 모드에서는 없음)
    pub target: Option<PullRequestRef>,
}

impl Config {
    /// `<workspace>/<diff_file>` 경로.
    pub fn diff_path(&self) -> PathBuf {
        self.workspace.join(&self.diff_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_file_overrides_only_present_fields() {
        let mut base: FileConfig = serde_json::from_str(
            r#"{"defaults": {"model": "llama3-8b-8192", "temperature": 0.2, "diff_file": "pr.diff"}}"#,
        )
        .unwrap();
        let incoming: FileConfig =
            serde_json::from_str(r#"{"defaults": {"temperature": 0.5, "top_p": 0.8}}"#).unwrap();

        base.merge_from(incoming);

        assert_eq!(base.defaults.model.as_deref(), Some("llama3-8b-8192"));
        assert_eq!(base.defaults.temperature, Some(0.5));
        assert_eq!(base.defaults.top_p, Some(0.8));
        assert_eq!(base.defaults.diff_file.as_deref(), Some("pr.diff"));
    }

    #[test]
    fn empty_json_object_is_a_valid_config() {
        let parsed: FileConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.defaults.model.is_none());
    }
}
