//! 프로세스 환경변수 스냅샷.
//!
//! 환경변수는 시작 시 한 번만 읽고, 이후에는 이 스냅샷을 명시적으로 전달한다.

use std::collections::HashMap;
use std::env;

use crate::domain::error::ReviewError;

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";
pub const GITHUB_PR_NUMBER: &str = "GITHUB_PR_NUMBER";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_REPOSITORY_OWNER: &str = "GITHUB_REPOSITORY_OWNER";
pub const GITHUB_REPOSITORY_NAME: &str = "GITHUB_REPOSITORY_NAME";
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const GROQ_MODEL: &str = "GROQ_MODEL";
pub const GROQ_MAX_TOKENS: &str = "GROQ_MAX_TOKENS";
pub const GROQ_TEMPERATURE: &str = "GROQ_TEMPERATURE";
pub const GROQ_TOP_P: &str = "GROQ_TOP_P";
pub const GROQ_API_BASE: &str = "GROQ_API_BASE";
pub const GROQ_REVIEW_PROMPT_FILE: &str = "GROQ_REVIEW_PROMPT_FILE";
pub const GROQ_REVIEW_CONFIG: &str = "GROQ_REVIEW_CONFIG";

#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// 현재 프로세스 환경을 복사한다. UTF-8이 아닌 값은 건너뛴다.
    pub fn from_process() -> Self {
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 값이 비어 있거나 공백뿐이면 설정되지 않은 것으로 본다.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require(&self, name: &str) -> Result<&str, ReviewError> {
        self.get(name).ok_or_else(|| ReviewError::missing_env(name))
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_unset() {
        let vars = EnvVars::from_pairs([(GROQ_API_KEY, "   "), (GITHUB_TOKEN, " ghp_x ")]);
        assert_eq!(vars.get(GROQ_API_KEY), None);
        assert_eq!(vars.get(GITHUB_TOKEN), Some("ghp_x"));
        assert_eq!(
            vars.require(GROQ_API_KEY).unwrap_err(),
            ReviewError::missing_env(GROQ_API_KEY)
        );
    }
}
