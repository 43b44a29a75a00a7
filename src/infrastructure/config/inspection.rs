//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::env::{EnvVars, GITHUB_TOKEN, GROQ_API_KEY};
use super::loader::LoadedConfig;
use super::resolve::resolve_config;
use crate::application::config::{Config, DefaultsConfig};
use crate::domain::review::RunOptions;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub credentials: CredentialInspection,
    pub effective: Option<EffectiveSettings>,
    /// 해석 실패 시 오류 메시지
    pub error: Option<String>,
}

/// 자격 증명은 값 대신 존재 여부만 보여준다.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialInspection {
    pub groq_api_key_set: bool,
    pub github_token_set: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: f32,
    pub top_p: f32,
    pub diff_path: String,
    pub prompt_source: String,
    pub groq_api_base: String,
    pub github_api_base: String,
    pub repository_mode: String,
    pub target: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn build(loaded: LoadedConfig, vars: &EnvVars, options: &RunOptions) -> Self {
        let (effective, error) = match resolve_config(vars, &loaded.config, options) {
            Ok(config) => (Some(EffectiveSettings::from_config(&config)), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: loaded.config.defaults,
            credentials: CredentialInspection {
                groq_api_key_set: vars.is_set(GROQ_API_KEY),
                github_token_set: vars.is_set(GITHUB_TOKEN),
            },
            effective,
            error,
        }
    }
}

impl EffectiveSettings {
    fn from_config(config: &Config) -> Self {
        let prompt_source = match (&config.prompt_file, &config.system_prompt) {
            (Some(path), _) => format!("file:{}", path.display()),
            (None, Some(_)) => "config".to_string(),
            (None, None) => "built-in".to_string(),
        };

        Self {
            model: config.model.clone(),
            max_tokens: config.sampling.max_tokens,
            temperature: config.sampling.temperature,
            top_p: config.sampling.top_p,
            diff_path: config.diff_path().display().to_string(),
            prompt_source,
            groq_api_base: config.groq_api_base.clone(),
            github_api_base: config.github_api_base.clone(),
            repository_mode: config.repository_mode.code().to_string(),
            target: config.target.as_ref().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::FileConfig;

    fn loaded() -> LoadedConfig {
        LoadedConfig {
            config: FileConfig::default(),
            searched_paths: Vec::new(),
            loaded_paths: Vec::new(),
        }
    }

    #[test]
    fn credentials_are_never_serialized() {
        let vars = EnvVars::from_pairs([
            ("GROQ_API_KEY", "gsk_secret"),
            ("GITHUB_TOKEN", "ghp_secret"),
            ("GITHUB_REPOSITORY", "octo/hello"),
            ("GITHUB_PR_NUMBER", "5"),
        ]);
        let inspection = ConfigInspection::build(loaded(), &vars, &RunOptions::default());
        let json = serde_json::to_string(&inspection).unwrap();

        assert!(!json.contains("gsk_secret"));
        assert!(!json.contains("ghp_secret"));
        assert!(inspection.credentials.groq_api_key_set);
        assert_eq!(
            inspection.effective.unwrap().target.as_deref(),
            Some("octo/hello#5")
        );
    }

    #[test]
    fn resolution_errors_are_reported_instead_of_failing() {
        let vars = EnvVars::default();
        let inspection = ConfigInspection::build(loaded(), &vars, &RunOptions::default());
        assert!(inspection.effective.is_none());
        assert_eq!(
            inspection.error.as_deref(),
            Some("GROQ_API_KEY environment variable is not set")
        );
    }
}
