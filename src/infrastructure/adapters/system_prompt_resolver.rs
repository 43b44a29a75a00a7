//! 시스템 프롬프트 해석 포트 구현.

use std::fs;

use anyhow::{Context, Result, bail};

use crate::application::config::Config;
use crate::application::ports::SystemPromptResolver;
use crate::domain::policy::CODE_REVIEW_RULE_PROMPT;

/// 프롬프트 파일 > 설정의 `system_prompt` > 내장 리뷰 지침 순으로 결정한다.
pub struct FileSystemPromptResolver;

impl SystemPromptResolver for FileSystemPromptResolver {
    fn resolve(&self, config: &Config) -> Result<String> {
        if let Some(path) = &config.prompt_file {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read prompt file at {}", path.display()))?;
            // 공백만 있는 파일은 거부하고, 그 외에는 작성된 그대로 사용한다.
            if raw.trim().is_empty() {
                bail!("prompt file at {} is empty", path.display());
            }
            return Ok(raw);
        }

        if let Some(prompt) = config
            .system_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            return Ok(prompt.to_string());
        }

        Ok(CODE_REVIEW_RULE_PROMPT.to_string())
    }
}
