//! 설정 값(env/파일/CLI)을 실제 런타임 설정으로 해석하는 규칙.
//!
//! 우선순위: 내장 기본값 < 설정 파일 < 환경변수 < CLI 덮어쓰기.

use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::application::config::{
    Config, DEFAULT_DIFF_FILE, DEFAULT_GITHUB_API_BASE, DEFAULT_GROQ_API_BASE, DEFAULT_MODEL,
    FileConfig,
};
use crate::domain::error::ReviewError;
use crate::domain::review::{DEFAULT_TEMPERATURE, DEFAULT_TOP_P, RunOptions, SamplingParams};
use crate::domain::target::RepositoryMode;

use super::addressing::{resolve_target, select_addressing};
use super::env::{
    EnvVars, GITHUB_API_URL, GITHUB_TOKEN, GITHUB_WORKSPACE, GROQ_API_BASE, GROQ_API_KEY,
    GROQ_MAX_TOKENS, GROQ_MODEL, GROQ_REVIEW_PROMPT_FILE, GROQ_TEMPERATURE, GROQ_TOP_P,
};

/// 네트워크 호출 전에 자격 증명, PR 주소, 숫자 설정을 모두 확정한다.
pub(crate) fn resolve_config(
    vars: &EnvVars,
    file: &FileConfig,
    options: &RunOptions,
) -> Result<Config, ReviewError> {
    let defaults = &file.defaults;
    let overrides = &options.overrides;
    let posts_comment = options.output.posts_comment();

    let groq_api_key = vars.require(GROQ_API_KEY)?.to_string();
    let github_token = if posts_comment {
        Some(vars.require(GITHUB_TOKEN)?.to_string())
    } else {
        vars.get(GITHUB_TOKEN).map(ToString::to_string)
    };

    let configured_mode = match (overrides.repository_mode, defaults.repository_mode.as_deref()) {
        (Some(mode), _) => mode,
        (None, Some(raw)) => RepositoryMode::from_str(raw)
            .map_err(|reason| ReviewError::invalid_setting("repository_mode", raw, reason))?,
        (None, None) => RepositoryMode::Auto,
    };

    let (repository_mode, target) = if posts_comment {
        let addressing = select_addressing(configured_mode, vars);
        let target = resolve_target(addressing.as_ref(), vars)?;
        (addressing.mode(), Some(target))
    } else {
        (configured_mode, None)
    };

    let workspace = vars
        .get(GITHUB_WORKSPACE)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let diff_file = overrides
        .diff_file
        .clone()
        .or_else(|| defaults.diff_file.clone())
        .unwrap_or_else(|| DEFAULT_DIFF_FILE.to_string());

    let model = overrides
        .model
        .clone()
        .or_else(|| vars.get(GROQ_MODEL).map(ToString::to_string))
        .or_else(|| defaults.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let sampling = resolve_sampling(vars, file, options)?;

    let prompt_file = overrides
        .prompt_file
        .clone()
        .or_else(|| vars.get(GROQ_REVIEW_PROMPT_FILE).map(PathBuf::from))
        .or_else(|| defaults.prompt_file.as_deref().map(PathBuf::from));

    let groq_api_base = resolve_api_base(
        GROQ_API_BASE,
        vars.get(GROQ_API_BASE).or(defaults.groq_api_base.as_deref()),
        DEFAULT_GROQ_API_BASE,
    )?;
    let github_api_base = resolve_api_base(
        GITHUB_API_URL,
        vars.get(GITHUB_API_URL).or(defaults.github_api_base.as_deref()),
        DEFAULT_GITHUB_API_BASE,
    )?;

    Ok(Config {
        groq_api_key,
        github_token,
        workspace,
        diff_file,
        model,
        sampling,
        system_prompt: defaults.system_prompt.clone(),
        prompt_file,
        groq_api_base,
        github_api_base,
        repository_mode,
        target,
    })
}

fn resolve_sampling(
    vars: &EnvVars,
    file: &FileConfig,
    options: &RunOptions,
) -> Result<SamplingParams, ReviewError> {
    let defaults = &file.defaults;
    let overrides = &options.overrides;

    let max_tokens = match overrides.max_tokens {
        Some(v) => Some(v),
        None => match vars.get(GROQ_MAX_TOKENS) {
            Some(raw) => Some(parse_setting::<u32>(GROQ_MAX_TOKENS, raw)?),
            None => defaults.max_tokens,
        },
    }
    // 0은 "API 기본값 사용"과 같다.
    .filter(|v| *v > 0);

    let temperature = match overrides.temperature {
        Some(v) => v,
        None => match vars.get(GROQ_TEMPERATURE) {
            Some(raw) => parse_setting::<f32>(GROQ_TEMPERATURE, raw)?,
            None => defaults.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        },
    };
    check_range("temperature", temperature, 0.0, 2.0)?;

    let top_p = match overrides.top_p {
        Some(v) => v,
        None => match vars.get(GROQ_TOP_P) {
            Some(raw) => parse_setting::<f32>(GROQ_TOP_P, raw)?,
            None => defaults.top_p.unwrap_or(DEFAULT_TOP_P),
        },
    };
    check_range("top_p", top_p, 0.0, 1.0)?;

    Ok(SamplingParams {
        max_tokens,
        temperature,
        top_p,
    })
}

fn parse_setting<T>(name: &str, raw: &str) -> Result<T, ReviewError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|err| ReviewError::invalid_setting(name, raw, err.to_string()))
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<(), ReviewError> {
    if value.is_finite() && (min..=max).contains(&value) {
        return Ok(());
    }
    Err(ReviewError::invalid_setting(
        name,
        &value.to_string(),
        format!("must be between {min} and {max}"),
    ))
}

fn resolve_api_base(name: &str, raw: Option<&str>, default: &str) -> Result<String, ReviewError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default.to_string());
    };

    let parsed = Url::parse(raw)
        .map_err(|err| ReviewError::invalid_setting(name, raw, err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ReviewError::invalid_setting(
            name,
            raw,
            "expected an http(s) URL",
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
