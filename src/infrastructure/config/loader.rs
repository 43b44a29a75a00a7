//! 설정 파일 탐색/병합 로더.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::application::config::FileConfig;

use super::env::{EnvVars, GROQ_REVIEW_CONFIG};

/// 병합 대상 설정 파일 경로. `required`이면 파일이 없을 때 실패한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath {
    pub path: PathBuf,
    pub required: bool,
}

impl ConfigPath {
    /// 없으면 건너뛰는 탐색 경로.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    /// 사용자가 명시한 경로. 반드시 존재해야 한다.
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: FileConfig,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 주어진 경로를 순서대로 읽어 JSON 설정을 병합한다.
/// 선택 경로의 파일이 없으면 건너뛰고, 필수 경로의 파일이 없으면 실패한다.
pub(crate) fn load_merged_config(paths: &[ConfigPath]) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = FileConfig::default();
    let mut loaded_paths = Vec::new();

    for entry in paths {
        let path = &entry.path;
        if !path.exists() {
            if entry.required {
                bail!(
                    "failed to read config at {}: file does not exist",
                    path.display()
                );
            }
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: FileConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        tracing::debug!(path = %path.display(), "loaded config file");
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths.iter().map(|p| p.path.clone()).collect(),
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
/// `GROQ_REVIEW_CONFIG`로 지정한 경로만 필수로 취급한다.
pub fn config_paths(vars: &EnvVars) -> Vec<ConfigPath> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![ConfigPath::optional("/etc/groq-review/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(ConfigPath::optional(
            base.join("groq-review").join("config.json"),
        ));
    }

    paths.push(ConfigPath::optional(".groq-review/config.json"));

    if let Some(path) = vars.get(GROQ_REVIEW_CONFIG) {
        paths.push(ConfigPath::required(Path::new(path)));
    }

    dedup_paths(paths)
}

/// 같은 경로가 여러 번 나오면 첫 위치를 유지하되 필수 여부는 합친다.
fn dedup_paths(paths: Vec<ConfigPath>) -> Vec<ConfigPath> {
    let mut out: Vec<ConfigPath> = Vec::new();
    for p in paths {
        match out.iter_mut().find(|seen| seen.path == p.path) {
            Some(seen) => seen.required |= p.required,
            None => out.push(p),
        }
    }
    out
}
