//! 실행 설정 로딩 모듈.
//! JSON 설정 파일을 우선순위대로 병합한 뒤 환경변수 스냅샷과 CLI 덮어쓰기를 적용한다.

mod addressing;
pub mod env;
mod inspection;
mod loader;
mod resolve;

use anyhow::Result;

use crate::application::config::Config;
use crate::domain::review::RunOptions;

pub use addressing::{
    CombinedRepository, RepositoryAddressing, SplitOwnerName, resolve_target, select_addressing,
};
pub use env::EnvVars;
pub use inspection::{ConfigInspection, CredentialInspection, EffectiveSettings};
pub use loader::{ConfigPath, config_paths};

/// 병합된 설정 파일 + 환경변수로 최종 실행 설정을 구성한다.
pub fn load(vars: &EnvVars, paths: &[ConfigPath], options: &RunOptions) -> Result<Config> {
    let loaded = loader::load_merged_config(paths)?;
    Ok(resolve::resolve_config(vars, &loaded.config, options)?)
}

/// 디버깅/진단용 설정 정보를 구성한다.
pub fn inspect(vars: &EnvVars, paths: &[ConfigPath], options: &RunOptions) -> Result<ConfigInspection> {
    let loaded = loader::load_merged_config(paths)?;
    Ok(ConfigInspection::build(loaded, vars, options))
}

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json(
    vars: &EnvVars,
    paths: &[ConfigPath],
    options: &RunOptions,
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&inspect(vars, paths, options)?)?)
}
