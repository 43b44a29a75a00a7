//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::domain::review::RunOptions;
use crate::infrastructure::config::{self, ConfigPath, EnvVars};

/// 환경변수 스냅샷 + JSON 설정 파일 기반 설정 저장소 어댑터.
pub struct EnvConfigRepository {
    vars: EnvVars,
    config_paths: Vec<ConfigPath>,
}

impl EnvConfigRepository {
    /// 현재 프로세스 환경과 기본 설정 파일 경로를 사용한다.
    pub fn from_process() -> Self {
        let vars = EnvVars::from_process();
        let config_paths = config::config_paths(&vars);
        Self { vars, config_paths }
    }

    /// 환경/설정 파일 경로를 직접 주입한다.
    pub fn new(vars: EnvVars, config_paths: Vec<ConfigPath>) -> Self {
        Self { vars, config_paths }
    }
}

impl ConfigRepository for EnvConfigRepository {
    fn load(&self, options: &RunOptions) -> Result<Config> {
        config::load(&self.vars, &self.config_paths, options)
    }

    fn inspect_pretty_json(&self, options: &RunOptions) -> Result<String> {
        config::inspect_pretty_json(&self.vars, &self.config_paths, options)
    }
}
