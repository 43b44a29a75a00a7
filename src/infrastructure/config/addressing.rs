//! 저장소 식별 전략.
//!
//! `"owner/repo"` 결합 문자열과 owner/name 분리 값 두 가지 규약을 지원하며,
//! 실행 시작 시 한 번만 선택한다.

use crate::domain::error::ReviewError;
use crate::domain::target::{PullRequestRef, RepositoryMode, RepositoryRef, parse_pr_number};

use super::env::{
    EnvVars, GITHUB_PR_NUMBER, GITHUB_REPOSITORY, GITHUB_REPOSITORY_NAME, GITHUB_REPOSITORY_OWNER,
};

pub trait RepositoryAddressing: Send + Sync {
    fn mode(&self) -> RepositoryMode;
    fn resolve(&self, vars: &EnvVars) -> Result<RepositoryRef, ReviewError>;
}

/// `GITHUB_REPOSITORY="owner/repo"`
pub struct CombinedRepository;

impl RepositoryAddressing for CombinedRepository {
    fn mode(&self) -> RepositoryMode {
        RepositoryMode::Combined
    }

    fn resolve(&self, vars: &EnvVars) -> Result<RepositoryRef, ReviewError> {
        RepositoryRef::parse_combined(vars.require(GITHUB_REPOSITORY)?)
    }
}

/// `GITHUB_REPOSITORY_OWNER` + `GITHUB_REPOSITORY_NAME`
pub struct SplitOwnerName;

impl RepositoryAddressing for SplitOwnerName {
    fn mode(&self) -> RepositoryMode {
        RepositoryMode::Split
    }

    fn resolve(&self, vars: &EnvVars) -> Result<RepositoryRef, ReviewError> {
        let owner = vars.require(GITHUB_REPOSITORY_OWNER)?;
        let name = vars.require(GITHUB_REPOSITORY_NAME)?;
        RepositoryRef::from_parts(owner, name)
    }
}

/// `Auto`는 `GITHUB_REPOSITORY_NAME`이 있으면 분리 방식, 없으면 결합 방식을 고른다.
/// (GitHub Actions는 `GITHUB_REPOSITORY_OWNER`를 항상 설정하므로 NAME으로 판별한다.)
pub fn select_addressing(mode: RepositoryMode, vars: &EnvVars) -> Box<dyn RepositoryAddressing> {
    match mode {
        RepositoryMode::Combined => Box::new(CombinedRepository),
        RepositoryMode::Split => Box::new(SplitOwnerName),
        RepositoryMode::Auto if vars.is_set(GITHUB_REPOSITORY_NAME) => Box::new(SplitOwnerName),
        RepositoryMode::Auto => Box::new(CombinedRepository),
    }
}

/// 저장소 + PR 번호로 코멘트 대상을 확정한다.
pub fn resolve_target(
    addressing: &dyn RepositoryAddressing,
    vars: &EnvVars,
) -> Result<PullRequestRef, ReviewError> {
    let repository = addressing.resolve(vars)?;
    let number = parse_pr_number(vars.require(GITHUB_PR_NUMBER)?)?;
    Ok(PullRequestRef { repository, number })
}
