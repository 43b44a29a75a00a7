//! 적용 중인 설정(환경변수 + 설정 파일 + CLI 덮어쓰기)을 확인하는 유스케이스.

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::domain::review::RunOptions;

/// 현재 적용 중인 설정을 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 설정 점검 결과 문자열을 생성한다. 자격 증명은 존재 여부만 노출한다.
    pub fn execute(&self, options: &RunOptions) -> Result<String> {
        self.config_repo.inspect_pretty_json(options)
    }
}
