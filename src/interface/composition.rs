//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::review_pr::ReviewPrUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, EnvConfigRepository, FileSystemPromptResolver, GitHubPublisherFactory,
    GroqClientFactory, WorkspaceDiffSource,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 환경변수는 여기서 한 번만 읽는다.
pub struct AppComposition {
    config_repo: EnvConfigRepository,
    diff_source: WorkspaceDiffSource,
    system_prompt_resolver: FileSystemPromptResolver,
    completion_factory: GroqClientFactory,
    publisher_factory: GitHubPublisherFactory,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_config_repo(EnvConfigRepository::from_process())
    }
}

impl AppComposition {
    /// 설정 저장소를 외부에서 주입한다.
    pub fn with_config_repo(config_repo: EnvConfigRepository) -> Self {
        Self {
            config_repo,
            diff_source: WorkspaceDiffSource,
            system_prompt_resolver: FileSystemPromptResolver,
            completion_factory: GroqClientFactory,
            publisher_factory: GitHubPublisherFactory,
            reporter: ConsoleReporter::new(),
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 리뷰 실행 유스케이스를 생성한다.
    pub fn review_usecase(&self) -> ReviewPrUseCase<'_> {
        ReviewPrUseCase {
            config_repo: &self.config_repo,
            diff_source: &self.diff_source,
            system_prompt_resolver: &self.system_prompt_resolver,
            completion_factory: &self.completion_factory,
            publisher_factory: &self.publisher_factory,
            reporter: &self.reporter,
        }
    }
}
