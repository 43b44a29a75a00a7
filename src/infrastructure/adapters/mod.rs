//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod completion_factory;
mod config_repository;
mod diff_source;
mod publisher_factory;
mod reporter;
mod system_prompt_resolver;

pub use completion_factory::GroqClientFactory;
pub use config_repository::EnvConfigRepository;
pub use diff_source::WorkspaceDiffSource;
pub use publisher_factory::GitHubPublisherFactory;
pub use reporter::ConsoleReporter;
pub use system_prompt_resolver::FileSystemPromptResolver;
