//! 리뷰 실행 컨텍스트(설정/프롬프트/diff) 준비 단계.

use anyhow::{Context, Result};

use crate::application::config::Config;
use crate::application::usecases::review_pr::ReviewPrUseCase;
use crate::domain::review::RunOptions;

/// 리뷰 유스케이스 전 구간에서 공유되는 실행 상태.
pub(super) struct ExecutionContext {
    pub config: Config,
    pub system_prompt: String,
    pub diff: String,
}

/// 설정(자격 증명/PR 주소) 해석, 시스템 프롬프트 결정, diff 읽기까지 선행한다.
/// 여기서 실패하면 네트워크 호출은 한 번도 일어나지 않는다.
pub(super) async fn load_execution_context(
    use_case: &ReviewPrUseCase<'_>,
    options: &RunOptions,
) -> Result<ExecutionContext> {
    use_case.reporter.section("Load Config");
    let config = use_case
        .config_repo
        .load(options)
        .context("failed to load configuration")?;

    if let Some(target) = &config.target {
        use_case.reporter.kv("Target", &target.to_string());
    }
    use_case.reporter.kv("Addressing", config.repository_mode.code());

    let system_prompt = use_case
        .system_prompt_resolver
        .resolve(&config)
        .context("failed to resolve system prompt")?;
    match &config.prompt_file {
        Some(path) => use_case.reporter.kv("Prompt", &path.display().to_string()),
        None => use_case.reporter.kv("Prompt", "built-in"),
    }

    use_case.reporter.section("Load Diff");
    let diff_path = config.diff_path();
    use_case.reporter.kv("Diff File", &diff_path.display().to_string());
    let diff = use_case
        .diff_source
        .read_diff(&diff_path)
        .await
        .with_context(|| format!("error reading diff at {}", diff_path.display()))?;
    use_case.reporter.kv("Diff Bytes", &diff.len().to_string());

    Ok(ExecutionContext {
        config,
        system_prompt,
        diff,
    })
}
