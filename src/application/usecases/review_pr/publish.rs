//! 리뷰 결과를 PR 코멘트로 게시하는 단계.

use anyhow::{Context, Result};

use crate::application::config::Config;
use crate::application::usecases::review_pr::ReviewPrUseCase;
use crate::domain::review::{PostedComment, PrComment};

pub(super) async fn publish_review(
    use_case: &ReviewPrUseCase<'_>,
    config: &Config,
    review: &str,
) -> Result<PostedComment> {
    let token = config
        .github_token
        .as_deref()
        .context("internal error: missing GitHub token for comment mode")?;
    let target = config
        .target
        .clone()
        .context("internal error: missing PR target for comment mode")?;

    use_case.reporter.section("Post Comment");
    use_case
        .reporter
        .status("GitHub", &format!("creating comment on {target}"));

    let publisher = use_case
        .publisher_factory
        .build(token, &config.github_api_base);
    let posted = publisher
        .create_comment(&PrComment {
            target,
            body: review.to_string(),
        })
        .await?;

    use_case.reporter.section("Done");
    match &posted.url {
        Some(url) => use_case.reporter.status("GitHub", &format!("comment posted: {url}")),
        None => use_case
            .reporter
            .status("GitHub", &format!("comment posted (id {})", posted.id)),
    }
    Ok(posted)
}
