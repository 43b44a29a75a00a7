//! PR diff 리뷰 실행의 전체 오케스트레이션 유스케이스.

mod context;
mod pipeline;
mod publish;


use anyhow::{Context, Result};

use crate::application::ports::{
    CommentPublisherFactory, CompletionClientFactory, ConfigRepository, DiffSource, Reporter,
    SystemPromptResolver,
};
use crate::domain::review::{ReviewOutcome, RunOptions, RunParameters};

use context::load_execution_context;
use publish::publish_review;

pub use pipeline::ReviewPipeline;

/// 설정 로딩부터 diff 읽기, completion 호출, 코멘트 게시까지 전체 흐름을 조율한다.
pub struct ReviewPrUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub diff_source: &'a dyn DiffSource,
    pub system_prompt_resolver: &'a dyn SystemPromptResolver,
    pub completion_factory: &'a dyn CompletionClientFactory,
    pub publisher_factory: &'a dyn CommentPublisherFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ReviewPrUseCase<'a> {
    /// 리뷰 본 실행 진입점.
    /// 각 단계는 앞 단계가 끝난 뒤에만 시작하며, 첫 실패에서 오류를 돌려준다.
    pub async fn execute(&self, options: RunOptions) -> Result<ReviewOutcome> {
        self.reporter.section("Session");
        self.reporter.kv(
            "Mode",
            if options.output.posts_comment() {
                "post-comment"
            } else {
                "stdout"
            },
        );

        let ctx = load_execution_context(self, &options).await?;

        self.reporter.section("Review");
        self.reporter.kv("Model", &ctx.config.model);
        let params = RunParameters {
            api_key: ctx.config.groq_api_key.clone(),
            api_base: ctx.config.groq_api_base.clone(),
            diff: ctx.diff,
            model: ctx.config.model.clone(),
            system_prompt: ctx.system_prompt,
            sampling: ctx.config.sampling,
        };

        let pipeline = ReviewPipeline {
            completion_factory: self.completion_factory,
            reporter: self.reporter,
        };
        let review = pipeline
            .run(&params)
            .await
            .context("error running review")?;

        if !options.output.posts_comment() {
            self.reporter.section("Review Output");
            self.reporter.raw(&review);
            return Ok(ReviewOutcome {
                review,
                comment: None,
            });
        }

        match publish_review(self, &ctx.config, &review).await {
            Ok(comment) => Ok(ReviewOutcome {
                review,
                comment: Some(comment),
            }),
            Err(err) => {
                // 게시 실패 시에도 계산된 리뷰는 버리지 않는다.
                tracing::warn!(bytes = review.len(), "comment was not posted; printing review");
                self.reporter.section("Unposted Review");
                self.reporter.raw(&review);
                Err(err.context("error creating comment"))
            }
        }
    }
}
