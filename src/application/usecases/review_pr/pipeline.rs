//! 리뷰 파이프라인: 2개 메시지 요청 구성 → completion 호출 → 첫 후보 추출.

use anyhow::{Context, Result};

use crate::application::ports::{CompletionClientFactory, Reporter};
use crate::domain::policy::build_completion_request;
use crate::domain::review::{RunParameters, TokenUsage};

pub struct ReviewPipeline<'a> {
    pub completion_factory: &'a dyn CompletionClientFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ReviewPipeline<'a> {
    /// completion API를 한 번 호출하고 첫 번째 후보의 텍스트를 가공 없이 반환한다.
    pub async fn run(&self, params: &RunParameters) -> Result<String> {
        let request = build_completion_request(params);
        tracing::debug!(
            model = %request.model,
            diff_bytes = params.diff.len(),
            "built completion request"
        );

        let client = self
            .completion_factory
            .build(&params.api_key, &params.api_base);

        self.reporter.status("Groq", "requesting chat completion");
        let response = client
            .create_chat_completion(&request)
            .await
            .context("error creating chat completion")?;

        self.reporter.status(
            "Groq",
            &format!(
                "received {} choice(s), {}",
                response.choices.len(),
                format_usage(&response.usage)
            ),
        );

        if let Some(model) = &response.model {
            self.reporter.kv("Served By", model);
        }
        if let Some(first) = response.choices.first() {
            let reason = first.finish_reason.as_deref().unwrap_or("-");
            tracing::debug!(index = first.index, finish_reason = reason, "using first choice");
            self.reporter.kv("Finish", reason);
            if reason == "length" {
                self.reporter
                    .status("Groq", "review was cut off by the max_tokens limit");
            }
        }

        let review = response.into_first_choice()?;
        Ok(review)
    }
}

fn format_usage(usage: &TokenUsage) -> String {
    let show = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
    format!(
        "tokens in={} out={} total={}",
        show(usage.prompt_tokens),
        show(usage.completion_tokens),
        show(usage.total_tokens)
    )
}
