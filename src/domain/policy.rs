//! 도메인 정책(리뷰 프롬프트 구성 규칙).

use crate::domain::review::{ChatMessage, CompletionRequest, RunParameters};

/// 사용자 메시지 앞에 붙는 고정 문구. diff는 이 뒤에 그대로 이어 붙인다.
pub const USER_PROMPT_PREFIX: &str = "Here is my github PR changes.\n";

/// 기본 시스템 프롬프트(리뷰 지침 + 예시 리뷰).
pub const CODE_REVIEW_RULE_PROMPT: &str = r#"You are an experienced senior software engineer reviewing a GitHub pull request.
You will receive the unified diff of the pull request. Review only the changed lines and the context needed to understand them.

Guidelines:
- Focus on correctness first: logic errors, unhandled errors, race conditions, off-by-one mistakes, resource leaks.
- Point out security problems such as injection, leaked secrets, missing authorization checks, or unsafe deserialization.
- Mention performance issues only when the impact is concrete.
- Comment on readability and naming when it would genuinely help the next maintainer.
- Do not restate what the diff does line by line, and do not praise trivial changes.
- Quote the file name and the relevant snippet for every finding and suggest a concrete fix.
- If the change looks good, say so briefly instead of inventing problems.
- Answer in GitHub-flavored Markdown.

Example review:

## Summary
Adds retry handling to the HTTP client and a new configuration flag for the timeout.

## Findings
1. **`client/http.go`**: the retry loop never checks `ctx.Done()`, so a cancelled request keeps retrying.
   ```go
   for attempt := 0; attempt < maxRetries; attempt++ {
   ```
   Suggestion: return early when the context is cancelled.
2. **`config/config.go`**: `TimeoutSeconds` is parsed but never validated; a negative value disables the timeout.

## Verdict
Request changes: finding 1 can hang shutdown."#;

/// diff를 고정 문구 뒤에 그대로 붙여 사용자 메시지 본문을 만든다.
pub fn build_user_prompt(diff: &str) -> String {
    format!("{USER_PROMPT_PREFIX}{diff}")
}

/// 시스템 메시지, 사용자 메시지 순서의 2개 메시지 요청을 구성한다.
pub fn build_completion_request(params: &RunParameters) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            ChatMessage::system(params.system_prompt.clone()),
            ChatMessage::user(build_user_prompt(&params.diff)),
        ],
        model: params.model.clone(),
        sampling: params.sampling,
        choices: 1,
        stream: false,
    }
}
