//! groq-review library root.
//! PR diff를 LLM으로 리뷰하고 PR 코멘트로 게시하는 계층(domain/application/infrastructure/interface)을 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::review::{ReviewOutcome, RunOptions};
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(options: RunOptions) -> Result<ReviewOutcome> {
    let composition = AppComposition::default();
    composition.review_usecase().execute(options).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(options: &RunOptions) -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute(options)
}
