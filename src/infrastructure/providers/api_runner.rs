//! HTTP API 호출 공용 유틸리티.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// API 호출용 기본 HTTP 클라이언트를 생성한다.
pub fn build_api_client() -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 표준화한다.
pub async fn send_json<T: DeserializeOwned>(
    scope: &str,
    action: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("{scope}: failed to {action}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("{scope}: failed to read {action} response body"))?;

    if !status.is_success() {
        bail!("{scope}: {action} failed ({status}): {body}");
    }

    serde_json::from_str(&body)
        .with_context(|| format!("{scope}: invalid JSON response while trying to {action}"))
}
