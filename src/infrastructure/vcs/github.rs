//! GitHub issue/PR 코멘트 API 연동 구현.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::CommentPublisher;
use crate::domain::review::{PostedComment, PrComment};
use crate::domain::target::PullRequestRef;
use crate::infrastructure::providers::{build_api_client, send_json};

pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    /// 토큰과 API base(github.com 또는 Enterprise `/api/v3`)로 클라이언트를 생성한다.
    pub fn new(token: &str, api_base: &str) -> Self {
        Self::with_client(build_api_client(), token, api_base)
    }

    pub fn with_client(client: Client, token: &str, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn issue_comments_endpoint(&self, target: &PullRequestRef) -> String {
        // PR 일반 코멘트는 issue 코멘트 API를 사용한다.
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base, target.repository.owner, target.repository.name, target.number
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        self.client
            .request(method, url)
            .header("User-Agent", "groq-review")
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&self.token)
    }
}

#[derive(Debug, Deserialize)]
struct IssueCommentResponse {
    id: u64,
    #[serde(default)]
    html_url: Option<String>,
}

#[async_trait]
impl CommentPublisher for GitHubClient {
    async fn create_comment(&self, comment: &PrComment) -> Result<PostedComment> {
        let endpoint = self.issue_comments_endpoint(&comment.target);
        tracing::debug!(%endpoint, bytes = comment.body.len(), "creating PR comment");

        let request = self
            .request(Method::POST, endpoint)
            .json(&json!({ "body": comment.body }));
        let created: IssueCommentResponse = send_json("github", "create comment", request).await?;
        tracing::info!(id = created.id, "PR comment created");

        Ok(PostedComment {
            id: created.id.to_string(),
            url: created.html_url,
        })
    }
}
