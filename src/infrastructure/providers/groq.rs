//! Groq chat completion 클라이언트(OpenAI 호환 `/chat/completions`).

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::CompletionClient;
use crate::domain::review::{
    ChatMessage, CompletionChoice, CompletionRequest, CompletionResponse, TokenUsage,
};

use super::api_runner::{build_api_client, send_json};

pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self::with_client(build_api_client(), api_key, base_url)
    }

    pub fn with_client(client: Client, api_key: &str, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn chat_completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    temperature: f32,
    top_p: f32,
    n: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> WireRequest<'a> {
    fn from_domain(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: request.messages.iter().map(WireMessage::from_domain).collect(),
            max_tokens: request.sampling.max_tokens,
            temperature: request.sampling.temperature,
            top_p: request.sampling.top_p,
            n: request.choices,
            stream: request.stream,
        }
    }
}

impl<'a> WireMessage<'a> {
    fn from_domain(message: &'a ChatMessage) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<WireChoice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    #[serde(default)]
    index: u32,
    message: WireResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
    total_tokens: Option<u64>,
}

impl WireResponse {
    fn into_domain(self) -> CompletionResponse {
        CompletionResponse {
            choices: self
                .choices
                .into_iter()
                .map(|c| CompletionChoice {
                    index: c.index,
                    content: c.message.content.unwrap_or_default(),
                    finish_reason: c.finish_reason,
                })
                .collect(),
            usage: self
                .usage
                .map(|u| TokenUsage {
                    prompt_tokens: u.prompt_tokens,
                    completion_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
            model: self.model,
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn create_chat_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        let endpoint = self.chat_completions_endpoint();
        tracing::debug!(%endpoint, model = %request.model, "sending chat completion request");

        let http_request = self
            .client
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .json(&WireRequest::from_domain(request));

        let response: WireResponse =
            send_json("groq", "create chat completion", http_request).await?;
        let response = response.into_domain();

        tracing::info!(
            choices = response.choices.len(),
            total_tokens = ?response.usage.total_tokens,
            "chat completion finished"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::domain::review::SamplingParams;

    fn request(max_tokens: Option<u32>) -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system("rules"),
                ChatMessage::user("Here is my github PR changes.\n+ x"),
            ],
            model: "llama3-70b-8192".into(),
            sampling: SamplingParams {
                max_tokens,
                ..SamplingParams::default()
            },
            choices: 1,
            stream: false,
        }
    }

    #[test]
    fn request_body_matches_openai_schema() {
        let req = request(None);
        let body = serde_json::to_value(WireRequest::from_domain(&req)).unwrap();

        assert_eq!(body["model"], "llama3-70b-8192");
        assert_eq!(body["messages"][0], json!({"role": "system", "content": "rules"}));
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["n"], 1);
        assert_eq!(body["stream"], false);
        assert!(body.get("max_tokens").is_none());
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((body["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn explicit_max_tokens_is_sent() {
        let req = request(Some(1024));
        let body = serde_json::to_value(WireRequest::from_domain(&req)).unwrap();
        assert_eq!(body["max_tokens"], 1024);
    }

    #[test]
    fn response_maps_choices_and_usage() {
        let raw = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "llama3-70b-8192",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "## Review\nLGTM"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 30, "total_tokens": 150}
        });
        let parsed: WireResponse = serde_json::from_value(raw).unwrap();
        let response = parsed.into_domain();

        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].content, "## Review\nLGTM");
        assert_eq!(response.usage.total_tokens, Some(150));
        assert_eq!(response.model.as_deref(), Some("llama3-70b-8192"));
    }

    #[test]
    fn response_without_choices_maps_to_empty_list() {
        let parsed: WireResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        let response = parsed.into_domain();
        assert!(response.choices.is_empty());
        assert!(response.into_first_choice().is_err());
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GroqClient::new("gsk_test", "https://api.groq.com/openai/v1/");
        assert_eq!(
            client.chat_completions_endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    fn local_client(api_base: &str) -> GroqClient {
        let client = Client::builder().no_proxy().build().unwrap();
        GroqClient::with_client(client, "gsk_test", api_base)
    }

    #[tokio::test]
    async fn chat_completion_round_trip_against_server() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk_test")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama3-70b-8192",
                "messages": [
                    {"role": "system", "content": "rules"},
                    {"role": "user", "content": "Here is my github PR changes.\n+ x"}
                ],
                "n": 1,
                "stream": false
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "model": "llama3-70b-8192",
                    "choices": [
                        {"index": 0, "message": {"role": "assistant", "content": "LGTM"}, "finish_reason": "stop"}
                    ],
                    "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = local_client(&server.url())
            .create_chat_completion(&request(None))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.total_tokens, Some(12));
        assert_eq!(response.into_first_choice().unwrap(), "LGTM");
    }

    #[tokio::test]
    async fn rate_limit_is_reported_with_status_and_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk_test")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let err = local_client(&server.url())
            .create_chat_completion(&request(None))
            .await
            .unwrap_err();

        mock.assert_async().await;
        let message = format!("{err:#}");
        assert!(message.starts_with("groq:"));
        assert!(message.contains("429"));
        assert!(message.contains("rate limited"));
    }

    #[tokio::test]
    async fn unauthorized_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
            .create_async()
            .await;

        let err = local_client(&server.url())
            .create_chat_completion(&request(Some(256)))
            .await
            .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("401"));
        assert!(message.contains("Invalid API Key"));
    }
}
