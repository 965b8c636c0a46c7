use async_trait::async_trait;

use crate::foundation::error::{CardError, CardResult};
use crate::gateway::config::GatewayConfig;
use crate::gateway::prompt::{search_system_prompt, summary_system_prompt};
use crate::gateway::response::{parse_search_response, parse_summary_response};
use crate::gateway::{CredentialValidator, SearchGateway, SummarizationGateway};
use crate::source::descriptor::{SearchProvider, SearchResult, SourceKind};
use crate::summary::model::Summary;

/// Chat-completions client implementing every gateway trait.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn chat(
        &self,
        api_key: &str,
        system: &str,
        user: &str,
        max_tokens: Option<u32>,
    ) -> CardResult<String> {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "temperature": self.config.temperature,
        });
        if let Some(n) = max_tokens {
            body["max_tokens"] = serde_json::json!(n);
        }

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| CardError::gateway(format!("request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(CardError::credential(format!("{} rejected the key", self.config.provider.name())));
        }
        if !status.is_success() {
            return Err(CardError::gateway(format!("service returned {status}")));
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| CardError::gateway(format!("response body is not JSON: {e}")))?;
        extract_message_content(&value)
    }
}

/// Pull `choices[0].message.content` out of a chat-completions reply.
pub(crate) fn extract_message_content(value: &serde_json::Value) -> CardResult<String> {
    value["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CardError::gateway("response has no message content"))
}

#[async_trait]
impl SummarizationGateway for HttpGateway {
    #[tracing::instrument(skip(self, raw_text), fields(kind = kind.label(), len = raw_text.len()))]
    async fn summarize(&self, raw_text: &str, kind: SourceKind) -> CardResult<Summary> {
        if raw_text.trim().is_empty() {
            return Err(CardError::gateway("empty input"));
        }
        let content = self
            .chat(&self.config.api_key, &summary_system_prompt(kind), raw_text, None)
            .await?;
        parse_summary_response(&content)
    }
}

#[async_trait]
impl SearchGateway for HttpGateway {
    #[tracing::instrument(skip(self), fields(provider = provider.name()))]
    async fn search(&self, query: &str, provider: SearchProvider) -> Vec<SearchResult> {
        match self
            .chat(&self.config.api_key, &search_system_prompt(provider), query, None)
            .await
        {
            Ok(content) => parse_search_response(&content),
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl CredentialValidator for HttpGateway {
    #[tracing::instrument(skip_all)]
    async fn validate(&self, credential: &str) -> bool {
        let credential = credential.trim();
        if credential.is_empty() {
            return false;
        }
        match self.chat(credential, "Reply with OK.", "ping", Some(1)).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "credential trial call failed");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gateway/http.rs"]
mod tests;
