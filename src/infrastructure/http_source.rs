// HTTP implementation of the equipment source and assistant client
use crate::application::upstream::{AssistantClient, EquipmentSource, UpstreamError};
use crate::domain::assistant::{AssistantAnswer, SourceSnippet};
use crate::domain::equipment::EquipmentSummary;
use crate::infrastructure::equipment_payload::{summaries_from_value, summary_from_value};
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpEquipmentSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AskResponse {
    answer: Option<String>,
    sources: Vec<SourcePayload>,
    has_answer: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SourcePayload {
    source: String,
    snippet: String,
}

impl HttpEquipmentSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn read_json(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, UpstreamError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl EquipmentSource for HttpEquipmentSource {
    async fn fetch_all_equipment(&self) -> Result<Vec<EquipmentSummary>, UpstreamError> {
        let endpoint = self.endpoint("equipment");
        let body = self.read_json(&endpoint, self.client.get(&endpoint)).await?;

        let summaries = summaries_from_value(body).map_err(|message| UpstreamError::Decode {
            endpoint: endpoint.clone(),
            message,
        })?;
        tracing::debug!("Fetched {} equipment summaries from {}", summaries.len(), endpoint);
        Ok(summaries)
    }

    async fn fetch_equipment_by_id(&self, id: &str) -> Result<EquipmentSummary, UpstreamError> {
        let endpoint = self.endpoint(&format!("equipment/{}", urlencoding::encode(id)));
        let body = self.read_json(&endpoint, self.client.get(&endpoint)).await?;

        summary_from_value(body).map_err(|message| UpstreamError::Decode { endpoint, message })
    }
}

#[async_trait]
impl AssistantClient for HttpEquipmentSource {
    async fn ask_assistant(&self, question: &str) -> Result<AssistantAnswer, UpstreamError> {
        let endpoint = self.endpoint("assistant/ask");
        let request = self.client.post(&endpoint).json(&AskRequest { question });
        let body = self.read_json(&endpoint, request).await?;

        let response: AskResponse =
            serde_json::from_value(body).map_err(|e| UpstreamError::Decode {
                endpoint,
                message: e.to_string(),
            })?;

        Ok(AssistantAnswer {
            answer: response.answer,
            sources: response
                .sources
                .into_iter()
                .map(|s| SourceSnippet {
                    source: s.source,
                    snippet: s.snippet,
                })
                .collect(),
            has_answer: response.has_answer,
        })
    }
}
