use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::client::auth::TokenProvider;
use crate::client::error::ApiError;
use crate::client::types::{DeleteResult, Envelope, ExternalRecord, FieldList, RecordHolder, RecordPage};
use crate::config::settings::FeishuConfig;
use crate::utils::constants::DEFAULT_PAGE_SIZE;

/// Pagination query for the record listing. Doubles as the inbound query
/// extractor, so the parameter names are the external snake_case ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
    pub view_id: Option<String>,
}

/// Client for one remote multi-dimensional table.
///
/// Every operation obtains a bearer token from the shared [`TokenProvider`],
/// issues exactly one HTTP request and unwraps the `{code, msg, data}`
/// envelope. No retry, no backoff; failures propagate to the caller.
#[derive(Debug, Clone)]
pub struct TableClient {
    client: Client,
    cfg: Arc<FeishuConfig>,
    tokens: TokenProvider,
}

impl TableClient {
    pub fn new(cfg: Arc<FeishuConfig>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let tokens = TokenProvider::new(client.clone(), cfg.clone());
        Ok(Self {
            client,
            cfg,
            tokens,
        })
    }

    pub fn tokens(&self) -> &TokenProvider {
        &self.tokens
    }

    fn records_url(&self) -> String {
        format!(
            "{}/bitable/v1/apps/{}/tables/{}/records",
            self.cfg.base_url, self.cfg.app_token, self.cfg.table_id
        )
    }

    fn fields_url(&self) -> String {
        format!(
            "{}/bitable/v1/apps/{}/tables/{}/fields",
            self.cfg.base_url, self.cfg.app_token, self.cfg.table_id
        )
    }

    pub async fn list_records(&self, query: &ListQuery) -> Result<RecordPage, ApiError> {
        let token = self.tokens.get_token().await?;

        let mut params: Vec<(&str, String)> = vec![(
            "page_size",
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).to_string(),
        )];
        if let Some(page_token) = query.page_token.as_deref().filter(|t| !t.is_empty()) {
            params.push(("page_token", page_token.to_string()));
        }
        if let Some(view_id) = query.view_id.as_deref().filter(|v| !v.is_empty()) {
            params.push(("view_id", view_id.to_string()));
        }

        let response = self
            .client
            .get(self.records_url())
            .bearer_auth(&token)
            .query(&params)
            .send()
            .await?;

        let page = unwrap_envelope::<RecordPage>(response).await?;
        Ok(page.unwrap_or_default())
    }

    pub async fn create_record(
        &self,
        fields: Map<String, Value>,
    ) -> Result<ExternalRecord, ApiError> {
        let token = self.tokens.get_token().await?;

        let response = self
            .client
            .post(self.records_url())
            .bearer_auth(&token)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        let holder = require_data(unwrap_envelope::<RecordHolder>(response).await?)?;
        Ok(holder.record)
    }

    pub async fn update_record(
        &self,
        record_id: &str,
        fields: Map<String, Value>,
    ) -> Result<ExternalRecord, ApiError> {
        let token = self.tokens.get_token().await?;

        let url = format!("{}/{}", self.records_url(), record_id);
        let response = self
            .client
            .put(&url)
            .bearer_auth(&token)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        let holder = require_data(unwrap_envelope::<RecordHolder>(response).await?)?;
        Ok(holder.record)
    }

    pub async fn delete_record(&self, record_id: &str) -> Result<bool, ApiError> {
        let token = self.tokens.get_token().await?;

        let url = format!("{}/{}", self.records_url(), record_id);
        let response = self.client.delete(&url).bearer_auth(&token).send().await?;

        let result = unwrap_envelope::<DeleteResult>(response).await?;
        // some deployments omit the body on success
        Ok(result.map(|r| r.deleted).unwrap_or(true))
    }

    pub async fn list_fields(&self) -> Result<FieldList, ApiError> {
        let token = self.tokens.get_token().await?;

        let response = self
            .client
            .get(self.fields_url())
            .bearer_auth(&token)
            .send()
            .await?;

        let fields = unwrap_envelope::<FieldList>(response).await?;
        Ok(fields.unwrap_or_default())
    }
}

/// Decode the response body as an envelope and apply the `code == 0`
/// success rule. A nonzero code surfaces the remote message, never a
/// low-level parse error.
async fn unwrap_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ApiError> {
    let envelope: Envelope<T> = response.json().await?;
    envelope.into_data()
}

fn require_data<T>(data: Option<T>) -> Result<T, ApiError> {
    data.ok_or(ApiError::Remote {
        code: 0,
        message: "success envelope carried no data".to_string(),
    })
}
