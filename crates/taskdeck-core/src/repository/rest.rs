//! REST Data Source
//!
//! PostgREST-style HTTP backend (`/rest/v1/<table>`), as exposed by hosted
//! Postgres services. Filters and ordering travel as query parameters.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use super::remote::{DataSource, EqFilter, Order, Table};
use crate::domain::{RemoteError, RemoteResult};

pub struct RestDataSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestDataSource {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.as_str())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }
}

/// Query for selecting every column, optionally ordered
pub(crate) fn select_params(order: Option<Order>) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    if let Some(order) = order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    params
}

/// `column=eq.value`
pub(crate) fn filter_param(filter: &EqFilter) -> (String, String) {
    (filter.column.to_string(), format!("eq.{}", filter.value))
}

async fn check(response: Response) -> RemoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RemoteError::Status {
        code: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl DataSource for RestDataSource {
    async fn select(&self, table: Table, order: Option<Order>) -> RemoteResult<Vec<Value>> {
        let request = self.client.get(self.table_url(table)).query(&select_params(order));
        let response = check(self.authorized(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn insert(&self, table: Table, row: Value) -> RemoteResult<Value> {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row);
        let response = check(self.authorized(request).send().await?).await?;
        let rows: Vec<Value> = response.json().await?;
        rows.into_iter().next().ok_or(RemoteError::EmptyResponse)
    }

    async fn update(&self, table: Table, filter: &EqFilter, patch: Value) -> RemoteResult<()> {
        let request = self
            .client
            .patch(self.table_url(table))
            .query(&[filter_param(filter)])
            .json(&patch);
        check(self.authorized(request).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, table: Table, filter: &EqFilter) -> RemoteResult<()> {
        let request = self.client.delete(self.table_url(table)).query(&[filter_param(filter)]);
        check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}
