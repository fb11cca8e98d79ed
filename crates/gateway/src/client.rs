use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::GatewayError;

/// Low-level REST client for the hosted table store.
///
/// The store speaks a PostgREST-style dialect: one route per table, row
/// filters in the query string, and `Prefer: return=representation` to get
/// the affected rows back from writes. Both auth headers carry the same
/// project key.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url, api_key: api_key.into() }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    fn check_status(resp: Response) -> Result<Response, GatewayError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }
        Ok(resp)
    }

    /// Writes return a representation array; a mutation that matched no row
    /// comes back as an empty one.
    async fn single<T: DeserializeOwned>(table: &str, resp: Response) -> Result<T, GatewayError> {
        let mut rows = resp.json::<Vec<T>>().await.map_err(GatewayError::decode)?;
        match rows.pop() {
            Some(row) => Ok(row),
            None => Err(GatewayError::NotFound(table.to_string())),
        }
    }

    /// Fetch every row of a table. One attempt per call; retrying is the
    /// caller's user-triggered action.
    pub async fn list<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<&str>,
    ) -> Result<Vec<T>, GatewayError> {
        let mut req = self.http.get(self.table_url(table)).query(&[("select", "*")]);
        if let Some(order) = order {
            req = req.query(&[("order", order)]);
        }
        let resp = self.authed(req).send().await.map_err(GatewayError::network)?;
        let resp = Self::check_status(resp)?;
        resp.json::<Vec<T>>().await.map_err(GatewayError::decode)
    }

    pub async fn create<T, I>(&self, table: &str, input: &I) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        I: Serialize + ?Sized,
    {
        let req = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(input);
        let resp = self.authed(req).send().await.map_err(GatewayError::network)?;
        let resp = Self::check_status(resp)?;
        Self::single(table, resp).await
    }

    pub async fn update<T, I>(&self, table: &str, id: Uuid, input: &I) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        I: Serialize + ?Sized,
    {
        let req = self
            .http
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(input);
        let resp = self.authed(req).send().await.map_err(GatewayError::network)?;
        let resp = Self::check_status(resp)?;
        Self::single(table, resp).await
    }

    /// Returns whether a row actually existed. The store answers deletes of
    /// unknown ids with an empty representation rather than an error.
    pub async fn delete(&self, table: &str, id: Uuid) -> Result<bool, GatewayError> {
        let req = self
            .http
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");
        let resp = self.authed(req).send().await.map_err(GatewayError::network)?;
        let resp = Self::check_status(resp)?;
        let rows = resp
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(GatewayError::decode)?;
        Ok(!rows.is_empty())
    }
}
