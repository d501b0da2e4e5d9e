//! Resource bindings: `list`, `get`, `create`, `update`, `delete`.
//!
//! DESIGN
//! ======
//! `RunnerClient` owns one `reqwest::Client`; every `ResourceApi` borrows a
//! clone of it plus the resource's path prefix. Typed bindings decode into
//! `schema::records`; [`RunnerClient::dynamic`] gives a `serde_json::Value`
//! binding for callers that pick the resource at runtime.
//!
//! Create versus update is chosen by [`SaveMode`], never by a bare boolean.
//! [`ResourceApi::upsert`] picks the mode from the record's id.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use schema::{Account, Case, PageObject, Project, Record, ResourceKind, Suite, Task};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{self, Page};
use crate::error::ApiError;

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
struct HttpContext {
    http: reqwest::Client,
    base_url: Arc<str>,
    token: Option<Arc<str>>,
}

impl HttpContext {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "runner api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(status, "runner api returned non-success status");
            return Err(ApiError::Response { status, body: text });
        }
        Ok(text)
    }
}

/// Entry point holding the shared HTTP client.
#[derive(Clone)]
pub struct RunnerClient {
    ctx: HttpContext,
}

impl RunnerClient {
    /// Build a client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            ctx: HttpContext { http, base_url: config.base_url.into(), token: config.token.map(Into::into) },
        })
    }

    /// Build a client from `RUNNER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client fails.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.ctx.base_url
    }

    /// Typed binding for record type `R`.
    #[must_use]
    pub fn resource<R: Record>(&self) -> ResourceApi<R> {
        ResourceApi::bind(self.ctx.clone(), R::KIND)
    }

    /// Untyped binding for a resource chosen at runtime.
    #[must_use]
    pub fn dynamic(&self, kind: ResourceKind) -> ResourceApi<Value> {
        ResourceApi::bind(self.ctx.clone(), kind)
    }

    #[must_use]
    pub fn projects(&self) -> ResourceApi<Project> {
        self.resource()
    }

    #[must_use]
    pub fn tasks(&self) -> ResourceApi<Task> {
        self.resource()
    }

    #[must_use]
    pub fn accounts(&self) -> ResourceApi<Account> {
        self.resource()
    }

    #[must_use]
    pub fn page_objects(&self) -> ResourceApi<PageObject> {
        self.resource()
    }

    #[must_use]
    pub fn cases(&self) -> ResourceApi<Case> {
        self.resource()
    }

    #[must_use]
    pub fn suites(&self) -> ResourceApi<Suite> {
        self.resource()
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let builder = self.ctx.request(Method::GET, "/healthz");
        self.ctx.execute(builder).await.map(|_| ())
    }
}

// =============================================================================
// LIST PARAMETERS
// =============================================================================

/// Query of a `list` call. Filters are the resource's search-form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub page_size: u32,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { page: 1, page_size: 10, filters: BTreeMap::new() }
    }
}

impl ListParams {
    #[must_use]
    pub fn page(page: u32, page_size: u32) -> Self {
        Self { page, page_size, ..Self::default() }
    }

    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Query pairs in wire order: `page`, `pageSize`, then filters by name.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_owned(), self.page.to_string()),
            ("pageSize".to_owned(), self.page_size.to_string()),
        ];
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

// =============================================================================
// RESOURCE BINDING
// =============================================================================

/// How [`ResourceApi::save`] writes a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// `POST <prefix>`.
    Create,
    /// `PUT <prefix>/{record.id}`.
    Update,
}

/// Binding of one resource prefix.
pub struct ResourceApi<R> {
    ctx: HttpContext,
    kind: ResourceKind,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self { ctx: self.ctx.clone(), kind: self.kind, _record: PhantomData }
    }
}

impl<R> ResourceApi<R> {
    fn bind(ctx: HttpContext, kind: ResourceKind) -> Self {
        Self { ctx, kind, _record: PhantomData }
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn path_prefix(&self) -> &'static str {
        self.kind.path_prefix()
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.path_prefix())
    }
}

impl<R: Serialize + DeserializeOwned> ResourceApi<R> {
    /// `GET <prefix>?page=&pageSize=&<filters>`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or a bad envelope.
    pub async fn list(&self, params: &ListParams) -> Result<Page<R>, ApiError> {
        let builder = self
            .ctx
            .request(Method::GET, self.path_prefix())
            .query(&params.to_query());
        let body = self.ctx.execute(builder).await?;
        envelope::parse_page(&body)
    }

    /// `GET <prefix>/{id}`.
    ///
    /// # Errors
    ///
    /// As [`Self::list`].
    pub async fn get(&self, id: i64) -> Result<R, ApiError> {
        let builder = self.ctx.request(Method::GET, &self.item_path(id));
        let body = self.ctx.execute(builder).await?;
        envelope::parse_record(&body)
    }

    /// `POST <prefix>`.
    ///
    /// # Errors
    ///
    /// As [`Self::list`].
    pub async fn create(&self, record: &R) -> Result<R, ApiError> {
        let builder = self.ctx.request(Method::POST, self.path_prefix()).json(record);
        let body = self.ctx.execute(builder).await?;
        envelope::parse_record(&body)
    }

    /// `PUT <prefix>/{id}`.
    ///
    /// # Errors
    ///
    /// As [`Self::list`].
    pub async fn update(&self, id: i64, record: &R) -> Result<R, ApiError> {
        let builder = self.ctx.request(Method::PUT, &self.item_path(id)).json(record);
        let body = self.ctx.execute(builder).await?;
        envelope::parse_record(&body)
    }

    /// `DELETE <prefix>/{id}`.
    ///
    /// # Errors
    ///
    /// As [`Self::list`].
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.ctx.request(Method::DELETE, &self.item_path(id));
        let body = self.ctx.execute(builder).await?;
        envelope::parse_data::<Value>(&body).map(|_| ())
    }
}

impl<R: Record> ResourceApi<R> {
    /// Create or update according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] for [`SaveMode::Update`] on a record
    /// without an id; otherwise as [`Self::create`] / [`Self::update`].
    pub async fn save(&self, record: &R, mode: SaveMode) -> Result<R, ApiError> {
        match mode {
            SaveMode::Create => self.create(record).await,
            SaveMode::Update => {
                let id = record.id().ok_or(ApiError::MissingId)?;
                self.update(id, record).await
            }
        }
    }

    /// Update when the record carries an id, create otherwise.
    ///
    /// # Errors
    ///
    /// As [`Self::save`].
    pub async fn upsert(&self, record: &R) -> Result<R, ApiError> {
        let mode = if record.id().is_some() { SaveMode::Update } else { SaveMode::Create };
        self.save(record, mode).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
