//! Generic resource handlers.
//!
//! `GET    /runner/api/v1/{resource}`       paginated, filtered list
//! `POST   /runner/api/v1/{resource}`       create
//! `GET    /runner/api/v1/{resource}/{id}`  read
//! `PUT    /runner/api/v1/{resource}/{id}`  update
//! `DELETE /runner/api/v1/{resource}/{id}`  delete
//!
//! Extractors are taken as `Result` so their rejections go through
//! [`ApiError`] and keep the error envelope.

use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use schema::ResourceKind;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::payload;
use crate::response::{ApiError, Envelope, PageEnvelope};
use crate::state::{AppState, Row};

type Reply = Result<Json<Envelope<Row>>, ApiError>;
type ResourcePath = Result<Path<String>, PathRejection>;
type ItemPath = Result<Path<(String, i64)>, PathRejection>;
type JsonBody = Result<Json<Value>, JsonRejection>;

fn resource_kind(segment: &str) -> Result<ResourceKind, ApiError> {
    segment.parse().map_err(|e: schema::UnknownResource| ApiError::UnknownResource(e.0))
}

// =============================================================================
// LIST
// =============================================================================

/// Paging resolved from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Paging {
    pub page: u32,
    pub page_size: u32,
}

pub(crate) fn paging(query: &HashMap<String, String>, config: &ServerConfig) -> Result<Paging, ApiError> {
    let number = |key: &str, default: u32| -> Result<u32, ApiError> {
        match query.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
            None => Ok(default),
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ApiError::BadRequest(format!("{key} must be a positive integer, got {raw:?}"))),
        }
    };
    let page = number("page", 1)?.max(1);
    let page_size = number("pageSize", config.default_page_size)?.clamp(1, config.max_page_size);
    Ok(Paging { page, page_size })
}

/// Search-form filters present in the query. Blank values are ignored.
pub(crate) fn filters<'q>(kind: ResourceKind, query: &'q HashMap<String, String>) -> Vec<(&'static str, &'q str)> {
    kind.schema()
        .search_form
        .iter()
        .filter_map(|field| {
            let value = query.get(field.field)?.trim();
            (!value.is_empty()).then_some((field.field, value))
        })
        .collect()
}

/// Strings match by substring; other values by their JSON text.
pub(crate) fn matches_filter(row: &Row, field: &str, wanted: &str) -> bool {
    match row.get(field) {
        Some(Value::String(s)) => s.contains(wanted),
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == wanted,
    }
}

pub async fn list(
    State(state): State<AppState>,
    path: ResourcePath,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<PageEnvelope<Row>>, ApiError> {
    let Path(resource) = path?;
    let Query(query) = query?;
    let kind = resource_kind(&resource)?;
    let Paging { page, page_size } = paging(&query, &state.config)?;
    let wanted = filters(kind, &query);

    let listing = state.store.read().await.list(
        kind,
        |row| wanted.iter().all(|(field, value)| matches_filter(row, field, value)),
        page,
        page_size,
    );
    Ok(PageEnvelope::ok(listing.rows, listing.total, page, page_size))
}

// =============================================================================
// ITEM
// =============================================================================

pub async fn create(State(state): State<AppState>, path: ResourcePath, body: JsonBody) -> Reply {
    let Path(resource) = path?;
    let kind = resource_kind(&resource)?;
    let Json(body) = body?;
    let mut row = payload::normalize(kind, body)?;
    payload::stamp_created(kind, &mut row);

    let stored = state.store.write().await.insert(kind, row);
    tracing::info!(%kind, id = ?stored.get("id"), "record created");
    Ok(Envelope::ok(stored))
}

pub async fn read(State(state): State<AppState>, path: ItemPath) -> Reply {
    let Path((resource, id)) = path?;
    let kind = resource_kind(&resource)?;
    let store = state.store.read().await;
    let row = store.get(kind, id).ok_or(ApiError::NotFound { resource: kind, id })?;
    Ok(Envelope::ok(row.clone()))
}

pub async fn update(State(state): State<AppState>, path: ItemPath, body: JsonBody) -> Reply {
    let Path((resource, id)) = path?;
    let kind = resource_kind(&resource)?;
    let Json(body) = body?;
    let mut row = payload::normalize(kind, body)?;

    let mut store = state.store.write().await;
    let stored = store.get(kind, id).ok_or(ApiError::NotFound { resource: kind, id })?;
    payload::carry_derived(kind, stored, &mut row);
    let updated = store.replace(kind, id, row).ok_or(ApiError::NotFound { resource: kind, id })?;
    tracing::info!(%kind, id, "record updated");
    Ok(Envelope::ok(updated))
}

pub async fn remove(State(state): State<AppState>, path: ItemPath) -> Result<Json<Envelope<()>>, ApiError> {
    let Path((resource, id)) = path?;
    let kind = resource_kind(&resource)?;
    state
        .store
        .write()
        .await
        .remove(kind, id)
        .ok_or(ApiError::NotFound { resource: kind, id })?;
    tracing::info!(%kind, id, "record deleted");
    Ok(crate::response::empty())
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod tests;
