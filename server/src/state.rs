//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the server config and one in-memory table per resource. Handlers
//! take the lock only around a synchronous `Store` call, never across an
//! await point.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use schema::ResourceKind;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

pub type Row = Map<String, Value>;

// =============================================================================
// TABLE
// =============================================================================

/// Rows of one resource keyed by id. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Row>,
}

impl Default for Table {
    fn default() -> Self {
        Self { next_id: 1, rows: BTreeMap::new() }
    }
}

/// One page of a filtered listing plus the filtered total.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub rows: Vec<Row>,
    pub total: u64,
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug, Default)]
pub struct Store {
    tables: HashMap<ResourceKind, Table>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, kind: ResourceKind) -> Option<&Table> {
        self.tables.get(&kind)
    }

    /// Assign the next id, store the row and return it with its `id`.
    pub fn insert(&mut self, kind: ResourceKind, mut row: Row) -> Row {
        let table = self.tables.entry(kind).or_default();
        let id = table.next_id;
        table.next_id += 1;
        row.insert("id".to_owned(), Value::from(id));
        table.rows.insert(id, row.clone());
        row
    }

    #[must_use]
    pub fn get(&self, kind: ResourceKind, id: i64) -> Option<&Row> {
        self.table(kind)?.rows.get(&id)
    }

    /// Overwrite an existing row. Returns `None` if `id` is unknown.
    pub fn replace(&mut self, kind: ResourceKind, id: i64, mut row: Row) -> Option<Row> {
        let slot = self.tables.get_mut(&kind)?.rows.get_mut(&id)?;
        row.insert("id".to_owned(), Value::from(id));
        *slot = row.clone();
        Some(row)
    }

    pub fn remove(&mut self, kind: ResourceKind, id: i64) -> Option<Row> {
        self.tables.get_mut(&kind)?.rows.remove(&id)
    }

    /// Newest-first page of the rows accepted by `keep`. `page` is 1-based.
    pub fn list(&self, kind: ResourceKind, keep: impl Fn(&Row) -> bool, page: u32, page_size: u32) -> Listing {
        let Some(table) = self.table(kind) else {
            return Listing { rows: Vec::new(), total: 0 };
        };
        let matching: Vec<&Row> = table.rows.values().rev().filter(|row| keep(*row)).collect();
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        Listing {
            total: matching.len() as u64,
            rows: matching.into_iter().skip(skip).take(page_size as usize).cloned().collect(),
        }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Clone is required by Axum; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config, store: Arc::new(RwLock::new(Store::new())) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
