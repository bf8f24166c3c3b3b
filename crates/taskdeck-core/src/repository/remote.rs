//! Remote Data Source - Core Traits
//!
//! Row-oriented CRUD over named collections. Rows travel as JSON objects;
//! the stores decode them into entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{RemoteError, RemoteResult};

/// Collections the application reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Tasks,
    Projects,
    Profiles,
    UserRoles,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Tasks => "tasks",
            Table::Projects => "projects",
            Table::Profiles => "profiles",
            Table::UserRoles => "user_roles",
        }
    }
}

/// Sort by one named column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub const fn asc(column: &'static str) -> Self {
        Self { column, ascending: true }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self { column, ascending: false }
    }
}

/// `column = value` row filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqFilter {
    pub column: &'static str,
    pub value: String,
}

impl EqFilter {
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            column: "id",
            value: value.into(),
        }
    }
}

/// Backend-as-a-service surface the stores depend on.
///
/// Futures are not `Send`: everything runs on one cooperative thread.
#[async_trait(?Send)]
pub trait DataSource {
    /// All rows of `table`, optionally sorted
    async fn select(&self, table: Table, order: Option<Order>) -> RemoteResult<Vec<Value>>;

    /// Insert one row and return it as stored (with generated columns)
    async fn insert(&self, table: Table, row: Value) -> RemoteResult<Value>;

    /// Merge `patch` into every row matching `filter`
    async fn update(&self, table: Table, filter: &EqFilter, patch: Value) -> RemoteResult<()>;

    /// Remove every row matching `filter`
    async fn delete(&self, table: Table, filter: &EqFilter) -> RemoteResult<()>;
}

/// Typed `select`
pub async fn select_rows<T: DeserializeOwned>(
    source: &dyn DataSource,
    table: Table,
    order: Option<Order>,
) -> RemoteResult<Vec<T>> {
    let rows = source.select(table, order).await?;
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(RemoteError::from))
        .collect()
}

/// Typed `insert`
pub async fn insert_row<I: Serialize, T: DeserializeOwned>(
    source: &dyn DataSource,
    table: Table,
    row: &I,
) -> RemoteResult<T> {
    let stored = source.insert(table, serde_json::to_value(row)?).await?;
    Ok(serde_json::from_value(stored)?)
}

/// Typed `update`
pub async fn update_rows<P: Serialize>(
    source: &dyn DataSource,
    table: Table,
    filter: &EqFilter,
    patch: &P,
) -> RemoteResult<()> {
    source.update(table, filter, serde_json::to_value(patch)?).await
}
