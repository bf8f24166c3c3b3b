//! In-Memory Data Source
//!
//! Behaves like the hosted backend for the operations the stores use:
//! generated ids and timestamps, ordering, equality filters. Failures can
//! be injected per operation and every call is recorded.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::remote::{DataSource, EqFilter, Order, Table};
use crate::domain::{RemoteError, RemoteResult};

/// Kind of data source call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: Operation,
    pub table: Table,
}

#[derive(Default)]
pub struct MemoryDataSource {
    tables: RefCell<HashMap<Table, Vec<Value>>>,
    pending_failures: RefCell<Vec<(Operation, RemoteError)>>,
    calls: RefCell<Vec<Call>>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows of `table`
    pub fn seed(&self, table: Table, rows: Vec<Value>) {
        self.tables.borrow_mut().insert(table, rows);
    }

    /// Current rows of `table` in storage order
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.tables.borrow().get(&table).cloned().unwrap_or_default()
    }

    /// Fail the next call of `operation` with `error`
    pub fn fail_next(&self, operation: Operation, error: RemoteError) {
        self.pending_failures.borrow_mut().push((operation, error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls of `operation`
    pub fn count(&self, operation: Operation) -> usize {
        self.calls.borrow().iter().filter(|c| c.operation == operation).count()
    }

    fn begin(&self, operation: Operation, table: Table) -> RemoteResult<()> {
        self.calls.borrow_mut().push(Call { operation, table });
        let mut pending = self.pending_failures.borrow_mut();
        match pending.iter().position(|(op, _)| *op == operation) {
            Some(index) => Err(pending.remove(index).1),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DataSource for MemoryDataSource {
    async fn select(&self, table: Table, order: Option<Order>) -> RemoteResult<Vec<Value>> {
        self.begin(Operation::Select, table)?;
        let mut rows = self.rows(table);
        if let Some(order) = order {
            rows.sort_by(|a, b| {
                let ord = compare_values(&a[order.column], &b[order.column]);
                if order.ascending { ord } else { ord.reverse() }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: Table, row: Value) -> RemoteResult<Value> {
        self.begin(Operation::Insert, table)?;
        let Value::Object(mut fields) = row else {
            return Err(RemoteError::Status {
                code: 400,
                message: "row must be a JSON object".to_string(),
            });
        };
        fill_missing(&mut fields, "id", || Value::String(Uuid::new_v4().to_string()));
        if matches!(table, Table::Tasks | Table::Projects) {
            fill_missing(&mut fields, "created_at", || Value::String(Utc::now().to_rfc3339()));
        }
        let stored = Value::Object(fields);
        self.tables.borrow_mut().entry(table).or_default().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, table: Table, filter: &EqFilter, patch: Value) -> RemoteResult<()> {
        self.begin(Operation::Update, table)?;
        let Value::Object(patch) = patch else {
            return Err(RemoteError::Status {
                code: 400,
                message: "patch must be a JSON object".to_string(),
            });
        };
        let mut tables = self.tables.borrow_mut();
        for row in tables.entry(table).or_default().iter_mut() {
            if matches_filter(row, filter) {
                if let Value::Object(fields) = row {
                    for (key, value) in &patch {
                        fields.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, table: Table, filter: &EqFilter) -> RemoteResult<()> {
        self.begin(Operation::Delete, table)?;
        self.tables
            .borrow_mut()
            .entry(table)
            .or_default()
            .retain(|row| !matches_filter(row, filter));
        Ok(())
    }
}

fn fill_missing(fields: &mut Map<String, Value>, key: &str, value: impl FnOnce() -> Value) {
    if fields.get(key).map_or(true, Value::is_null) {
        fields.insert(key.to_string(), value());
    }
}

fn matches_filter(row: &Value, filter: &EqFilter) -> bool {
    match &row[filter.column] {
        Value::String(s) => *s == filter.value,
        Value::Number(n) => n.to_string() == filter.value,
        Value::Bool(b) => b.to_string() == filter.value,
        _ => false,
    }
}

/// Nulls sort after everything else, as in Postgres ascending order
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let source = MemoryDataSource::new();
        let row = source.insert(Table::Tasks, json!({ "title": "a" })).await.unwrap();
        assert!(row["id"].is_string());
        assert!(row["created_at"].is_string());
        assert_eq!(source.rows(Table::Tasks).len(), 1);
    }

    #[tokio::test]
    async fn test_select_orders_with_nulls_last() {
        let source = MemoryDataSource::new();
        source.seed(
            Table::Tasks,
            vec![
                json!({ "id": "a", "order_index": 2 }),
                json!({ "id": "b", "order_index": null }),
                json!({ "id": "c", "order_index": 1 }),
            ],
        );

        let asc = source.select(Table::Tasks, Some(Order::asc("order_index"))).await.unwrap();
        let ids: Vec<_> = asc.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        let desc = source.select(Table::Tasks, Some(Order::desc("order_index"))).await.unwrap();
        let ids: Vec<_> = desc.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_filter_by_id() {
        let source = MemoryDataSource::new();
        source.seed(
            Table::Tasks,
            vec![json!({ "id": "a", "status": "backlog" }), json!({ "id": "b", "status": "backlog" })],
        );

        source
            .update(Table::Tasks, &EqFilter::id("a"), json!({ "status": "closed" }))
            .await
            .unwrap();
        let rows = source.rows(Table::Tasks);
        assert_eq!(rows[0]["status"], "closed");
        assert_eq!(rows[1]["status"], "backlog");

        source.delete(Table::Tasks, &EqFilter::id("b")).await.unwrap();
        assert_eq!(source.rows(Table::Tasks).len(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed_once() {
        let source = MemoryDataSource::new();
        source.fail_next(Operation::Delete, RemoteError::Transport("offline".into()));

        assert!(source.delete(Table::Tasks, &EqFilter::id("a")).await.is_err());
        assert!(source.delete(Table::Tasks, &EqFilter::id("a")).await.is_ok());
        assert_eq!(source.count(Operation::Delete), 2);
    }
}
