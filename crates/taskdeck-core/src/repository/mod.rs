//! Repository Layer
//!
//! Collaborator seams for durable local storage and the remote data
//! source, with in-memory, file and HTTP implementations.

mod memory;
mod remote;
mod rest;
mod storage;


pub use memory::{Call, MemoryDataSource, Operation};
pub use remote::{insert_row, select_rows, update_rows, DataSource, EqFilter, Order, Table};
pub use rest::RestDataSource;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
