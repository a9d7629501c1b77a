//! redb-based storage layer for the order ledger
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | JSON-serialized `Order` | Order records |
//! | `counters` | `"last_order_id"` | `u64` | Highest id ever assigned |
//!
//! # Id assignment
//!
//! A new id is `max(last_order_id, highest stored id) + 1`. The counter keeps
//! ids from being reused after the newest order is deleted, and reading the
//! counter, inserting the order and bumping the counter all happen in one
//! write transaction. redb allows a single writer at a time, so concurrent
//! creates are serialized and never observe the same counter value.

use chrono::{DateTime, Utc};
use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
    WriteTransaction,
};
use shared::models::{Customer, Order, OrderItem, OrderStatus};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for storing orders: key = order id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("orders");

/// Table for counters: key = counter name, value = u64
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const LAST_ORDER_ID_KEY: &str = "last_order_id";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Order storage backed by redb
#[derive(Clone)]
pub struct OrderStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for OrderStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStorage").finish_non_exhaustive()
    }
}

impl OrderStorage {
    /// Open or create the database at the given path
    ///
    /// Commits are durable once `commit()` returns (redb's default
    /// `Durability::Immediate`).
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            if counters.get(LAST_ORDER_ID_KEY)?.is_none() {
                counters.insert(LAST_ORDER_ID_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Id Assignment ==========

    /// Compute the next order id within a write transaction (does not persist it)
    fn next_order_id(&self, txn: &WriteTransaction) -> StorageResult<u64> {
        let counters = txn.open_table(COUNTERS_TABLE)?;
        let last_assigned = counters
            .get(LAST_ORDER_ID_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0);

        let orders = txn.open_table(ORDERS_TABLE)?;
        let max_stored = orders
            .last()?
            .map(|(key, _)| key.value())
            .unwrap_or(0);

        Ok(last_assigned.max(max_stored) + 1)
    }

    /// Highest id assigned so far (0 when nothing was ever created)
    pub fn last_order_id(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COUNTERS_TABLE)?;
        Ok(table
            .get(LAST_ORDER_ID_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    // ========== Orders ==========

    /// Assign an id and persist a new order in one transaction
    pub fn create_order(
        &self,
        customer: Customer,
        items: Vec<OrderItem>,
        created_at: DateTime<Utc>,
    ) -> StorageResult<Order> {
        let txn = self.db.begin_write()?;
        let id = self.next_order_id(&txn)?;

        let order = Order {
            id,
            customer,
            items,
            status: OrderStatus::Placed,
            created_at,
        };

        Self::put_order(&txn, &order)?;
        {
            let mut counters = txn.open_table(COUNTERS_TABLE)?;
            counters.insert(LAST_ORDER_ID_KEY, id)?;
        }
        txn.commit()?;

        Ok(order)
    }

    /// Get an order by id
    pub fn get_order(&self, id: u64) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// All orders, ascending by id (redb iterates keys in order)
    pub fn list_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let order: Order = serde_json::from_slice(value.value())?;
            orders.push(order);
        }

        Ok(orders)
    }

    /// Number of stored orders
    pub fn count_orders(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        Ok(table.len()?)
    }

    /// Set the status of an order, returning the updated record
    pub fn set_status(&self, id: u64, status: OrderStatus) -> StorageResult<Option<Order>> {
        let txn = self.db.begin_write()?;

        let existing = {
            let table = txn.open_table(ORDERS_TABLE)?;
            let bytes = table.get(id)?.map(|guard| guard.value().to_vec());
            bytes
        };
        let Some(bytes) = existing else {
            txn.abort()?;
            return Ok(None);
        };

        let mut order: Order = serde_json::from_slice(&bytes)?;
        order.status = status;
        Self::put_order(&txn, &order)?;
        txn.commit()?;

        Ok(Some(order))
    }

    /// Remove an order, returning the removed record
    ///
    /// The id counter is untouched, so the id is never handed out again.
    pub fn remove_order(&self, id: u64) -> StorageResult<Option<Order>> {
        let txn = self.db.begin_write()?;

        let removed = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            let bytes = table.remove(id)?.map(|guard| guard.value().to_vec());
            bytes
        };
        let Some(bytes) = removed else {
            txn.abort()?;
            return Ok(None);
        };

        let order: Order = serde_json::from_slice(&bytes)?;
        txn.commit()?;

        Ok(Some(order))
    }

    fn put_order(txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(order)?;
        table.insert(order.id, value.as_slice())?;
        Ok(())
    }
}
