//! Record store for employees.
//!
//! Handlers only see the [`EmployeeRepository`] trait. The binary wires in
//! [`PgEmployeeRepository`]; tests use [`InMemoryEmployeeRepository`].

mod memory;
mod postgres;

pub use memory::InMemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;

use async_trait::async_trait;
use chrono::{NaiveDateTime, SubsecRound, Utc};

use crate::models::employee::{Employee, EmployeePayload};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("employee {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// CRUD capability over the `employees` table.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored employee, ordered by id. An empty table is `Ok(vec![])`.
    async fn get_all(&self) -> StoreResult<Vec<Employee>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Employee>;

    /// Stores a new row. `created_at` and `updated_at` receive the same value.
    async fn create(&self, payload: &EmployeePayload) -> StoreResult<Employee>;

    /// Overwrites name, email and phone together and refreshes `updated_at`.
    /// Returns the row as persisted after the write.
    async fn update(&self, id: i64, payload: &EmployeePayload) -> StoreResult<Employee>;

    /// Hard delete. Returns the row as it was before removal.
    async fn delete(&self, id: i64) -> StoreResult<Employee>;
}

/// Current UTC time truncated to whole seconds, the resolution stored and
/// rendered for employee timestamps.
pub(crate) fn current_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}
