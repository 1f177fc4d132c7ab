//! In-memory store with the same contract as the PostgreSQL one.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{current_timestamp, EmployeeRepository, StoreError, StoreResult};
use crate::models::employee::{Employee, EmployeePayload};

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    data: RwLock<MemoryData>,
}

struct MemoryData {
    rows: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl Default for MemoryData {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn get_all(&self) -> StoreResult<Vec<Employee>> {
        let data = self.data.read().await;
        Ok(data.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Employee> {
        let data = self.data.read().await;
        data.rows.get(&id).cloned().ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, payload: &EmployeePayload) -> StoreResult<Employee> {
        let mut data = self.data.write().await;
        let id = data.next_id;
        data.next_id += 1;

        let now = current_timestamp();
        let employee = Employee {
            id,
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        data.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> StoreResult<Employee> {
        let mut data = self.data.write().await;
        let row = data.rows.get_mut(&id).ok_or(StoreError::NotFound { id })?;

        row.name = payload.name.clone();
        row.email = payload.email.clone();
        row.phone = payload.phone.clone();
        row.updated_at = current_timestamp();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<Employee> {
        let mut data = self.data.write().await;
        data.rows.remove(&id).ok_or(StoreError::NotFound { id })
    }
}
