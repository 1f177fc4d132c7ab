use async_trait::async_trait;
use sqlx::PgPool;

use super::{current_timestamp, EmployeeRepository, StoreError, StoreResult};
use crate::models::employee::{Employee, EmployeePayload};

const SELECT_ALL: &str =
    "SELECT id, name, email, phone, created_at, updated_at FROM employees ORDER BY id";

const SELECT_BY_ID: &str =
    "SELECT id, name, email, phone, created_at, updated_at FROM employees WHERE id = $1";

const INSERT: &str = r#"
    INSERT INTO employees (name, email, phone, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, name, email, phone, created_at, updated_at
"#;

const UPDATE: &str = r#"
    UPDATE employees
    SET name = $1, email = $2, phone = $3, updated_at = $4
    WHERE id = $5
"#;

const DELETE: &str =
    "DELETE FROM employees WHERE id = $1 RETURNING id, name, email, phone, created_at, updated_at";

/// PostgreSQL-backed store. The pool is handed in by the caller.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn get_all(&self) -> StoreResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Employee> {
        sqlx::query_as::<_, Employee>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, payload: &EmployeePayload) -> StoreResult<Employee> {
        let now = current_timestamp();

        let employee = sqlx::query_as::<_, Employee>(INSERT)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> StoreResult<Employee> {
        let result = sqlx::query(UPDATE)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(current_timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        // A concurrent delete can land between the two statements.
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> StoreResult<Employee> {
        sqlx::query_as::<_, Employee>(DELETE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { id })
    }
}

/// These run against the database named by `DATABASE_URL` and are skipped
/// when it is unset. Each test migrates into a schema of its own.
#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use sqlx::Executor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SCHEMA_SEQ: AtomicUsize = AtomicUsize::new(0);

    struct TestDb {
        pool: PgPool,
        admin: PgPool,
        schema: String,
    }

    impl TestDb {
        async fn open() -> Option<Self> {
            let Ok(url) = std::env::var("DATABASE_URL") else {
                eprintln!("DATABASE_URL not set, skipping PostgreSQL store test");
                return None;
            };
            let schema = format!(
                "employee_store_test_{}_{}",
                std::process::id(),
                SCHEMA_SEQ.fetch_add(1, Ordering::SeqCst)
            );

            let admin = PgPool::connect(&url).await.unwrap();
            admin
                .execute(format!("CREATE SCHEMA {}", schema).as_str())
                .await
                .unwrap();

            let search_path = format!("SET search_path TO {}", schema);
            let pool = PgPoolOptions::new()
                .max_connections(2)
                .after_connect(move |conn, _meta| {
                    let stmt = search_path.clone();
                    Box::pin(async move { conn.execute(stmt.as_str()).await.map(|_| ()) })
                })
                .connect(&url)
                .await
                .unwrap();
            sqlx::migrate!("./migrations").run(&pool).await.unwrap();

            Some(Self { pool, admin, schema })
        }

        async fn close(self) {
            self.pool.close().await;
            self.admin
                .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
                .await
                .unwrap();
        }
    }

    fn payload(name: &str) -> EmployeePayload {
        EmployeePayload {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_assigned_id_and_equal_timestamps() {
        let Some(db) = TestDb::open().await else { return };
        let repo = PgEmployeeRepository::new(db.pool.clone());

        let created = repo.create(&payload("Ana")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Ana");
        assert_eq!(created.created_at, created.updated_at);

        let stored = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(stored, created);

        db.close().await;
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let Some(db) = TestDb::open().await else { return };
        let repo = PgEmployeeRepository::new(db.pool.clone());

        assert!(repo.get_all().await.unwrap().is_empty());
        for name in ["Ana", "Budi", "Citra"] {
            repo.create(&payload(name)).await.unwrap();
        }
        let rows = repo.get_all().await.unwrap();
        let names: Vec<_> = rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Budi", "Citra"]);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));

        db.close().await;
    }

    #[tokio::test]
    async fn update_rewrites_fields_and_rejects_unknown_ids() {
        let Some(db) = TestDb::open().await else { return };
        let repo = PgEmployeeRepository::new(db.pool.clone());

        let created = repo.create(&payload("Ana")).await.unwrap();
        let updated = repo.update(created.id, &payload("Anastasia")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Anastasia");
        assert_eq!(updated.email, "anastasia@example.com");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let missing = created.id + 1000;
        assert!(matches!(
            repo.update(missing, &payload("Ghost")).await,
            Err(StoreError::NotFound { id }) if id == missing
        ));
        assert_eq!(repo.get_all().await.unwrap(), vec![updated]);

        db.close().await;
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row() {
        let Some(db) = TestDb::open().await else { return };
        let repo = PgEmployeeRepository::new(db.pool.clone());

        let created = repo.create(&payload("Ana")).await.unwrap();
        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);
        assert_eq!(deleted.name, "Ana");

        assert!(matches!(
            repo.get_by_id(created.id).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(created.id).await,
            Err(StoreError::NotFound { .. })
        ));

        db.close().await;
    }
}
