use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::database::models::Account;

/// Errors from the account store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistent store of registered accounts, keyed by unique email.
#[derive(Clone)]
pub struct AccountStore {
    pool: PgPool,
}

impl AccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the accounts table if this database has never been used.
    /// The unique index on email is what makes concurrent duplicate
    /// registrations safe.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        debug!("accounts table ready");
        Ok(())
    }

    /// Insert a new account. Fails with [`StoreError::DuplicateEmail`] when
    /// the email is already registered, including when two registrations
    /// race; the losing insert hits the unique index.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Account, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                StoreError::DuplicateEmail
            }
            _ => StoreError::Sqlx(err),
        })?;

        Ok(account)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete every account. Returns the number of rows removed.
    pub async fn clear(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM accounts")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
