use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::repository::{RepoError, Repository};
use crate::users::repo_types::UserRecord;

/// Postgres-backed repository for `UserRecord`.
#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<UserRecord> for PgUserRepository {
    async fn get_all(&self) -> Result<Vec<UserRecord>, RepoError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password, email
            FROM users
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<UserRecord>, RepoError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn save(&self, user: &mut UserRecord) -> Result<bool, RepoError> {
        // Insert-vs-update arbitration stays in the storage engine: the email
        // unique constraint decides. xmax = 0 holds only for a freshly
        // inserted row, so a conflict-update reports false and keeps its id.
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE
                SET username = EXCLUDED.username,
                    password = EXCLUDED.password
            RETURNING id, (xmax = 0) AS inserted
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email)
        .fetch_one(&self.db)
        .await?;

        let inserted: bool = row.get("inserted");
        if inserted {
            user.id = row.get("id");
        }
        Ok(inserted)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
