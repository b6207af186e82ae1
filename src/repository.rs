use async_trait::async_trait;
use thiserror::Error;

/// Storage-layer failure. Kept separate from "row not found", which the
/// operations below express as `Ok(None)` / `Ok(false)`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Generic CRUD contract over a single entity type.
#[async_trait]
pub trait Repository<T: Send> {
    /// Every stored row, in whatever order the store returns by default.
    async fn get_all(&self) -> Result<Vec<T>, RepoError>;

    /// Zero-or-one lookup by primary key.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, RepoError>;

    /// Upsert keyed on the entity's unique column. Returns `Ok(true)` only on
    /// a fresh insert, writing the generated id into `entity`; `Ok(false)`
    /// when an existing row was updated instead, leaving `entity.id` alone.
    async fn save(&self, entity: &mut T) -> Result<bool, RepoError>;

    /// Delete by primary key. Deleting an id that does not exist is a no-op;
    /// the store gives no indication whether a row was removed.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
