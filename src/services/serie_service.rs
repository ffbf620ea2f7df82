//! Domain service for series records.
//!
//! Handlers depend on the [`SerieService`] trait rather than on the store,
//! so the persistence backend is chosen when the router state is built.

use crate::models::serie::{Serie, SerieDraft};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerieError {
    #[error("The series with identifier {0} was not found or never existed")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for SerieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for SerieError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait SerieService: Send + Sync {
    /// Lists every stored record in ascending id order.
    async fn list(&self) -> Result<Vec<Serie>, SerieError>;

    /// # Errors
    ///
    /// Returns [`SerieError::NotFound`] if no record has `id`.
    async fn get(&self, id: i32) -> Result<Serie, SerieError>;

    /// Persists a new record; the store assigns its id.
    async fn create(&self, draft: SerieDraft) -> Result<Serie, SerieError>;

    /// Replaces the record with `id` in full.
    ///
    /// # Errors
    ///
    /// Returns [`SerieError::NotFound`] if no record has `id`; nothing is inserted.
    async fn update(&self, id: i32, draft: SerieDraft) -> Result<Serie, SerieError>;

    /// Removes the record with `id` and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns [`SerieError::NotFound`] if no record has `id`.
    async fn delete(&self, id: i32) -> Result<Serie, SerieError>;

    async fn count(&self) -> Result<u64, SerieError>;
}
