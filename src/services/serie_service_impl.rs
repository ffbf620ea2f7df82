//! `SeaORM` implementation of the `SerieService` trait.

use crate::db::Store;
use crate::models::serie::{Serie, SerieDraft};
use crate::services::serie_service::{SerieError, SerieService};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct SeaOrmSerieService {
    store: Store,
}

impl SeaOrmSerieService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SerieService for SeaOrmSerieService {
    async fn list(&self) -> Result<Vec<Serie>, SerieError> {
        Ok(self.store.list_series().await?)
    }

    async fn get(&self, id: i32) -> Result<Serie, SerieError> {
        self.store
            .get_serie(id)
            .await?
            .ok_or(SerieError::NotFound(id))
    }

    async fn create(&self, draft: SerieDraft) -> Result<Serie, SerieError> {
        let serie = self.store.add_serie(draft).await?;
        info!(id = serie.id, title = %serie.title, season = serie.season, "Series created");
        Ok(serie)
    }

    async fn update(&self, id: i32, draft: SerieDraft) -> Result<Serie, SerieError> {
        let Some(serie) = self.store.update_serie(id, draft).await? else {
            debug!(id, "Update skipped, series does not exist");
            return Err(SerieError::NotFound(id));
        };

        info!(id, title = %serie.title, season = serie.season, "Series updated");
        Ok(serie)
    }

    async fn delete(&self, id: i32) -> Result<Serie, SerieError> {
        let serie = self
            .store
            .remove_serie(id)
            .await?
            .ok_or(SerieError::NotFound(id))?;

        info!(id, title = %serie.title, "Series deleted");
        Ok(serie)
    }

    async fn count(&self) -> Result<u64, SerieError> {
        Ok(self.store.count_series().await?)
    }
}
