use crate::entities::{prelude::*, series};
use crate::models::serie::{Serie, SerieDraft};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, Set,
};

pub struct SeriesRepository {
    conn: DatabaseConnection,
}

impl SeriesRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: series::Model) -> Serie {
        Serie {
            id: model.id,
            title: model.title.unwrap_or_default(),
            synopsis: model.synopsis,
            season: model.season,
            episode_count: model.episode_count,
            cast: model.cast,
            category: model.category,
        }
    }

    pub async fn list(&self) -> Result<Vec<Serie>> {
        let rows = Series::find()
            .order_by_asc(series::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Serie>> {
        let row = Series::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn insert(&self, draft: SerieDraft) -> Result<Serie> {
        let model = series::ActiveModel {
            title: Set(Some(draft.title)),
            synopsis: Set(draft.synopsis),
            season: Set(draft.season),
            episode_count: Set(draft.episode_count),
            cast: Set(draft.cast),
            category: Set(draft.category),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok(Self::map_model(model))
    }

    /// Replaces every column of an existing row. Returns `None` when no row has `id`.
    pub async fn update(&self, id: i32, draft: SerieDraft) -> Result<Option<Serie>> {
        let result = series::ActiveModel {
            id: Unchanged(id),
            title: Set(Some(draft.title)),
            synopsis: Set(draft.synopsis),
            season: Set(draft.season),
            episode_count: Set(draft.episode_count),
            cast: Set(draft.cast),
            category: Set(draft.category),
        }
        .update(&self.conn)
        .await;

        match result {
            Ok(model) => Ok(Some(Self::map_model(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a row and returns what it held, or `None` if it was already gone.
    pub async fn remove(&self, id: i32) -> Result<Option<Serie>> {
        let Some(existing) = Series::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let result = Series::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Self::map_model(existing)))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Series::find().count(&self.conn).await?)
    }
}
