use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, Set, Unchanged};

use crate::{
    db::ConnectionHandle,
    entities::movie::{self, CastIds, Genres},
    error::{AppError, AppResult},
    models::{MovieIn, MovieUpdate},
    service::ServiceKind,
};

#[derive(Clone)]
pub struct MovieRepository {
    db: ConnectionHandle,
}

impl MovieRepository {
    pub fn new(db: ConnectionHandle) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: MovieIn) -> AppResult<movie::Model> {
        let conn = self.db.connection().await?;
        let model = movie::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            plot: Set(input.plot),
            genres: Set(Genres(input.genres)),
            casts_id: Set(CastIds(input.casts_id)),
        };
        Ok(model.insert(&conn).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<movie::Model>> {
        let conn = self.db.connection().await?;
        Ok(movie::Entity::find().all(&conn).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        let conn = self.db.connection().await?;
        movie::Entity::find_by_id(id)
            .one(&conn)
            .await?
            .ok_or(AppError::NotFound(ServiceKind::Movie))
    }

    /// Overwrites the fields present in `patch`; the rest keep their stored values.
    pub async fn update(&self, id: i32, patch: MovieUpdate) -> AppResult<movie::Model> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let conn = self.db.connection().await?;
        let model = movie::ActiveModel {
            id: Unchanged(id),
            name: patch.name.map_or(NotSet, Set),
            plot: patch.plot.map_or(NotSet, Set),
            genres: patch.genres.map_or(NotSet, |g| Set(Genres(g))),
            casts_id: patch.casts_id.map_or(NotSet, |c| Set(CastIds(c))),
        };

        match model.update(&conn).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
                Err(AppError::NotFound(ServiceKind::Movie))
            },
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let conn = self.db.connection().await?;
        let res = movie::Entity::delete_by_id(id).exec(&conn).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(ServiceKind::Movie));
        }
        Ok(())
    }
}
