use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, Set, Unchanged};

use crate::{
    db::ConnectionHandle,
    entities::cast,
    error::{AppError, AppResult},
    models::{CastIn, CastUpdate},
    service::ServiceKind,
};

#[derive(Clone)]
pub struct CastRepository {
    db: ConnectionHandle,
}

impl CastRepository {
    pub fn new(db: ConnectionHandle) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: CastIn) -> AppResult<cast::Model> {
        let conn = self.db.connection().await?;
        let model = cast::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            nationality: Set(input.nationality),
        };
        Ok(model.insert(&conn).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<cast::Model>> {
        let conn = self.db.connection().await?;
        Ok(cast::Entity::find().all(&conn).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<cast::Model> {
        let conn = self.db.connection().await?;
        cast::Entity::find_by_id(id)
            .one(&conn)
            .await?
            .ok_or(AppError::NotFound(ServiceKind::Cast))
    }

    /// Overwrites the fields present in `patch`; a `null` nationality clears it.
    pub async fn update(&self, id: i32, patch: CastUpdate) -> AppResult<cast::Model> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let conn = self.db.connection().await?;
        let model = cast::ActiveModel {
            id: Unchanged(id),
            name: patch.name.map_or(NotSet, Set),
            nationality: patch.nationality.map_or(NotSet, Set),
        };

        match model.update(&conn).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
                Err(AppError::NotFound(ServiceKind::Cast))
            },
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let conn = self.db.connection().await?;
        let res = cast::Entity::delete_by_id(id).exec(&conn).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(ServiceKind::Cast));
        }
        Ok(())
    }
}
