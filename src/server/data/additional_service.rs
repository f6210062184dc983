//! Additional service catalog repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct AdditionalServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdditionalServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts how many of the given service IDs exist.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::AdditionalService::find()
            .filter(entity::additional_service::Column::Id.is_in(ids.iter().copied()))
            .count(self.db)
            .await
    }
}
