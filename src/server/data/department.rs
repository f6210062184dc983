//! Department data repository.

use crate::server::model::department::Department;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a department.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(DbErr)` - Database error, including unique violation on name
    pub async fn create(&self, name: &str) -> Result<Department, DbErr> {
        let entity = entity::department::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find()
            .filter(entity::department::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all departments ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Department>, DbErr> {
        let entities = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Department::from_entity).collect())
    }
}
