//! Department factory for creating test department entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments.
///
/// # Example
///
/// ```rust,ignore
/// let department = DepartmentFactory::new(&db).name("Engineering").build().await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new factory with name `"Department {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Department {}", next_id()),
        }
    }

    /// Sets the department name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the department entity into the database.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
pub async fn create_department(db: &DatabaseConnection) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
