use sea_orm::DatabaseConnection;

use crate::server::{
    data::department::DepartmentRepository, error::AppError, model::department::Department,
};

pub struct DepartmentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a department; names are unique.
    pub async fn create(&self, name: &str) -> Result<Department, AppError> {
        let repo = DepartmentRepository::new(self.db);
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Department name must not be empty".to_string(),
            ));
        }
        if repo.name_exists(name).await? {
            return Err(AppError::Conflict(format!(
                "Department {} already exists",
                name
            )));
        }

        Ok(repo.create(name).await?)
    }

    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        Ok(DepartmentRepository::new(self.db).get_all().await?)
    }
}
