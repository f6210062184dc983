//! Technician data repository.
//!
//! Technician rows are always loaded together with their user account so callers get a
//! display name and email without a second query.

use crate::server::model::technician::Technician;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct TechnicianRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechnicianRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active technician profile for a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user account backing the technician
    /// - `specialty` - Optional area of expertise
    ///
    /// # Returns
    /// - `Ok(Technician)` - The created technician joined with its user
    /// - `Err(DbErr)` - Database error, including unique violation on user_id
    pub async fn create(
        &self,
        user_id: i32,
        specialty: Option<String>,
    ) -> Result<Technician, DbErr> {
        let entity = entity::technician::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            specialty: ActiveValue::Set(specialty),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(Technician::from_entity(entity, user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Technician>, DbErr> {
        let result = entity::prelude::Technician::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(tech, user)| Technician::from_entity(tech, user)))
    }

    /// Finds the technician profile backed by the given user account.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Technician>, DbErr> {
        let result = entity::prelude::Technician::find()
            .filter(entity::technician::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(tech, user)| Technician::from_entity(tech, user)))
    }

    /// Gets all technicians ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Technician>, DbErr> {
        let results = entity::prelude::Technician::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::technician::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(tech, user)| Technician::from_entity(tech, user))
            .collect())
    }
}
