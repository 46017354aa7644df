use crate::entities::{departments, users};
use crate::error::ServiceResult;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

pub struct AccessService;

impl AccessService {
    pub async fn get_user(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> ServiceResult<Option<users::Model>> {
        Ok(users::Entity::find_by_id(user_id).one(db).await?)
    }

    /// Ids of all departments belonging to a faculty; the server caches this
    /// per user with a short TTL
    pub async fn department_ids_for_faculty(
        db: &DatabaseConnection,
        faculty_id: Uuid,
    ) -> ServiceResult<Vec<Uuid>> {
        let ids = departments::Entity::find()
            .select_only()
            .column(departments::Column::Id)
            .filter(departments::Column::FacultyId.eq(faculty_id))
            .into_tuple::<Uuid>()
            .all(db)
            .await?;

        Ok(ids)
    }
}
