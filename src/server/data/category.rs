use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder, QuerySelect,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category, the database generates its ID
    pub async fn create(
        &self,
        name: String,
        description: String,
    ) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get(&self, category_id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    /// Lists categories in ID order
    ///
    /// `start` skips that many rows and `max` caps the page size, `None` leaves either
    /// unbounded.
    pub async fn list(
        &self,
        start: Option<u64>,
        max: Option<u64>,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .offset(start)
            .limit(max)
            .all(self.db)
            .await
    }

    /// Overwrites name & description of an existing category
    ///
    /// Returns `Ok(None)` if no category with the ID exists.
    pub async fn update(
        &self,
        category_id: i32,
        name: String,
        description: String,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut category_am = category.into_active_model();
        category_am.name = ActiveValue::Set(name);
        category_am.description = ActiveValue::Set(description);

        let category = category_am.update(self.db).await?;

        Ok(Some(category))
    }

    /// Deletes a category
    ///
    /// Returns OK regardless of the category existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
