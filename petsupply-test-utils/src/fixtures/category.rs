use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestSetup};

pub struct CategoryFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

impl<'a> CategoryFixtures<'a> {
    /// Insert a category row and remember it in [`TestSetup::categories`].
    pub async fn insert_category(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<entity::category::Model, TestError> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        self.setup.categories.push(category.clone());

        Ok(category)
    }

    /// Insert a category named after `index`, e.g. `Category 3`.
    pub async fn insert_mock_category(
        &mut self,
        index: usize,
    ) -> Result<entity::category::Model, TestError> {
        self.insert_category(
            &format!("Category {}", index),
            &format!("Description of category {}", index),
        )
        .await
    }
}
