use serde::{Deserialize, Serialize};

/// A catalog category as returned by the persistence service.
///
/// Always an owned copy of the stored row; mutating it never touches repository state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Request body for creating or updating a category.
///
/// An `id` field sent by the client is ignored, the path decides which category is updated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryRequestDto {
    pub name: String,
    pub description: String,
}

impl From<entity::category::Model> for CategoryDto {
    fn from(model: entity::category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}
