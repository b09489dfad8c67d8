//! Image database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ImageModel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "image_models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub image_bytes: Vec<u8>,
    pub user_id: Option<i64>,
    /// Plain column: the post delete path removes images itself
    pub post_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ImageModel {
    fn from(model: Model) -> Self {
        ImageModel {
            id: model.id,
            name: model.name,
            image_bytes: model.image_bytes,
            user_id: model.user_id,
            post_id: model.post_id,
        }
    }
}
