use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub position_id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::food::Entity")]
    Food,
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
