use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(pk_auto(Food::Id))
                    .col(integer(Food::CategoryId))
                    .col(big_integer(Food::PositionId))
                    .col(string(Food::Name))
                    .col(double(Food::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_category_id")
                            .from(Food::Table, Food::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_food_category_position_unique")
                            .col(Food::CategoryId)
                            .col(Food::PositionId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Food::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Food {
    Table,
    Id,
    CategoryId,
    PositionId,
    Name,
    Price,
}
