use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_food_table::Food, m20260301_000004_create_cart_table::Cart,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CartItem::Id))
                    .col(integer(CartItem::CartId))
                    .col(integer(CartItem::FoodId))
                    .col(integer(CartItem::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_cart_id")
                            .from(CartItem::Table, CartItem::CartId)
                            .to(Cart::Table, Cart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_food_id")
                            .from(CartItem::Table, CartItem::FoodId)
                            .to(Food::Table, Food::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_cart_item_cart_food_unique")
                            .col(CartItem::CartId)
                            .col(CartItem::FoodId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItem {
    Table,
    Id,
    CartId,
    FoodId,
    Quantity,
}
