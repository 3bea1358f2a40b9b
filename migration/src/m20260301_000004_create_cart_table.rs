use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(pk_auto(Cart::Id))
                    .col(integer(Cart::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_user_id")
                            .from(Cart::Table, Cart::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cart {
    Table,
    Id,
    UserId,
}
