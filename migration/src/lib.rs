pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_category_table;
mod m20260301_000003_create_food_table;
mod m20260301_000004_create_cart_table;
mod m20260301_000005_create_cart_item_table;
mod m20260302_000006_create_revoked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_category_table::Migration),
            Box::new(m20260301_000003_create_food_table::Migration),
            Box::new(m20260301_000004_create_cart_table::Migration),
            Box::new(m20260301_000005_create_cart_item_table::Migration),
            Box::new(m20260302_000006_create_revoked_token_table::Migration),
        ]
    }
}
