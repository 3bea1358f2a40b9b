//! Cart data repository for database operations.
//!
//! Carts are stored as a `cart` row plus one `cart_item` row per food. Reads join
//! each item with its food so the domain model carries current names and prices.
//! Writes that touch several rows run inside a single transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::cart::{
    Cart, CartItemParams, CartLine, CreateCartParams, UpdateCartParams,
};

/// Repository providing database operations for carts and their items.
pub struct CartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartRepository<'a> {
    /// Creates a new CartRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CartRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a cart and its items in one transaction.
    ///
    /// The caller has already verified that every referenced food exists.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The created cart with joined item details
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, params: CreateCartParams) -> Result<Cart, DbErr> {
        let txn = self.db.begin().await?;

        let cart = entity::cart::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_items(&txn, cart.id, &params.items).await?;

        txn.commit().await?;

        self.get_by_id(cart.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Cart with id {} not found after creation",
            cart.id
        )))
    }

    /// Gets a cart by ID with its items.
    ///
    /// # Returns
    /// - `Ok(Some(Cart))` - Cart found
    /// - `Ok(None)` - No cart with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Cart>, DbErr> {
        let Some(cart) = entity::prelude::Cart::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut lines = self.lines_by_cart(&[cart.id]).await?;
        let items = lines.remove(&cart.id).unwrap_or_default();

        Ok(Some(Cart::from_entity(cart, items)))
    }

    /// Gets every cart ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Cart>, DbErr> {
        let carts = entity::prelude::Cart::find()
            .order_by_asc(entity::cart::Column::Id)
            .all(self.db)
            .await?;

        self.with_lines(carts).await
    }

    /// Gets the carts owned by one user ordered by ID.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Cart>, DbErr> {
        let carts = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart::Column::Id)
            .all(self.db)
            .await?;

        self.with_lines(carts).await
    }

    /// Returns the owning user of a cart, or `None` when the cart does not exist.
    pub async fn find_owner(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let cart = entity::prelude::Cart::find_by_id(id).one(self.db).await?;

        Ok(cart.map(|cart| cart.user_id))
    }

    /// Replaces every item of a cart in one transaction.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The cart with its new items
    /// - `Err(DbErr::RecordNotFound)` - No cart with that ID
    /// - `Err(DbErr)` - Other database error; the previous items are kept
    pub async fn replace_items(&self, params: UpdateCartParams) -> Result<Cart, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::Cart::find_by_id(params.id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(DbErr::RecordNotFound(format!(
                "Cart with id {} not found",
                params.id
            )));
        }

        entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(params.id))
            .exec(&txn)
            .await?;

        insert_items(&txn, params.id, &params.items).await?;

        txn.commit().await?;

        self.get_by_id(params.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Cart with id {} not found",
            params.id
        )))
    }

    /// Deletes a cart. Its items are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Cart::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    async fn with_lines(&self, carts: Vec<entity::cart::Model>) -> Result<Vec<Cart>, DbErr> {
        let ids: Vec<i32> = carts.iter().map(|cart| cart.id).collect();
        let mut lines = self.lines_by_cart(&ids).await?;

        Ok(carts
            .into_iter()
            .map(|cart| {
                let items = lines.remove(&cart.id).unwrap_or_default();
                Cart::from_entity(cart, items)
            })
            .collect())
    }

    /// Loads the item lines of several carts, grouped by cart ID.
    async fn lines_by_cart(&self, cart_ids: &[i32]) -> Result<HashMap<i32, Vec<CartLine>>, DbErr> {
        let mut grouped: HashMap<i32, Vec<CartLine>> = HashMap::new();
        if cart_ids.is_empty() {
            return Ok(grouped);
        }

        let rows = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.is_in(cart_ids.iter().copied()))
            .order_by_asc(entity::cart_item::Column::Id)
            .find_also_related(entity::prelude::Food)
            .all(self.db)
            .await?;

        for (item, food) in rows {
            // The food foreign key cascades, so an item without its food cannot persist.
            let Some(food) = food else { continue };
            grouped
                .entry(item.cart_id)
                .or_default()
                .push(CartLine::from_entity(item, food));
        }

        Ok(grouped)
    }
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    cart_id: i32,
    items: &[CartItemParams],
) -> Result<(), DbErr> {
    for item in items {
        entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            food_id: ActiveValue::Set(item.food_id),
            quantity: ActiveValue::Set(item.quantity),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
