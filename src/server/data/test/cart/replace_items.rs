use super::*;

/// Tests replacing a cart's items drops the old lines.
///
/// Expected: Ok with only the new lines stored
#[tokio::test]
async fn replaces_every_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, food, cart) = factory::helpers::create_cart_with_dependencies(db).await?;
    let other_food = factory::food::create_food(db, food.category_id).await?;

    let repo = CartRepository::new(db);
    let updated = repo
        .replace_items(UpdateCartParams {
            id: cart.id,
            items: vec![item(other_food.id, 4)],
        })
        .await?;

    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].food_id, other_food.id);
    assert_eq!(updated.items[0].quantity, 4);

    let stored = entity::prelude::CartItem::find()
        .filter(entity::cart_item::Column::CartId.eq(cart.id))
        .count(db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Tests a failed replacement keeps the previous items.
///
/// Expected: Err(DbErr) with the original line intact
#[tokio::test]
async fn keeps_previous_items_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, food, cart) = factory::helpers::create_cart_with_dependencies(db).await?;

    let repo = CartRepository::new(db);
    let result = repo
        .replace_items(UpdateCartParams {
            id: cart.id,
            items: vec![item(999, 1)],
        })
        .await;

    assert!(result.is_err());

    let stored = repo.get_by_id(cart.id).await?.unwrap();
    assert_eq!(stored.items.len(), 1);
    assert_eq!(stored.items[0].food_id, food.id);

    Ok(())
}

/// Tests replacing items of a missing cart.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CartRepository::new(db);
    let result = repo
        .replace_items(UpdateCartParams {
            id: 999,
            items: vec![],
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
