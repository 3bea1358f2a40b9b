use super::*;

/// Tests deleting a cart removes its items and clears the owner lookup.
///
/// Expected: Ok with no items left and find_owner returning None
#[tokio::test]
async fn deletes_cart_and_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _food, cart) = factory::helpers::create_cart_with_dependencies(db).await?;

    let repo = CartRepository::new(db);
    assert_eq!(repo.find_owner(cart.id).await?, Some(user.id));

    repo.delete(cart.id).await?;

    assert_eq!(repo.find_owner(cart.id).await?, None);
    assert_eq!(entity::prelude::CartItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting food removes the cart lines that reference it.
///
/// Expected: Ok with the cart still present but empty
#[tokio::test]
async fn food_deletion_drops_cart_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, food, cart) = factory::helpers::create_cart_with_dependencies(db).await?;

    entity::prelude::Food::delete_by_id(food.id).exec(db).await?;

    let repo = CartRepository::new(db);
    let stored = repo.get_by_id(cart.id).await?.unwrap();
    assert!(stored.items.is_empty());

    Ok(())
}
