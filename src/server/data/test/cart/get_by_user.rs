use super::*;

/// Tests only the user's own carts are returned, each with its own lines.
///
/// Expected: Ok with one cart for the owner
#[tokio::test]
async fn returns_only_owned_carts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, food, cart) = factory::helpers::create_cart_with_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;
    let other_cart = factory::cart::create_cart(db, other.id).await?;
    factory::cart::create_cart_item(db, other_cart.id, food.id, 5).await?;

    let repo = CartRepository::new(db);
    let carts = repo.get_by_user(user.id).await?;

    assert_eq!(carts.len(), 1);
    assert_eq!(carts[0].id, cart.id);
    assert_eq!(carts[0].items.len(), 1);
    assert_eq!(carts[0].items[0].quantity, 1);

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].items[0].quantity, 5);

    Ok(())
}
