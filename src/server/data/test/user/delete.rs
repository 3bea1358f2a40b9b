use super::*;

/// Tests deleting a user also removes their carts and cart items.
///
/// Expected: Ok with no carts or items left
#[tokio::test]
async fn deletes_user_and_cascades_to_carts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _food, _cart) = factory::helpers::create_cart_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    assert!(!repo.exists(user.id).await?);
    assert_eq!(entity::prelude::Cart::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CartItem::find().count(db).await?, 0);

    Ok(())
}
