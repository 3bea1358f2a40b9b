use super::*;

/// Tests creating a cart joins each item with its food.
///
/// Expected: Ok with names, prices and total from the food rows
#[tokio::test]
async fn creates_cart_with_joined_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let soup = factory::food::FoodFactory::new(db, category.id)
        .name("Soup")
        .price(4.0)
        .build()
        .await?;
    let bread = factory::food::FoodFactory::new(db, category.id)
        .name("Bread")
        .price(1.5)
        .build()
        .await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .create(CreateCartParams {
            user_id: user.id,
            items: vec![item(soup.id, 2), item(bread.id, 3)],
        })
        .await?;

    assert_eq!(cart.user_id, user.id);
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.items[0].food_name, "Soup");
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart.items[1].food_name, "Bread");
    assert_eq!(cart.total(), 12.5);

    Ok(())
}

/// Tests an unknown food rolls back the whole cart.
///
/// Expected: Err(DbErr) and no cart rows persisted
#[tokio::test]
async fn rolls_back_on_unknown_food() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_category, food) = factory::helpers::create_food_with_category(db).await?;

    let repo = CartRepository::new(db);
    let result = repo
        .create(CreateCartParams {
            user_id: user.id,
            items: vec![item(food.id, 1), item(999, 1)],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Cart::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CartItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests a cart may be created without items.
///
/// Expected: Ok with no items and zero total
#[tokio::test]
async fn creates_empty_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CartRepository::new(db);
    let cart = repo
        .create(CreateCartParams {
            user_id: user.id,
            items: vec![],
        })
        .await?;

    assert!(cart.items.is_empty());
    assert_eq!(cart.total(), 0.0);

    Ok(())
}
