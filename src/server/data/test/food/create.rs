use super::*;

/// Tests creating a food item in a category.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_food_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = FoodRepository::new(db);
    let food = repo
        .create(CreateFoodParams {
            category_id: category.id,
            position_id: 1,
            name: "Margherita".to_string(),
            price: 11.0,
        })
        .await?;

    assert_eq!(food.category_id, category.id);
    assert_eq!(food.position_id, 1);
    assert_eq!(food.name, "Margherita");
    assert_eq!(food.price, 11.0);

    Ok(())
}

/// Tests the foreign key rejects food for a missing category.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoodRepository::new(db);
    let result = repo
        .create(CreateFoodParams {
            category_id: 999,
            position_id: 1,
            name: "Orphan".to_string(),
            price: 1.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
