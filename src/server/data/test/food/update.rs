use super::*;

/// Tests updating fields in place.
///
/// Expected: Ok with new position, name and price
#[tokio::test]
async fn updates_food_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, food) = factory::helpers::create_food_with_category(db).await?;

    let repo = FoodRepository::new(db);
    let updated = repo
        .update(UpdateFoodParams {
            id: food.id,
            category_id: category.id,
            target_category_id: category.id,
            position_id: 9,
            name: "Calzone".to_string(),
            price: 13.5,
        })
        .await?;

    assert_eq!(updated.category_id, category.id);
    assert_eq!(updated.position_id, 9);
    assert_eq!(updated.name, "Calzone");
    assert_eq!(updated.price, 13.5);

    Ok(())
}

/// Tests moving food to another category.
///
/// Expected: Ok with the target category stored
#[tokio::test]
async fn moves_food_to_target_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, food) = factory::helpers::create_food_with_category(db).await?;
    let target = factory::category::create_category(db).await?;

    let repo = FoodRepository::new(db);
    let updated = repo
        .update(UpdateFoodParams {
            id: food.id,
            category_id: category.id,
            target_category_id: target.id,
            position_id: food.position_id,
            name: food.name.clone(),
            price: food.price,
        })
        .await?;

    assert_eq!(updated.category_id, target.id);
    assert!(repo.get_by_category(category.id).await?.is_empty());

    Ok(())
}

/// Tests updating food that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_food() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = FoodRepository::new(db);
    let result = repo
        .update(UpdateFoodParams {
            id: 999,
            category_id: category.id,
            target_category_id: category.id,
            position_id: 1,
            name: "Ghost".to_string(),
            price: 1.0,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
