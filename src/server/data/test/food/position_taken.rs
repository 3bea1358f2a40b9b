use super::*;

/// Tests positions are scoped to their category.
///
/// Expected: taken in the holding category, free in another
#[tokio::test]
async fn scopes_positions_to_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let other = factory::category::create_category(db).await?;
    factory::food::create_food_at(db, category.id, 4).await?;

    let repo = FoodRepository::new(db);

    assert!(repo.position_taken(category.id, 4, None).await?);
    assert!(!repo.position_taken(other.id, 4, None).await?);

    Ok(())
}

/// Tests food does not conflict with its own position.
///
/// Expected: Ok(false) when the holder is excluded
#[tokio::test]
async fn ignores_excluded_food() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let food = factory::food::create_food_at(db, category.id, 4).await?;

    let repo = FoodRepository::new(db);

    assert!(!repo.position_taken(category.id, 4, Some(food.id)).await?);

    Ok(())
}
