use super::*;

/// Tests food is found under its own category.
///
/// Expected: Ok(Some(Food))
#[tokio::test]
async fn finds_food_in_its_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, food) = factory::helpers::create_food_with_category(db).await?;

    let repo = FoodRepository::new(db);
    let result = repo.get_by_id_in_category(category.id, food.id).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().name, food.name);

    Ok(())
}

/// Tests food is not found under a different category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_under_other_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, food) = factory::helpers::create_food_with_category(db).await?;
    let other = factory::category::create_category(db).await?;

    let repo = FoodRepository::new(db);

    assert!(repo.get_by_id_in_category(other.id, food.id).await?.is_none());

    Ok(())
}
