use super::*;

/// Tests only existing IDs are returned.
///
/// Expected: Ok with one food for two requested IDs
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, food) = factory::helpers::create_food_with_category(db).await?;

    let repo = FoodRepository::new(db);
    let foods = repo.get_by_ids(&[food.id, 999]).await?;

    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].id, food.id);

    Ok(())
}

/// Tests an empty ID list makes no query and returns nothing.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoodRepository::new(db);

    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}
