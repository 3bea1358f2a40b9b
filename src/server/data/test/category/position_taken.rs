use super::*;

/// Tests a held position is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_held_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_at(db, 7).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.position_taken(7, None).await?);
    assert!(!repo.position_taken(8, None).await?);

    Ok(())
}

/// Tests a category does not conflict with its own position.
///
/// Expected: Ok(false) when the holder is excluded
#[tokio::test]
async fn ignores_excluded_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category_at(db, 7).await?;

    let repo = CategoryRepository::new(db);

    assert!(!repo.position_taken(7, Some(category.id)).await?);

    Ok(())
}
