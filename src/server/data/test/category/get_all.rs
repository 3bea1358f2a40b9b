use super::*;

/// Tests categories come back ordered by position, not by insertion.
///
/// Expected: Ok with positions ascending
#[tokio::test]
async fn returns_categories_ordered_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_at(db, 30).await?;
    factory::category::create_category_at(db, 10).await?;
    factory::category::create_category_at(db, 20).await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let positions: Vec<i64> = categories.iter().map(|c| c.position_id).collect();
    assert_eq!(positions, vec![10, 20, 30]);

    Ok(())
}

/// Tests an empty table yields an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
