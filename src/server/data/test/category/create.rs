use super::*;

/// Tests creating a category.
///
/// Verifies that the repository inserts the row and returns the domain model
/// with the generated ID.
///
/// Expected: Ok with category created
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            position_id: 1,
            name: "Pizza".to_string(),
        })
        .await?;

    assert_eq!(category.position_id, 1);
    assert_eq!(category.name, "Pizza");

    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());
    assert_eq!(db_category.unwrap().name, "Pizza");

    Ok(())
}

/// Tests the schema rejects a second category at the same position.
///
/// Expected: Err(DbErr) from the unique index
#[tokio::test]
async fn fails_for_duplicate_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_at(db, 3).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(CreateCategoryParams {
            position_id: 3,
            name: "Desserts".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
