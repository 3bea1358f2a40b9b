use super::*;

/// Tests updating a category's position and name.
///
/// Expected: Ok with both fields replaced
#[tokio::test]
async fn updates_position_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category_at(db, 1).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            position_id: 5,
            name: "Mains".to_string(),
        })
        .await?;

    assert_eq!(updated.id, category.id);
    assert_eq!(updated.position_id, 5);
    assert_eq!(updated.name, "Mains");

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo
        .update(UpdateCategoryParams {
            id: 999,
            position_id: 1,
            name: "Ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
