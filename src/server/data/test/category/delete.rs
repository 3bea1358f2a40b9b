use super::*;

/// Tests deleting a category also removes its food items.
///
/// Expected: Ok with category and food rows gone
#[tokio::test]
async fn deletes_category_and_cascades_to_food() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    factory::food::create_food(db, category.id).await?;
    factory::food::create_food(db, category.id).await?;

    let repo = CategoryRepository::new(db);
    repo.delete(category.id).await?;

    assert!(!repo.exists(category.id).await?);
    assert_eq!(entity::prelude::Food::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting leaves other categories untouched.
///
/// Expected: Ok with the other category still present
#[tokio::test]
async fn leaves_other_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::category::create_category(db).await?;
    let second = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.get_by_id(second.id).await?.is_some());

    Ok(())
}
