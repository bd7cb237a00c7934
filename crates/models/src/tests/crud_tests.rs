use crate::db::connect;
use crate::product;
use anyhow::Result;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

fn new_row(name: &str) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(None),
        price: Set(Decimal::new(1999, 2)),
        category: Set("Tools".into()),
        supplier_email: Set("supplier@example.com".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
}

#[tokio::test]
async fn insert_fills_server_defaults() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let row = new_row("entity_defaults").insert(&db).await?;
    assert!(row.id > 0);
    assert!(row.updated_at.is_none());
    assert_eq!(row.price, Decimal::new(1999, 2));

    product::Entity::delete_by_id(row.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn page_orders_by_id() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let a = new_row("entity_page_a").insert(&db).await?;
    let b = new_row("entity_page_b").insert(&db).await?;

    let rows = product::page(0, u64::MAX >> 1).all(&db).await?;
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&a.id) && ids.contains(&b.id));

    product::Entity::delete_by_id(a.id).exec(&db).await?;
    product::Entity::delete_by_id(b.id).exec(&db).await?;
    Ok(())
}
