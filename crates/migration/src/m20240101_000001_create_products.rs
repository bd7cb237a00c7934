//! Create `products` table.
//!
//! `id` is a server-assigned serial, `created_at` defaults to the insert time
//! and `updated_at` stays NULL until the first update.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(integer(Products::Id).primary_key().auto_increment())
                    .col(string_len(Products::Name, 100).not_null())
                    .col(string_len_null(Products::Description, 500))
                    .col(decimal_len(Products::Price, 10, 2).not_null())
                    .col(string_len(Products::Category, 50).not_null())
                    .col(string_len(Products::SupplierEmail, 255).not_null())
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Products::UpdatedAt))
                    .check(Expr::col(Products::Price).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
    SupplierEmail,
    CreatedAt,
    UpdatedAt,
}
