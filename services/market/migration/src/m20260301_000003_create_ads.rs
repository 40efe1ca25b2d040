use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_ads_table()).await?;

        manager
            .create_index(
                Index::create()
                    .table(Ads::Table)
                    .col(Ads::Status)
                    .col(Ads::CreatedAt)
                    .name("idx_ads_status_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Ads::Table)
                    .col(Ads::UserId)
                    .name("idx_ads_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Ads::Table)
                    .col(Ads::CategoryId)
                    .name("idx_ads_category_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ads::Table).to_owned())
            .await
    }
}

fn create_ads_table() -> TableCreateStatement {
    Table::create()
        .table(Ads::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Ads::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Ads::Title).string().not_null())
        .col(ColumnDef::new(Ads::Description).text().not_null())
        .col(ColumnDef::new(Ads::Price).string().not_null())
        .col(ColumnDef::new(Ads::Location).string())
        .col(ColumnDef::new(Ads::ContactPhone).string())
        .col(ColumnDef::new(Ads::ContactEmail).string())
        .col(ColumnDef::new(Ads::ImageUrl).string())
        .col(
            ColumnDef::new(Ads::Status)
                .string()
                .not_null()
                .default("pending"),
        )
        .col(ColumnDef::new(Ads::UserId).integer().not_null())
        .col(ColumnDef::new(Ads::CategoryId).integer().not_null())
        .col(
            ColumnDef::new(Ads::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Ads::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Ads::Table, Ads::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Ads::Table, Ads::CategoryId)
                .to(Categories::Table, Categories::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(Iden)]
enum Ads {
    Table,
    Id,
    Title,
    Description,
    Price,
    Location,
    ContactPhone,
    ContactEmail,
    ImageUrl,
    Status,
    UserId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}
