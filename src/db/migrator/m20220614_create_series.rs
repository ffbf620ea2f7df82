use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Series::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Series::Title).text().null())
                    .col(ColumnDef::new(Series::Synopsis).text().null())
                    .col(ColumnDef::new(Series::Season).integer().not_null())
                    .col(ColumnDef::new(Series::EpisodeCount).integer().not_null())
                    .col(ColumnDef::new(Series::Cast).text().null())
                    .col(ColumnDef::new(Series::Category).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Series {
    Table,
    Id,
    Title,
    Synopsis,
    Season,
    EpisodeCount,
    Cast,
    Category,
}
