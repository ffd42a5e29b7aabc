use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Casts::Table)
                    .if_not_exists()
                    .col(pk_auto(Casts::Id))
                    .col(string_len(Casts::Name, 50))
                    .col(string_len_null(Casts::Nationality, 20))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Casts::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Casts {
    Table,
    Id,
    Name,
    Nationality,
}
