use sea_orm_migration::prelude::*;

// The (city, status) pair covers the most common filter combination; the
// title index backs search-prefix lookups. Without them every filtered read
// is a full scan of `listings`.

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Listings::Table)
                    .col(Listings::City)
                    .col(Listings::Status)
                    .name("idx_listings_city_status")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Listings::Table)
                    .col(Listings::Title)
                    .name("idx_listings_title")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Images::Table)
                    .col(Images::ListingId)
                    .name("idx_images_listing_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_images_listing_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_listings_title").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_listings_city_status").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Listings {
    Table,
    City,
    Status,
    Title,
}

#[derive(Iden)]
enum Images {
    Table,
    ListingId,
}
