use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_categories;
mod m20260801_000003_create_listings;
mod m20260801_000004_create_images;
mod m20260801_000005_add_listing_indexes;
mod m20260801_000006_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_categories::Migration),
            Box::new(m20260801_000003_create_listings::Migration),
            Box::new(m20260801_000004_create_images::Migration),
            Box::new(m20260801_000005_add_listing_indexes::Migration),
            Box::new(m20260801_000006_seed_categories::Migration),
        ]
    }
}
