use sea_orm_migration::prelude::*;
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CATEGORIES: [(&str, &str); 3] = [
    ("electronics", "Electronics"),
    ("furniture", "Furniture"),
    ("vehicles", "Vehicles"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (slug, name) in CATEGORIES {
            let insert = Query::insert()
                .into_table(Categories::Table)
                .columns([Categories::Id, Categories::Slug, Categories::Name])
                .values_panic([Uuid::new_v4().into(), slug.into(), name.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (slug, _) in CATEGORIES {
            let delete = Query::delete()
                .from_table(Categories::Table)
                .and_where(Expr::col(Categories::Slug).eq(slug))
                .to_owned();
            manager.exec_stmt(delete).await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Slug,
    Name,
}
