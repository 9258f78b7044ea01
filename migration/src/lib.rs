pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_catalog_schema;

pub struct CatalogMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CatalogMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_catalog_schema::Migration)]
    }
}
