pub use sea_orm_migration::prelude::*;

mod m20250923_000001_create_business_tables;
mod m20251012_000001_add_debtor_call_tracking;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250923_000001_create_business_tables::Migration),
            Box::new(m20251012_000001_add_debtor_call_tracking::Migration),
        ]
    }
}
