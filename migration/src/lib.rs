//! Schema migrations for both services.
//!
//! Each service owns one table and runs its own migrator, recording applied
//! versions in a service-specific bookkeeping table so the two services can
//! point at the same database without seeing each other's history.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_movies;
mod m20250301_000002_create_casts;

pub struct MovieMigrator;

#[async_trait::async_trait]
impl MigratorTrait for MovieMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_movies::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("movie_service_migrations").into_iden()
    }
}

pub struct CastMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CastMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000002_create_casts::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("cast_service_migrations").into_iden()
    }
}
