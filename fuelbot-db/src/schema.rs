//! Schema bootstrap for record tables
//!
//! Idempotent DDL, run once at startup. This is not a migration engine:
//! there is no versioning and no down path, only "make sure the tables
//! exist with the expected shape".

use sqlx::PgPool;

use crate::models::Refuel;
use crate::record::{Record, BASE_COLUMNS};

/// Ensure all record tables and their triggers exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    // updated_at is store-maintained: a trigger stamps it on every UPDATE
    sqlx::query(
        r#"
        CREATE OR REPLACE FUNCTION set_updated_at() RETURNS TRIGGER AS $$
        BEGIN
            NEW.updated_at = NOW();
            RETURN NEW;
        END;
        $$ LANGUAGE plpgsql
        "#,
    )
    .execute(pool)
    .await?;

    let refuel = Refuel::table_name();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {refuel} (
            {BASE_COLUMNS},
            odometer DOUBLE PRECISION NOT NULL,
            fuel_volume DOUBLE PRECISION NOT NULL,
            is_full BOOLEAN NOT NULL DEFAULT FALSE,
            skipped_previous BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "DROP TRIGGER IF EXISTS {refuel}_set_updated_at ON {refuel}"
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        r#"
        CREATE TRIGGER {refuel}_set_updated_at
        BEFORE UPDATE ON {refuel}
        FOR EACH ROW EXECUTE FUNCTION set_updated_at()
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}
