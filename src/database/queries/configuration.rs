use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde_json::Value;

use crate::database::models::{Configuration, ConfigurationDoc, ConfigurationRow, Parameter};

/// Fixed key of the single configuration document.
pub const GLOBAL_CONFIG_KEY: &str = "global_config";

fn parse_row(row: ConfigurationRow) -> Result<Configuration, sqlx::Error> {
    row.into_configuration()
        .map_err(|e| sqlx::Error::Protocol(format!("invalid configuration document: {}", e)))
}

pub async fn get_configuration(key: &str) -> Result<Option<Configuration>, sqlx::Error> {
    let pool = crate::database::get_database_pool()?;
    let row = sqlx::query_as::<_, ConfigurationRow>(
        "SELECT key, data, version, updated_at FROM configurations WHERE key = ?1",
    )
    .bind(key)
    .fetch_optional(pool.as_ref())
    .await?;

    row.map(parse_row).transpose()
}

pub async fn get_all_configurations() -> Result<Vec<Configuration>, sqlx::Error> {
    let pool = crate::database::get_database_pool()?;
    let rows = sqlx::query_as::<_, ConfigurationRow>(
        "SELECT key, data, version, updated_at FROM configurations ORDER BY key",
    )
    .fetch_all(pool.as_ref())
    .await?;

    rows.into_iter().map(parse_row).collect()
}

/// Shared read-modify-write cycle for the parameter mutations. Runs inside
/// one transaction; a failed lookup rolls back without writing anything, so
/// the write counter only moves when the document actually changed.
async fn mutate_document<F>(mutate: F) -> Result<bool, sqlx::Error>
where
    F: FnOnce(&mut ConfigurationDoc) -> bool,
{
    let pool = crate::database::get_database_pool()?;
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, ConfigurationRow>(
        "SELECT key, data, version, updated_at FROM configurations WHERE key = ?1",
    )
    .bind(GLOBAL_CONFIG_KEY)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        return Ok(false);
    };
    let mut config = parse_row(row)?;

    if !mutate(&mut config.data) {
        return Ok(false);
    }

    let data = serde_json::to_string(&config.data).map_err(|_| {
        sqlx::Error::Protocol("Failed to serialize configuration document".to_string())
    })?;

    sqlx::query(
        "UPDATE configurations SET data = ?1, version = version + 1, updated_at = ?2 WHERE key = ?3",
    )
    .bind(data)
    .bind(Utc::now())
    .bind(GLOBAL_CONFIG_KEY)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}

/// Sets the value of a parameter, located by first-match group id then
/// first-match key within that group.
pub async fn update_parameter(
    group_id: &str,
    parameter_key: &str,
    new_value: Value,
) -> Result<bool, sqlx::Error> {
    mutate_document(|doc| doc.set_parameter_value(group_id, parameter_key, new_value)).await
}

pub async fn delete_parameter(group_id: &str, parameter_key: &str) -> Result<bool, sqlx::Error> {
    mutate_document(|doc| doc.remove_parameter(group_id, parameter_key)).await
}

pub async fn add_parameter(group_id: &str, parameter: Parameter) -> Result<bool, sqlx::Error> {
    mutate_document(|doc| doc.add_parameter(group_id, parameter)).await
}

/// Reads the schema file and overwrites the stored document unconditionally,
/// resetting the write counter to 1.
pub async fn load_schema_to_db(schema_path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema file {}", schema_path.display()))?;
    let doc: ConfigurationDoc = serde_json::from_str(&raw)
        .with_context(|| format!("invalid schema file {}", schema_path.display()))?;
    let data = serde_json::to_string(&doc)?;

    let pool = crate::database::get_database_pool()?;
    sqlx::query(
        r#"
        INSERT INTO configurations (key, data, version, updated_at)
        VALUES (?1, ?2, 1, ?3)
        ON CONFLICT (key) DO UPDATE SET
            data = excluded.data,
            version = 1,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(GLOBAL_CONFIG_KEY)
    .bind(data)
    .bind(Utc::now())
    .execute(pool.as_ref())
    .await?;

    tracing::info!("Schema loaded from {}", schema_path.display());
    Ok(())
}
