use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::parameter::ConfigurationDoc;

/// Raw `configurations` row, document still serialized as JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct ConfigurationRow {
    pub key: String,
    pub data: String,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

/// Configuration as exposed over the API: row metadata with the parsed
/// document. The row `version` is the write counter, distinct from the
/// document's own schema version string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub key: String,
    pub data: ConfigurationDoc,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

impl ConfigurationRow {
    pub fn into_configuration(self) -> Result<Configuration, serde_json::Error> {
        Ok(Configuration {
            key: self.key,
            data: serde_json::from_str(&self.data)?,
            version: self.version,
            updated_at: self.updated_at,
        })
    }
}
