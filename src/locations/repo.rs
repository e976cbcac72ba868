use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use super::repo_types::{LocationRecord, LocationSummary, NewLocation};
use crate::db::PgStore;
use crate::store::LocationStore;

#[async_trait]
impl LocationStore for PgStore {
    async fn insert_location(&self, location: &NewLocation) -> anyhow::Result<LocationRecord> {
        let record = sqlx::query_as::<_, LocationRecord>(
            r#"
            INSERT INTO locations (id, latitude, longitude, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, latitude, longitude, ip_address, user_agent, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.ip_address)
        .bind(&location.user_agent)
        .fetch_one(self.pool())
        .await
        .context("insert location")?;
        Ok(record)
    }

    async fn list_locations(&self) -> anyhow::Result<Vec<LocationSummary>> {
        let rows = sqlx::query_as::<_, LocationSummary>(
            r#"
            SELECT latitude, longitude, created_at
              FROM locations
             ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await
        .context("list locations")?;
        Ok(rows)
    }
}
