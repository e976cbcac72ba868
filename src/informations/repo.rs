use anyhow::Context;
use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use super::repo_types::{InformationRecord, InformationRow, NewInformation, ReviewStatus};
use crate::db::PgStore;
use crate::store::InformationStore;

#[async_trait]
impl InformationStore for PgStore {
    async fn insert_information(
        &self,
        information: &NewInformation,
    ) -> anyhow::Result<InformationRecord> {
        let row = sqlx::query_as::<_, InformationRow>(
            r#"
            INSERT INTO informations
                (id, name, father, gender, phone_number, address, location, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, phone_number, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&information.name)
        .bind(&information.father)
        .bind(information.gender.as_str())
        .bind(&information.phone_number)
        .bind(&information.address)
        .bind(information.location.map(Json)) // NULL when no coordinates were sent
        .bind(ReviewStatus::Pending.as_str())
        .fetch_one(self.pool())
        .await
        .context("insert information")?;

        InformationRecord::try_from(row)
    }
}
