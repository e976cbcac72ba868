use async_trait::async_trait;

use crate::informations::repo_types::{InformationRecord, NewInformation};
use crate::locations::repo_types::{LocationRecord, LocationSummary, NewLocation};

/// Append-only location log.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn insert_location(&self, location: &NewLocation) -> anyhow::Result<LocationRecord>;

    /// Newest first. Only the public columns are loaded.
    async fn list_locations(&self) -> anyhow::Result<Vec<LocationSummary>>;
}

#[async_trait]
pub trait InformationStore: Send + Sync {
    async fn insert_information(
        &self,
        information: &NewInformation,
    ) -> anyhow::Result<InformationRecord>;
}
