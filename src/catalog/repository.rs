use async_trait::async_trait;

use crate::maven::coordinates::{ArtifactCoordinates, MavenGroupId};

/// Read access to the raw artifact listings of a Maven-style repository.
///
/// Implementations do the actual network or index I/O; the catalog builder
/// only consumes coordinate listings. A listing must be deterministic for an
/// unchanged repository state. Duplicate coordinates within one listing are
/// tolerated - admission is idempotent.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    async fn list_all_plugins(&self) -> anyhow::Result<Vec<ArtifactCoordinates>>;

    async fn list_all_core_artifacts(
        &self,
        group_id: &MavenGroupId,
    ) -> anyhow::Result<Vec<ArtifactCoordinates>>;
}
