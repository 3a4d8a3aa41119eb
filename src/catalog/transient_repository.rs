use std::collections::HashMap;

use async_trait::async_trait;

use crate::catalog::repository::ArtifactRepository;
use crate::maven::coordinates::{ArtifactCoordinates, MavenGroupId};

/// in-memory repository seeded from coordinate lists, neither optimized nor
/// particularly robust - for testing purposes
pub struct TransientRepository {
    plugins: Vec<ArtifactCoordinates>,
    core: HashMap<MavenGroupId, Vec<ArtifactCoordinates>>,
}

impl TransientRepository {
    pub fn new() -> TransientRepository {
        TransientRepository {
            plugins: Vec::new(),
            core: HashMap::new(),
        }
    }

    pub fn add_plugin(&mut self, coordinates: ArtifactCoordinates) {
        self.plugins.push(coordinates);
    }

    pub fn add_core_artifact(&mut self, coordinates: ArtifactCoordinates) {
        self.core
            .entry(coordinates.group_id.clone())
            .or_default()
            .push(coordinates);
    }
}

impl Default for TransientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactRepository for TransientRepository {
    async fn list_all_plugins(&self) -> anyhow::Result<Vec<ArtifactCoordinates>> {
        Ok(self.plugins.clone())
    }

    async fn list_all_core_artifacts(
        &self,
        group_id: &MavenGroupId,
    ) -> anyhow::Result<Vec<ArtifactCoordinates>> {
        Ok(self.core.get(group_id).cloned().unwrap_or_default())
    }
}
