use std::collections::{BTreeMap, BTreeSet};

use crate::maven::coordinates::{ArtifactCoordinates, MavenArtifactId, MavenGroupId};
use crate::maven::version::VersionNumber;

/// One admitted release of a plugin, bound to the history it belongs to.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PluginRelease {
    pub coordinates: ArtifactCoordinates,
    /// Display-form id of the owning [`PluginHistory`].
    pub plugin_id: MavenArtifactId,
}

impl PluginRelease {
    pub fn new(coordinates: ArtifactCoordinates, plugin_id: MavenArtifactId) -> PluginRelease {
        PluginRelease {
            coordinates,
            plugin_id,
        }
    }

    pub fn version(&self) -> VersionNumber {
        VersionNumber::new(&self.coordinates.version)
    }

    pub fn is_equal_to(&self, group_id: &str, artifact_id: &str, version: &str) -> bool {
        self.coordinates.group_id.0 == group_id
            && self.coordinates.artifact_id.0 == artifact_id
            && self.coordinates.version == version
    }
}

/// The accumulated release record of one plugin, keyed by version.
///
/// A plugin may have been released under more than one group id over its
/// lifetime; every observed group id is kept. All releases in one history
/// share the artifact id (case-insensitively) - the catalog builder groups
/// by lower-cased id, the display form is kept here.
#[derive(Clone, Debug)]
pub struct PluginHistory {
    pub artifact_id: MavenArtifactId,
    pub group_ids: BTreeSet<MavenGroupId>,
    pub releases: BTreeMap<VersionNumber, PluginRelease>,
}

impl PluginHistory {
    pub fn new(artifact_id: MavenArtifactId) -> PluginHistory {
        PluginHistory {
            artifact_id,
            group_ids: BTreeSet::new(),
            releases: BTreeMap::new(),
        }
    }

    /// Versions are unique within a history; a second release with an equal
    /// version replaces the stored record (last write wins).
    pub fn add_release(&mut self, release: PluginRelease) {
        self.releases.insert(release.version(), release);
    }

    pub fn latest(&self) -> Option<&PluginRelease> {
        self.releases.last_key_value().map(|(_, release)| release)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn release(artifact_id: &str, version: &str) -> PluginRelease {
        PluginRelease::new(
            ArtifactCoordinates::new("org.example.plugins", artifact_id, version),
            MavenArtifactId(artifact_id.to_string()),
        )
    }

    #[test]
    fn test_latest_is_highest_version_regardless_of_insertion_order() {
        let mut history = PluginHistory::new(MavenArtifactId("foo".to_string()));
        history.add_release(release("foo", "1.10"));
        history.add_release(release("foo", "2.0"));
        history.add_release(release("foo", "1.9"));

        assert_eq!(history.latest().unwrap().coordinates.version, "2.0");
        assert_eq!(history.releases.len(), 3);
    }

    #[test]
    fn test_equivalent_versions_collapse_to_one_slot() {
        let mut history = PluginHistory::new(MavenArtifactId("foo".to_string()));
        history.add_release(release("foo", "1.2"));
        history.add_release(release("foo", "1.2.0"));

        assert_eq!(history.releases.len(), 1);
        // last write wins
        assert_eq!(history.latest().unwrap().coordinates.version, "1.2.0");
    }

    #[test]
    fn test_is_equal_to() {
        let r = release("foo", "1.0");
        assert!(r.is_equal_to("org.example.plugins", "foo", "1.0"));
        assert!(!r.is_equal_to("org.example.plugins", "foo", "1.1"));
        assert!(!r.is_equal_to("org.other", "foo", "1.0"));
    }
}
