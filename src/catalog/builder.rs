use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::blacklist::Blacklist;
use crate::catalog::filter::PluginFilter;
use crate::catalog::history::{PluginHistory, PluginRelease};
use crate::catalog::repository::ArtifactRepository;
use crate::maven::coordinates::{ArtifactCoordinates, MavenArtifactId, MavenClassifier, MavenGroupId};
use crate::maven::version::VersionNumber;

/// Version strings carrying this marker are pre-releases and never catalogued.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Version strings carrying this marker are non-public point releases cut
/// for targeted fixes and never exposed in the public catalog.
pub const INTERNAL_RELEASE_MARKER: &str = "INTERNAL";

/// Where to look for the core distributable.
///
/// The distributable changed both its group id and its artifact id at one
/// point in the product's history. Discovery scans the current group without
/// a bound and the legacy group up to `legacy_cap`, the version at which the
/// current group took over.
#[derive(Clone, Debug)]
pub struct CoreLineage {
    pub current_group_id: MavenGroupId,
    pub current_artifact_id: MavenArtifactId,
    pub legacy_group_id: MavenGroupId,
    pub legacy_artifact_id: MavenArtifactId,
    pub legacy_cap: VersionNumber,
}

/// One release of the core distributable.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CoreRelease {
    pub coordinates: ArtifactCoordinates,
}

/// Builds the update catalog from a repository's raw artifact listings.
///
/// Holds no mutable state across discovery runs apart from the filter chain,
/// which must not be mutated while a discovery call is in flight (discovery
/// takes `&self`, filter mutation `&mut self`). The blacklist is injected at
/// construction and read-only afterwards.
pub struct CatalogBuilder<R: ArtifactRepository> {
    repository: Arc<R>,
    blacklist: Blacklist,
    lineage: CoreLineage,
    filters: Vec<Box<dyn PluginFilter>>,
}

impl<R: ArtifactRepository> CatalogBuilder<R> {
    pub fn new(repository: Arc<R>, blacklist: Blacklist, lineage: CoreLineage) -> CatalogBuilder<R> {
        CatalogBuilder {
            repository,
            blacklist,
            lineage,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(&mut self, filter: Box<dyn PluginFilter>) {
        self.filters.push(filter);
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
    }

    /// Discovers every publicly visible plugin release and groups it into
    /// per-plugin histories, keyed by lower-cased artifact id.
    ///
    /// Snapshots, internal releases and blacklisted artifacts are skipped
    /// before grouping; the filter chain is evaluated per release, and a
    /// rejection skips only that release. Two coordinates that differ only
    /// in group id land in the same version slot (last write wins) while
    /// both group ids are recorded.
    pub async fn list_plugins(&self) -> anyhow::Result<BTreeMap<String, PluginHistory>> {
        let mut plugins: BTreeMap<String, PluginHistory> = BTreeMap::new();
        let mut noticed: HashSet<String> = HashSet::new();

        let coordinates = self.repository.list_all_plugins().await?;
        'coordinates: for c in coordinates {
            if c.version.contains(SNAPSHOT_MARKER) {
                continue;
            }
            if c.version.contains(INTERNAL_RELEASE_MARKER) {
                continue;
            }
            if self.blacklist.is_artifact_blacklisted(&c.artifact_id.0) {
                // one notice per artifact id, not one per version
                if noticed.insert(c.artifact_id.0.clone()) {
                    info!(
                        artifact_id = %c.artifact_id.0,
                        reason = self.blacklist.artifact_reason(&c.artifact_id.0),
                        "ignoring blacklisted artifact"
                    );
                }
                continue;
            }
            if self.blacklist.is_version_blacklisted(&c.artifact_id.0, &c.version) {
                info!(
                    artifact_id = %c.artifact_id.0,
                    version = %c.version,
                    reason = self.blacklist.version_reason(&c.artifact_id.0, &c.version),
                    "ignoring blacklisted version"
                );
                continue;
            }

            let history = plugins
                .entry(c.artifact_id.0.to_lowercase())
                .or_insert_with(|| PluginHistory::new(c.artifact_id.clone()));

            let release = PluginRelease::new(c.clone(), history.artifact_id.clone());

            for filter in &self.filters {
                if filter.should_exclude(&release) {
                    debug!(
                        artifact_id = %c.artifact_id.0,
                        version = %c.version,
                        "release rejected by filter chain"
                    );
                    continue 'coordinates;
                }
            }

            history.add_release(release);
            history.group_ids.insert(c.group_id);
        }

        Ok(plugins)
    }

    /// Discovers the release line of the core distributable across both of
    /// its group-id eras, most recent release first.
    ///
    /// The current group is scanned unbounded, then the legacy group capped
    /// at the handover version; on a boundary-version tie the legacy pass
    /// overwrites the slot.
    pub async fn list_core_distributable(
        &self,
    ) -> anyhow::Result<BTreeMap<Reverse<VersionNumber>, CoreRelease>> {
        let mut releases = BTreeMap::new();

        self.scan_core(&mut releases, &self.lineage.current_group_id, None)
            .await?;
        self.scan_core(
            &mut releases,
            &self.lineage.legacy_group_id,
            Some(&self.lineage.legacy_cap),
        )
        .await?;

        Ok(releases)
    }

    async fn scan_core(
        &self,
        releases: &mut BTreeMap<Reverse<VersionNumber>, CoreRelease>,
        group_id: &MavenGroupId,
        cap: Option<&VersionNumber>,
    ) -> anyhow::Result<()> {
        let coordinates = self.repository.list_all_core_artifacts(group_id).await?;
        for c in coordinates {
            if c.version.contains(SNAPSHOT_MARKER) {
                continue;
            }
            if c.version.contains(INTERNAL_RELEASE_MARKER) {
                continue;
            }
            if c.artifact_id != self.lineage.current_artifact_id
                && c.artifact_id != self.lineage.legacy_artifact_id
            {
                continue;
            }
            // only the unclassified artifact is the full distributable
            if c.classifier != MavenClassifier::Unclassified {
                continue;
            }
            if self.blacklist.is_version_blacklisted(&c.artifact_id.0, &c.version) {
                info!(
                    artifact_id = %c.artifact_id.0,
                    version = %c.version,
                    reason = self.blacklist.version_reason(&c.artifact_id.0, &c.version),
                    "ignoring blacklisted version"
                );
                continue;
            }

            let version = VersionNumber::new(&c.version);
            if let Some(cap) = cap {
                if version.is_newer_than(cap) {
                    continue;
                }
            }

            releases.insert(Reverse(version), CoreRelease { coordinates: c });
        }
        Ok(())
    }

    /// Finds one admitted plugin release by exact coordinates.
    ///
    /// Runs the full discovery pipeline and scans linearly - the cost is
    /// that of a complete catalog build, not of an indexed lookup.
    pub async fn find_plugin(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> anyhow::Result<Option<PluginRelease>> {
        let plugins = self.list_plugins().await?;

        for history in plugins.values() {
            for release in history.releases.values() {
                if release.is_equal_to(group_id, artifact_id, version) {
                    return Ok(Some(release.clone()));
                }
            }
        }
        Ok(None)
    }
}
