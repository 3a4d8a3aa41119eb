use crate::catalog::history::PluginRelease;

/// Admission predicate evaluated against every candidate release before it
/// enters the catalog. The builder holds an ordered chain of these; a single
/// rejection excludes the candidate (OR semantics, short-circuiting).
///
/// Implementations decide on the release alone and must not carry state
/// visible to other filters - the outcome may not depend on evaluation
/// order. Typical filters exclude releases below a minimum platform version
/// or releases covered by a security advisory.
pub trait PluginFilter: Send + Sync {
    fn should_exclude(&self, release: &PluginRelease) -> bool;
}
