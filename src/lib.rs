//! Builds a curated, version-ordered index of the artifacts published to a
//! Maven-style repository: per-plugin release histories plus the release
//! line of the core distributable.

pub mod catalog;
pub mod maven;
