use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

/// Exclusion rules loaded once at process start, immutable afterwards.
///
/// The source is a properties-style key-value list. A key of the shape
/// `artifactId` excludes every version of that artifact, a key of the shape
/// `artifactId-version` excludes exactly one version. The value, if any, is
/// a human-readable reason that is surfaced in the exclusion log.
#[derive(Clone, Debug)]
pub struct Blacklist {
    entries: HashMap<String, Option<String>>,
}

impl Blacklist {
    pub fn empty() -> Blacklist {
        Blacklist {
            entries: HashMap::new(),
        }
    }

    /// Failure to read the file is returned as an error - a catalog must
    /// not be built without its exclusion rules.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Blacklist> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to load blacklist from {:?}", path))?;
        Ok(Self::parse(&text))
    }

    /// One entry per line, `key=value` or `key:value`, '#' and '!' start
    /// comment lines, the value is optional.
    pub fn parse(text: &str) -> Blacklist {
        let mut entries = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = match line.find(['=', ':']) {
                Some(separator) => {
                    let (key, value) = line.split_at(separator);
                    let value = value[1..].trim();
                    let value = (!value.is_empty()).then(|| value.to_string());
                    (key.trim(), value)
                }
                None => (line, None),
            };

            entries.insert(key.to_string(), value);
        }

        Blacklist { entries }
    }

    pub fn is_artifact_blacklisted(&self, artifact_id: &str) -> bool {
        self.entries.contains_key(artifact_id)
    }

    pub fn is_version_blacklisted(&self, artifact_id: &str, version: &str) -> bool {
        self.entries.contains_key(&format!("{}-{}", artifact_id, version))
    }

    /// The recorded reason for an artifact-level entry, if the source had one.
    pub fn artifact_reason(&self, artifact_id: &str) -> Option<&str> {
        self.entries.get(artifact_id)?.as_deref()
    }

    /// The recorded reason for a version-level entry, if the source had one.
    pub fn version_reason(&self, artifact_id: &str, version: &str) -> Option<&str> {
        self.entries
            .get(&format!("{}-{}", artifact_id, version))?
            .as_deref()
    }
}
