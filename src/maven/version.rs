use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[.\-_]").unwrap();
}

/// Numeric tokens order numerically, everything else orders lexically and
/// ranks below any number - so `1.0 > 1.0-beta`, and a malformed version
/// string degrades to a deterministic lexical fallback instead of failing.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
enum Component {
    Qualifier(String),
    Numeric(u64),
}

/// A version string parsed into comparable components.
///
/// Parsing never fails. Tokens are split on '.', '-' and '_'; when two
/// versions have different component counts the missing components count as
/// numeric zero, so `1.2` and `1.2.0` compare equal. The original surface
/// string is kept for display.
#[derive(Clone, Debug)]
pub struct VersionNumber {
    original: String,
    components: Vec<Component>,
}

impl VersionNumber {
    pub fn new(version: &str) -> VersionNumber {
        let components = SEPARATOR_REGEX
            .split(version)
            .map(|token| match token.parse::<u64>() {
                Ok(n) => Component::Numeric(n),
                Err(_) => Component::Qualifier(token.to_string()),
            })
            .collect();

        VersionNumber {
            original: version.to_string(),
            components,
        }
    }

    /// Ceiling predicate for capped legacy discovery.
    pub fn is_newer_than(&self, cap: &VersionNumber) -> bool {
        self > cap
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        const PADDING: Component = Component::Numeric(0);
        let len = self.components.len().max(other.components.len());

        for i in 0..len {
            let ours = self.components.get(i).unwrap_or(&PADDING);
            let theirs = other.components.get(i).unwrap_or(&PADDING);

            match ours.cmp(theirs) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionNumber {}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
