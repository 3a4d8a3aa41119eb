use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct MavenGroupId(pub String);

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct MavenArtifactId(pub String);

#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub enum MavenClassifier {
    Unclassified,
    Classified(String),
}

/// Identity of one published artifact. The version is kept as the raw
/// repository string; parsing and ordering live in [`crate::maven::version`].
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: String,
    pub classifier: MavenClassifier,
}

impl ArtifactCoordinates {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> ArtifactCoordinates {
        ArtifactCoordinates {
            group_id: MavenGroupId(group_id.to_string()),
            artifact_id: MavenArtifactId(artifact_id.to_string()),
            version: version.to_string(),
            classifier: MavenClassifier::Unclassified,
        }
    }

    pub fn with_classifier(self, classifier: &str) -> ArtifactCoordinates {
        ArtifactCoordinates {
            classifier: MavenClassifier::Classified(classifier.to_string()),
            ..self
        }
    }
}
