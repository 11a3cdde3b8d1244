//! Artifact descriptors.
//!
//! A descriptor recognizes one named library artifact by filename, tolerating
//! an optional version suffix:
//!
//! - `scala-compiler.jar`
//! - `scala-compiler-2.11.8.jar`
//! - `scala-compiler-2.11.8-sources.jar` (with classifier `sources`)

use std::fmt;
use std::path::Path;

use regex::Regex;

/// Archive extension shared by every artifact.
pub const ARCHIVE_EXTENSION: &str = "jar";

/// Describes how to recognize a named artifact and what its
/// conventional unversioned filename is.
#[derive(Clone)]
pub struct ArtifactDescriptor {
    name: String,
    classifier: Option<String>,
    pattern: Regex,
    default_file_name: String,
}

impl ArtifactDescriptor {
    /// Create a descriptor for `name`, optionally restricted to a classifier.
    pub fn new(name: impl Into<String>, classifier: Option<&str>) -> Self {
        let name = name.into();
        let classifier = classifier.map(str::to_string);

        let classifier_suffix = classifier
            .as_deref()
            .map(|c| format!("-{}", regex::escape(c)))
            .unwrap_or_default();

        // Version suffix is "-" followed by anything, at most once.
        let source = format!(
            r"^{}(-.*)?{}\.{}$",
            regex::escape(&name),
            classifier_suffix,
            ARCHIVE_EXTENSION
        );
        let pattern = Regex::new(&source).expect("escaped artifact pattern is always valid");

        let default_file_name = match &classifier {
            Some(c) => format!("{}-{}.{}", name, c, ARCHIVE_EXTENSION),
            None => format!("{}.{}", name, ARCHIVE_EXTENSION),
        };

        ArtifactDescriptor {
            name,
            classifier,
            pattern,
            default_file_name,
        }
    }

    /// Base artifact name (e.g. `scala-compiler`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classifier, if any (e.g. `sources`).
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Filename without a version suffix (e.g. `scala-compiler.jar`).
    pub fn default_file_name(&self) -> &str {
        &self.default_file_name
    }

    /// Check a bare filename against the pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Check the final component of a path against the pattern.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.matches(n))
    }
}

impl fmt::Debug for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactDescriptor")
            .field("name", &self.name)
            .field("classifier", &self.classifier)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl PartialEq for ArtifactDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.classifier == other.classifier
    }
}

impl Eq for ArtifactDescriptor {}

impl fmt::Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classifier {
            Some(c) => write!(f, "{}:{}", self.name, c),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_matches_unversioned_and_versioned() {
        let compiler = ArtifactDescriptor::new("scala-compiler", None);
        assert!(compiler.matches("scala-compiler.jar"));
        assert!(compiler.matches("scala-compiler-2.11.8.jar"));
        assert!(!compiler.matches("scala-library.jar"));
        assert!(!compiler.matches("scala-compiler.zip"));
        assert!(!compiler.matches("my-scala-compiler.jar"));
    }

    #[test]
    fn test_version_wildcard_accepts_any_suffix() {
        // Accepted ambiguity: anything after a hyphen counts as a version.
        let compiler = ArtifactDescriptor::new("scala-compiler", None);
        assert!(compiler.matches("scala-compiler-extra.jar"));
        assert!(compiler.matches("scala-compiler-2.11.8-sources.jar"));
    }

    #[test]
    fn test_classifier_required_when_given() {
        let sources = ArtifactDescriptor::new("scala-library", Some("sources"));
        assert!(sources.matches("scala-library-sources.jar"));
        assert!(sources.matches("scala-library-2.11.8-sources.jar"));
        assert!(!sources.matches("scala-library.jar"));
        assert!(!sources.matches("scala-library-2.11.8.jar"));
    }

    #[test]
    fn test_name_is_escaped() {
        let desc = ArtifactDescriptor::new("a.b", None);
        assert!(desc.matches("a.b.jar"));
        assert!(!desc.matches("axb.jar"));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            ArtifactDescriptor::new("scala-compiler", None).default_file_name(),
            "scala-compiler.jar"
        );
        assert_eq!(
            ArtifactDescriptor::new("scala-library", Some("sources")).default_file_name(),
            "scala-library-sources.jar"
        );
    }

    #[test]
    fn test_matches_path_uses_file_name() {
        let library = ArtifactDescriptor::new("scala-library", None);
        assert!(library.matches_path(&PathBuf::from("/opt/scala/lib/scala-library-2.12.1.jar")));
        assert!(!library.matches_path(&PathBuf::from("/opt/scala-library-2.12.1.jar/other.jar")));
    }

    #[test]
    fn test_descriptor_equality_ignores_compiled_pattern() {
        assert_eq!(
            ArtifactDescriptor::new("scala-reflect", None),
            ArtifactDescriptor::new("scala-reflect", None)
        );
        assert_ne!(
            ArtifactDescriptor::new("scala-reflect", None),
            ArtifactDescriptor::new("scala-reflect", Some("sources"))
        );
    }
}
