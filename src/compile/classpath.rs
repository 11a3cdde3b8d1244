//! Compilation classpath assembly.

use std::path::{Path, PathBuf};

/// Build the classpath handed to the compiler.
///
/// The output directory always comes first, followed by the Scala library
/// (omitted for Java-only compiles), then the caller's entries in their
/// original order. Entries are neither deduplicated nor normalized.
pub fn assemble(
    output_dir: &Path,
    library: &Path,
    java_only: bool,
    explicit: &[PathBuf],
) -> Vec<PathBuf> {
    let mut classpath = Vec::with_capacity(explicit.len() + 2);
    classpath.push(output_dir.to_path_buf());
    if !java_only {
        classpath.push(library.to_path_buf());
    }
    classpath.extend(explicit.iter().cloned());
    classpath
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_with_library() {
        let cp = assemble(
            Path::new("/out"),
            Path::new("/lib/scala-library.jar"),
            false,
            &[PathBuf::from("/a.jar"), PathBuf::from("/b.jar")],
        );
        assert_eq!(
            cp,
            vec![
                PathBuf::from("/out"),
                PathBuf::from("/lib/scala-library.jar"),
                PathBuf::from("/a.jar"),
                PathBuf::from("/b.jar"),
            ]
        );
    }

    #[test]
    fn test_assemble_java_only_omits_library() {
        let cp = assemble(
            Path::new("/out"),
            Path::new("/lib/scala-library.jar"),
            true,
            &[PathBuf::from("/a.jar")],
        );
        assert_eq!(cp, vec![PathBuf::from("/out"), PathBuf::from("/a.jar")]);
    }

    #[test]
    fn test_assemble_keeps_duplicates() {
        let lib = PathBuf::from("/lib/scala-library.jar");
        let cp = assemble(Path::new("/out"), &lib, false, &[lib.clone(), lib.clone()]);
        assert_eq!(cp.len(), 4);
        assert_eq!(cp.iter().filter(|p| **p == lib).count(), 3);
    }

    #[test]
    fn test_assemble_empty_explicit() {
        let cp = assemble(Path::new("out"), Path::new("lib.jar"), true, &[]);
        assert_eq!(cp, vec![PathBuf::from("out")]);
    }
}
