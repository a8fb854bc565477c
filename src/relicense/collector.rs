//! Candidate file discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::{LicenseSwapError, Result};

/// Fail with a setup error unless `dir` is an existing directory
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(LicenseSwapError::DirectoryNotFound(dir.to_path_buf()));
    }
    Ok(())
}

/// Regular files under `root` whose extension is one of `extensions`,
/// sorted by path.
pub fn collect_candidates(
    root: &Path,
    recursive: bool,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let walker = if recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            LicenseSwapError::io(path, e.into())
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));
        if matches {
            candidates.push(path.to_path_buf());
        }
    }

    candidates.sort();
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.c"), "").unwrap();
        fs::write(dir.path().join("a.c"), "").unwrap();
        fs::write(dir.path().join("a.h"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.c"), "").unwrap();
        dir
    }

    fn names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_flat_collection_is_sorted() {
        let dir = tree();
        let found = collect_candidates(dir.path(), false, &["c".to_string()]).unwrap();
        assert_eq!(names(dir.path(), &found), vec!["a.c", "b.c"]);
    }

    #[test]
    fn test_recursive_collection() {
        let dir = tree();
        let exts = vec!["c".to_string(), "h".to_string()];
        let found = collect_candidates(dir.path(), true, &exts).unwrap();
        assert_eq!(names(dir.path(), &found), vec!["a.c", "a.h", "b.c", "sub/c.c"]);
    }

    #[test]
    fn test_ensure_directory() {
        let dir = tree();
        assert!(ensure_directory(dir.path()).is_ok());
        let err = ensure_directory(&dir.path().join("a.c")).unwrap_err();
        assert!(matches!(err, LicenseSwapError::DirectoryNotFound(_)));
        assert!(ensure_directory(&dir.path().join("nope")).is_err());
    }
}
