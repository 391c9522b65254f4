//! Staged tree checksum calculation.
//!
//! Digests the whole build directory so repeated runs with identical inputs
//! can be compared by a single value.

use crate::bundler::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates a SHA-256 checksum of a directory tree.
///
/// Entries are visited in sorted relative-path order. Directories contribute
/// their path, regular files their path and content, symlinks their path and
/// target. On unix, directories and files also contribute their permission
/// bits. The result depends on the tree's shape, bytes and modes, never on
/// traversal order or timestamps.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the tree
/// * `Err` - If the directory cannot be traversed or a file cannot be read
pub async fn calculate_tree_sha256(dir_path: &Path) -> Result<String> {
    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).min_depth(1).follow_links(false) {
        entries.push(entry.fs_context("walking directory for hashing", dir_path)?);
    }

    // Sort by path for deterministic ordering
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    for entry in entries {
        let rel_path = entry
            .path()
            .strip_prefix(dir_path)
            .map_err(std::io::Error::other)
            .fs_context("walking directory for hashing", entry.path())?;
        hasher.update(rel_path.to_string_lossy().as_bytes());
        hasher.update([0u8]);

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            let target = tokio::fs::read_link(entry.path())
                .await
                .fs_context("reading symlink for hashing", entry.path())?;
            hasher.update(b"->");
            hasher.update(target.to_string_lossy().as_bytes());
            hasher.update([0u8]);
            continue;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = entry
                .metadata()
                .fs_context("reading metadata for hashing", entry.path())?;
            hasher.update(metadata.permissions().mode().to_le_bytes());
        }

        if file_type.is_dir() {
            hasher.update(b"/");
            hasher.update([0u8]);
            continue;
        }

        let mut file = tokio::fs::File::open(entry.path())
            .await
            .fs_context("opening file for hashing", entry.path())?;

        loop {
            let n = file
                .read(&mut buffer)
                .await
                .fs_context("reading file for hash calculation", entry.path())?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
        hasher.update([0u8]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn identical_trees_hash_identically() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        for root in [a.path(), b.path()] {
            std::fs::create_dir_all(root.join("x/y")).unwrap();
            std::fs::write(root.join("x/y/file"), b"same").unwrap();
            std::fs::write(root.join("top"), b"top").unwrap();
        }

        let left = calculate_tree_sha256(a.path()).await.unwrap();
        let right = calculate_tree_sha256(b.path()).await.unwrap();
        assert_eq!(left, right);
        assert_eq!(left.len(), 64);
    }

    #[tokio::test]
    async fn extra_or_changed_files_change_the_hash() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a"), b"1").unwrap();
        let before = calculate_tree_sha256(dir.path()).await.unwrap();

        std::fs::write(dir.path().join("a"), b"2").unwrap();
        let changed = calculate_tree_sha256(dir.path()).await.unwrap();
        assert_ne!(before, changed);

        std::fs::write(dir.path().join("a"), b"1").unwrap();
        std::fs::write(dir.path().join("stale"), b"").unwrap();
        let extra = calculate_tree_sha256(dir.path()).await.unwrap();
        assert_ne!(before, extra);
    }

    #[tokio::test]
    async fn empty_directories_change_the_hash() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a"), b"1").unwrap();
        let before = calculate_tree_sha256(dir.path()).await.unwrap();

        std::fs::create_dir(dir.path().join("empty")).unwrap();
        let after = calculate_tree_sha256(dir.path()).await.unwrap();
        assert_ne!(before, after);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn lost_executable_bit_changes_the_hash() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let exe = dir.path().join("electron");
        std::fs::write(&exe, b"bin").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
        let executable = calculate_tree_sha256(dir.path()).await.unwrap();

        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o644)).unwrap();
        let plain = calculate_tree_sha256(dir.path()).await.unwrap();
        assert_ne!(executable, plain);
    }
}
