//! File system utilities for staging.
//!
//! Provides idempotent directory handling, overwriting recursive copies with
//! symlink preservation, and moves, all reporting failures with path context.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Returns true if `path` exists and is a directory (following symlinks).
pub async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Moves a file or directory, replacing a destination file if present.
pub async fn move_path(from: &Path, to: &Path) -> Result<()> {
    if from == to {
        return Ok(());
    }
    fs::rename(from, to).await.fs_context("moving", from)
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading file metadata", from)?;
    if !metadata.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"))
            .fs_context("copying file", from);
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;
    Ok(())
}

/// Removes whatever sits at `path` without following symlinks.
fn clear_entry(path: &Path) -> Result<()> {
    let Ok(metadata) = std::fs::symlink_metadata(path) else {
        return Ok(());
    };
    if metadata.is_dir() {
        std::fs::remove_dir_all(path).fs_context("replacing directory", path)
    } else {
        std::fs::remove_file(path).fs_context("replacing file", path)
    }
}

/// Recursively copies the contents of `from` into `to`, creating `to` and
/// any of its parents as necessary.
///
/// Existing destination entries are overwritten; an entry whose kind
/// differs (file vs. directory vs. symlink) is replaced. Symlinks are
/// recreated rather than followed, which keeps framework bundles intact.
/// Fails if the source path is not a directory or doesn't exist.
///
/// Returns the number of files and symlinks copied.
pub async fn copy_dir_contents(from: &Path, to: &Path) -> Result<usize> {
    if !is_dir(from).await {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "does not exist or is not a directory",
        ))
        .fs_context("copying directory", from);
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();
    let task_path = from.clone();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || -> Result<usize> {
        let mut copied = 0usize;

        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry.fs_context("walking directory", &from)?;
            let rel_path = entry
                .path()
                .strip_prefix(&from)
                .map_err(io::Error::other)
                .fs_context("walking directory", entry.path())?;
            let dest_path = to.join(rel_path);
            let file_type = entry.file_type();

            if file_type.is_symlink() {
                let target =
                    std::fs::read_link(entry.path()).fs_context("reading symlink", entry.path())?;
                clear_entry(&dest_path)?;
                let linked = if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)
                } else {
                    symlink_file(&target, &dest_path)
                };
                linked.fs_context("creating symlink", &dest_path)?;
                copied += 1;
            } else if file_type.is_dir() {
                let existing = std::fs::symlink_metadata(&dest_path);
                if existing.is_ok_and(|m| !m.is_dir()) {
                    clear_entry(&dest_path)?;
                }
                std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
            } else if file_type.is_file() {
                let existing = std::fs::symlink_metadata(&dest_path);
                if existing.is_ok_and(|m| m.is_dir() || m.file_type().is_symlink()) {
                    clear_entry(&dest_path)?;
                }
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file", &dest_path)?;
                copied += 1;
            } else {
                // sockets, FIFOs and device nodes have no place in a bundle
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "unsupported file type",
                ))
                .fs_context("copying", entry.path());
            }
        }

        Ok(copied)
    })
    .await
    .map_err(|e| Error::Fs {
        context: "copying directory",
        path: task_path,
        error: io::Error::other(e),
    })?
}
