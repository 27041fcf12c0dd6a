//! # Directory Walker Module
//!
//! Questo modulo gestisce la discovery ricorsiva dei file sorgente.
//!
//! ## Responsabilità:
//! - Enumerazione ricorsiva di tutti i file non nascosti sotto una root
//! - Esclusione delle entry nascoste (nome che inizia con `.`), file e directory
//! - Tolleranza agli errori di lettura: un sottoalbero illeggibile viene loggato
//!   e contribuisce zero file, i sibling non sono toccati
//!
//! ## Meccanismo:
//! Un set di letture directory in sospeso (`FuturesUnordered`): ogni directory
//! scoperta durante la traversal aggiunge una nuova lettura al set, la traversal
//! termina quando il set si svuota. Un unico punto di completamento dopo che
//! tutte le letture sono risolte, senza pre-calcolare l'albero.
//!
//! ## Esempio:
//! ```no_run
//! use std::path::Path;
//! use batch_image_converter::walker;
//!
//! # async fn run() {
//! let files = walker::collect_files(Path::new("src/assets/images")).await;
//! for file in &files {
//!     // process file
//! }
//! # }
//! ```

use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// A single directory listing result: files found plus subdirectories to read next
enum Entry {
    File(PathBuf),
    Dir(PathBuf),
}

/// Check if a directory entry is hidden (name starts with a dot)
fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Recursively collect all non-hidden files under `root`.
///
/// Returns the full flattened list only after every directory read has
/// completed. Directory read failures are logged and their subtree is
/// treated as empty.
pub async fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut pending = FuturesUnordered::new();
    pending.push(read_directory(root.to_path_buf()));

    let mut files = Vec::new();

    while let Some(result) = pending.next().await {
        match result {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Entry::File(path) => files.push(path),
                        Entry::Dir(path) => pending.push(read_directory(path)),
                    }
                }
            }
            Err((dir, e)) => {
                warn!("⚠️ Failed to read directory {}: {}", dir.display(), e);
            }
        }
    }

    debug!("Traversal complete: {} files discovered", files.len());
    files
}

/// Read a single directory level, returning its files and subdirectories.
async fn read_directory(dir: PathBuf) -> Result<Vec<Entry>, (PathBuf, std::io::Error)> {
    let mut reader = fs::read_dir(&dir).await.map_err(|e| (dir.clone(), e))?;
    let mut entries = Vec::new();

    loop {
        let entry = match reader.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => return Err((dir, e)),
        };

        if is_hidden(&entry.file_name()) {
            debug!("Skipping hidden entry: {}", entry.path().display());
            continue;
        }

        match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => entries.push(Entry::Dir(entry.path())),
            Ok(file_type) if file_type.is_file() => entries.push(Entry::File(entry.path())),
            Ok(_) => debug!("Skipping non-regular entry: {}", entry.path().display()),
            Err(e) => warn!("⚠️ Failed to stat {}: {}", entry.path().display(), e),
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    async fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(path, b"x").await.unwrap();
    }

    #[tokio::test]
    async fn test_collects_files_at_any_depth_exactly_once() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("a.jpg")).await;
        touch(&root.join("sub/b.png")).await;
        touch(&root.join("sub/deep/deeper/c.gif")).await;
        touch(&root.join("other/d.svg")).await;

        let files = collect_files(root).await;
        let found: HashSet<_> = files.iter().cloned().collect();

        assert_eq!(files.len(), 4, "every file appears exactly once");
        assert!(found.contains(&root.join("a.jpg")));
        assert!(found.contains(&root.join("sub/b.png")));
        assert!(found.contains(&root.join("sub/deep/deeper/c.gif")));
        assert!(found.contains(&root.join("other/d.svg")));
    }

    #[tokio::test]
    async fn test_hidden_files_and_directories_excluded() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("visible.jpg")).await;
        touch(&root.join(".DS_Store")).await;
        touch(&root.join(".cache/ignored.png")).await;
        touch(&root.join("sub/.hidden.gif")).await;
        touch(&root.join("sub/kept.png")).await;

        let files = collect_files(root).await;
        let found: HashSet<_> = files.iter().cloned().collect();

        assert_eq!(files.len(), 2);
        assert!(found.contains(&root.join("visible.jpg")));
        assert!(found.contains(&root.join("sub/kept.png")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_subtree_does_not_block_siblings() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("readable/kept.png")).await;
        touch(&root.join("blocked/lost.png")).await;

        let blocked = root.join("blocked");
        std::fs::set_permissions(&blocked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let files = collect_files(root).await;

        let blocked_was_unreadable = std::fs::read_dir(&blocked).is_err();
        // Restore permissions so the tempdir can be cleaned up
        std::fs::set_permissions(&blocked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(
            files.contains(&root.join("readable/kept.png")),
            "sibling subtree must still be enumerated"
        );
        if blocked_was_unreadable {
            // Privileged runs can read 0o000 directories; only assert the
            // empty-subtree contract when the read actually failed
            assert!(!files.contains(&root.join("blocked/lost.png")));
        }
    }

    #[tokio::test]
    async fn test_missing_root_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");

        let files = collect_files(&missing).await;
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_matches_walkdir_listing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(&root.join("one.jpg")).await;
        touch(&root.join("a/two.png")).await;
        touch(&root.join("a/b/three.gif")).await;
        touch(&root.join("c/four.jpeg")).await;
        touch(&root.join("c/.skipme")).await;

        let ours: HashSet<_> = collect_files(root).await.into_iter().collect();

        let reference: HashSet<_> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
            .map(|e| e.path().to_path_buf())
            .collect();

        assert_eq!(ours, reference);
    }
}
