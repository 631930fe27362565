use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use crate::StoreError;

/// Filesystem-backed artifact store.
///
/// Owns a single base directory, fixed at construction, and persists
/// every artifact underneath it. The store holds no other state, so one
/// instance can serve any number of concurrent [`store`] calls.
///
/// [`store`]: ArtifactStore::store
pub struct ArtifactStore {
  base_dir: PathBuf,
}

impl ArtifactStore {
  /// Create a store rooted at the given base directory.
  ///
  /// The directory is taken as-is and is not required to exist yet; it
  /// comes into being on the first write that needs it.
  pub fn new(base_dir: impl Into<PathBuf>) -> Self {
    Self {
      base_dir: base_dir.into(),
    }
  }

  /// The base directory all artifacts are resolved against.
  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }

  /// Persist `payload` at `relative_path` under the base directory.
  ///
  /// Missing intermediate directories are created first; an existing
  /// file at the destination is overwritten. On success the resolved
  /// absolute path is returned, in the host OS's canonical form.
  ///
  /// Concurrent calls for different destinations do not interfere,
  /// even when they race on creating a shared parent directory.
  /// Concurrent calls for the same destination are not serialized; the
  /// last write to complete determines the file content.
  pub async fn store(
    &self,
    relative_path: &str,
    payload: impl Into<Bytes>,
  ) -> Result<PathBuf, StoreError> {
    if relative_path.trim().is_empty() {
      return Err(StoreError::MissingDestination);
    }

    let path = self.resolve(relative_path);

    if let Some(parent) = path.parent() {
      // create_dir_all reports "already exists" as success, which also
      // covers two calls racing on a shared ancestor.
      fs::create_dir_all(parent)
        .await
        .map_err(|e| StoreError::from_io(e, parent.to_path_buf()))?;
    }

    let payload = payload.into();
    fs::write(&path, &payload)
      .await
      .map_err(|e| StoreError::from_io(e, path.clone()))?;

    debug!(path = %path.display(), bytes = payload.len(), "artifact stored");

    Ok(path)
  }

  /// Resolve `relative` against the base directory, lexically.
  ///
  /// The relative path's components are appended to the base. `.`
  /// segments are dropped and a `..` segment pops the segment before
  /// it. Root or drive prefixes in `relative` are ignored, so the
  /// result always continues from the base directory.
  fn resolve(&self, relative: &str) -> PathBuf {
    let mut path = self.base_dir.clone();
    for component in Path::new(relative).components() {
      match component {
        Component::Normal(segment) => path.push(segment),
        Component::ParentDir => {
          path.pop();
        }
        Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
      }
    }
    path
  }
}
