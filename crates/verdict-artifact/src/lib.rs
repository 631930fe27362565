//! Verdict Artifact
//!
//! Durable persistence for artifacts produced during test execution:
//! serialized reports and captured images. An [`ArtifactStore`] owns a
//! base directory and writes each artifact to a caller-chosen location
//! underneath it, bootstrapping missing directories on the way and
//! returning the resolved absolute path.
//!
//! The store is a thin adapter over the filesystem. It performs no
//! retries and no recovery; every I/O failure surfaces to the caller
//! carrying the operating system's own error text and the resolved
//! path that triggered it.

mod store;

pub use store::ArtifactStore;

use std::path::PathBuf;

/// Error type for artifact storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  /// The destination path was empty or whitespace-only.
  #[error("Please specify where the file should be saved")]
  MissingDestination,

  /// The operating system denied access to the resolved path.
  #[error("{source} '{}'", .path.display())]
  PermissionDenied {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Any other I/O failure, with the OS error text kept verbatim.
  #[error("{source} '{}'", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl StoreError {
  /// Classify an OS error against the path that triggered it.
  pub(crate) fn from_io(source: std::io::Error, path: PathBuf) -> Self {
    if source.kind() == std::io::ErrorKind::PermissionDenied {
      Self::PermissionDenied { path, source }
    } else {
      Self::Io { path, source }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::{Error, ErrorKind};

  #[test]
  fn missing_destination_has_a_fixed_message() {
    assert_eq!(
      StoreError::MissingDestination.to_string(),
      "Please specify where the file should be saved"
    );
  }

  #[test]
  fn permission_denied_kind_maps_to_permission_denied() {
    let err = StoreError::from_io(
      Error::from(ErrorKind::PermissionDenied),
      PathBuf::from("/base/dir"),
    );

    assert!(matches!(err, StoreError::PermissionDenied { .. }));
    let message = err.to_string();
    assert!(message.contains("permission denied"), "message: {message}");
    assert!(message.contains("/base/dir"), "message: {message}");
  }

  #[test]
  fn other_kinds_map_to_io() {
    let err = StoreError::from_io(
      Error::new(ErrorKind::StorageFull, "no space left on device"),
      PathBuf::from("/base/some.json"),
    );

    assert!(matches!(err, StoreError::Io { .. }));
    let message = err.to_string();
    assert!(message.contains("no space left on device"), "message: {message}");
    assert!(message.contains("/base/some.json"), "message: {message}");
  }
}
