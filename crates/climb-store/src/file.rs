//! Whole-file load and save.
//!
//! The store file is read once at startup and rewritten once at shutdown.
//! Saving truncates the destination first; a failed save may leave a
//! partially written file behind.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

use climb_core::ClimbStore;

use crate::codec;
use crate::error::{CodecError, StoreError};

/// Default store file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "climblog.db";

/// Read the collection stored at `path`.
///
/// # Errors
///
/// Returns `StoreError::Open` if the file cannot be opened and
/// `StoreError::Decode` if its contents are malformed.
pub fn load(path: &Path) -> Result<ClimbStore, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let store = codec::decode(&mut reader).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        climbs = store.len(),
        attempts = store.attempt_count(),
        "loaded climb store"
    );
    Ok(store)
}

/// Like [`load`], but a missing file yields an empty store when
/// `create_if_missing` is set.
///
/// Only `NotFound` is forgiven. Permission errors and corrupt contents are
/// still reported.
///
/// # Errors
///
/// See [`load`].
pub fn load_or_create(path: &Path, create_if_missing: bool) -> Result<ClimbStore, StoreError> {
    match load(path) {
        Err(StoreError::Open { source, .. })
            if create_if_missing && source.kind() == ErrorKind::NotFound =>
        {
            tracing::info!(path = %path.display(), "no climb store found, starting empty");
            Ok(ClimbStore::new())
        }
        other => other,
    }
}

/// Overwrite `path` with the encoded collection.
///
/// The collection is encoded in memory first, so a collection that does not
/// fit the record layout leaves the existing file untouched.
///
/// # Errors
///
/// Returns `StoreError::Encode` if the collection cannot be encoded or the
/// write fails part way, and `StoreError::Create` if the file cannot be
/// created.
pub fn save(store: &ClimbStore, path: &Path) -> Result<(), StoreError> {
    let encode_err = |source: CodecError| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let bytes = codec::encode_to_vec(store.climbs()).map_err(encode_err)?;
    let mut file = File::create(path).map_err(|source| StoreError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&bytes)
        .and_then(|()| file.flush())
        .map_err(|e| encode_err(CodecError::Io(e)))?;

    tracing::debug!(
        path = %path.display(),
        climbs = store.len(),
        bytes = bytes.len(),
        "saved climb store"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
        assert!(err.to_string().contains("absent.db"));
    }

    #[test]
    fn load_or_create_forgives_only_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        assert!(load_or_create(&path, true).unwrap().is_empty());
        assert!(load_or_create(&path, false).is_err());

        let corrupt = dir.path().join("corrupt.db");
        std::fs::write(&corrupt, b"zz").unwrap();
        assert!(matches!(
            load_or_create(&corrupt, true),
            Err(StoreError::Decode { .. })
        ));
    }

    #[test]
    fn save_into_missing_directory_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("climblog.db");
        let err = save(&ClimbStore::new(), &path).unwrap_err();
        assert!(matches!(err, StoreError::Create { .. }));
    }
}
